// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the hitmark CLI.
//!
//! Highlights are drawn the way a results page would draw them: bold and
//! coloured against dimmer context, with a grey ellipsis where text was
//! skipped. OneDark on dark terminals, One Light on light ones.
//!
//! # Theme detection order
//!
//! 1. `HITMARK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! `NO_COLOR` or a non-TTY stdout turns colour off entirely; the output is
//! then the excerpt text with `[` `]` around highlights.

use hitmark::{Excerpt, HighlightedPage, HitList, PreparedQuery, Segment};
use std::sync::OnceLock;

/// Shown where an excerpt skips text.
pub const ELLIPSIS: &str = "…";

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background colours 7 and above (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    std::env::var("HITMARK_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| theme_from_colorfgbg(&v))
        })
        .unwrap_or(Theme::Dark)
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// A colour role, resolved against the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Highlighted match text
    Mark,
    /// Titles and headings
    Heading,
    /// Links
    Link,
    /// Ellipses, dates, secondary text
    Muted,
    /// Positive status
    Good,
    /// Negative status
    Bad,
}

impl Role {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (self, theme) {
            (Role::Mark, Theme::Dark) => (229, 192, 123),    // #e5c07b
            (Role::Mark, Theme::Light) => (193, 132, 1),     // #c18401
            (Role::Heading, Theme::Dark) => (86, 182, 194),  // #56b6c2
            (Role::Heading, Theme::Light) => (1, 132, 188),  // #0184bc
            (Role::Link, Theme::Dark) => (97, 175, 239),     // #61afef
            (Role::Link, Theme::Light) => (64, 120, 242),    // #4078f2
            (Role::Muted, Theme::Dark) => (92, 99, 112),     // #5c6370
            (Role::Muted, Theme::Light) => (160, 161, 167),  // #a0a1a7
            (Role::Good, Theme::Dark) => (152, 195, 121),    // #98c379
            (Role::Good, Theme::Light) => (80, 161, 79),     // #50a14f
            (Role::Bad, Theme::Dark) => (224, 108, 117),     // #e06c75
            (Role::Bad, Theme::Light) => (228, 86, 73),      // #e45649
        }
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme role with optional modifiers
pub fn themed(role: Role, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        paint(role, theme(), modifiers, text)
    } else {
        text.to_string()
    }
}

fn paint(role: Role, theme: Theme, modifiers: &[&str], text: &str) -> String {
    format!("{}{}{}{}", modifiers.join(""), rgb(role.rgb(theme)), text, RESET)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Render excerpt segments as one terminal line.
pub fn excerpt_line(excerpt: &Excerpt) -> String {
    render_segments(excerpt, use_colors().then(theme))
}

fn render_segments(excerpt: &Excerpt, colors: Option<Theme>) -> String {
    let mut out = String::new();
    for segment in excerpt {
        match (segment, colors) {
            (Segment::Plain(text), _) => out.push_str(text),
            (Segment::Highlighted(text), Some(theme)) => {
                out.push_str(&paint(Role::Mark, theme, &[BOLD], text))
            }
            (Segment::Highlighted(text), None) => {
                out.push('[');
                out.push_str(text);
                out.push(']');
            }
            (Segment::Ellipsis, Some(theme)) => out.push_str(&paint(Role::Muted, theme, &[], ELLIPSIS)),
            (Segment::Ellipsis, None) => out.push_str(ELLIPSIS),
        }
    }
    out
}

/// Print one rendered page: rank, title, link line, then the other fields.
pub fn print_page(rank: usize, page: &HighlightedPage) {
    let title = page
        .fields
        .get("title")
        .map(excerpt_line)
        .unwrap_or_else(|| page.href.clone());
    let rank_label = themed(Role::Heading, &[BOLD], &format!("{:>3}.", rank));
    println!("{} {}", rank_label, title);

    let mut meta = themed(Role::Link, &[], &page.href);
    if !page.date.is_empty() {
        meta.push_str(&themed(Role::Muted, &[], &format!(" · {}", page.date)));
    }
    meta.push_str(&themed(Role::Muted, &[DIM], &format!("  score {:.3}", page.score)));
    println!("     {}", meta);

    for (name, excerpt) in &page.fields {
        if name == "title" || excerpt.is_empty() {
            continue;
        }
        let label = themed(Role::Muted, &[], &format!("{:<8}", name));
        println!("     {} {}", label, excerpt_line(excerpt));
    }
}

/// Print a result list with a summary line.
pub fn print_hit_list(list: &HitList) {
    let summary = format!(
        "{} result{} ({} shown)",
        list.total,
        if list.total == 1 { "" } else { "s" },
        list.pages.len()
    );
    let summary = themed(Role::Heading, &[BOLD], &summary);
    println!("{}", summary);
    println!("{}", themed(Role::Muted, &[], &"─".repeat(visible_len(&summary))));
    for (i, page) in list.pages.iter().enumerate() {
        println!();
        print_page(i + 1, page);
    }
}

/// One line describing a prepared query, marked when it came from the memo.
/// Successful queries list the terms that will be highlighted.
pub fn query_line(raw: &str, outcome: &Result<PreparedQuery, hitmark::QueryError>, memo_hit: bool) -> String {
    let status = match outcome {
        Ok(prepared) => {
            let terms: Vec<&str> = prepared.positive_terms().collect();
            let terms = if terms.is_empty() {
                String::new()
            } else {
                themed(Role::Muted, &[], &format!("  [{}]", terms.join(", ")))
            };
            format!("{} {}{}", themed(Role::Good, &[BOLD], "ok"), prepared.query, terms)
        }
        Err(e) => format!("{} {}", themed(Role::Bad, &[BOLD], "--"), e),
    };
    let memo = if memo_hit {
        themed(Role::Muted, &[DIM], " (repeat)")
    } else {
        String::new()
    };
    format!("{:<24} {}{}", raw.trim(), status, memo)
}
