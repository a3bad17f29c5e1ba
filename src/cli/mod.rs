// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hitmark command-line interface.
//!
//! Three subcommands: `excerpt` renders one field around given match offsets,
//! `highlight` renders a whole result list from a page array and index hits,
//! and `query` shows what a raw query becomes before it reaches the index.
//! The global flags override whatever the `--config` file says.

pub mod display;

use clap::{Args, Parser, Subcommand};
use hitmark::{ExcerptConfig, Interval};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hitmark",
    about = "Highlighted search excerpts for static site search",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    /// Show debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Config file and per-option overrides.
#[derive(Args, Debug, Default)]
pub struct ConfigOverrides {
    /// JSON config file (camelCase keys, every key optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Characters of context on each side of a highlight
    #[arg(long, global = true)]
    pub radius: Option<usize>,

    /// Highlights considered per field (0 = unlimited)
    #[arg(long, global = true)]
    pub max_marks: Option<usize>,

    /// Characters shown for a field with no highlight
    #[arg(long, global = true)]
    pub fallback_length: Option<usize>,

    /// Hits rendered per result list (0 = all)
    #[arg(long, global = true)]
    pub max_results: Option<usize>,

    /// Cut windows exactly at the radius instead of at word boundaries
    #[arg(long, global = true)]
    pub no_snap: bool,
}

impl ConfigOverrides {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, mut config: ExcerptConfig) -> ExcerptConfig {
        if let Some(radius) = self.radius {
            config = config.with_context_radius(radius);
        }
        if let Some(max) = self.max_marks {
            config = config.with_max_marks_per_result(max);
        }
        if let Some(length) = self.fallback_length {
            config = config.with_fallback_excerpt_length(length);
        }
        if let Some(max) = self.max_results {
            config = config.with_max_results(max);
        }
        if self.no_snap {
            config = config.with_snap_to_words(false);
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an excerpt of one text around match offsets
    Excerpt {
        /// Text file to excerpt, or `-` for stdin
        #[arg(short, long)]
        text: String,

        /// Match as `start:length` (repeatable)
        #[arg(short, long = "mark", value_parser = parse_mark, required = true)]
        marks: Vec<Interval>,

        /// Offsets are UTF-16 code units rather than characters
        #[arg(long)]
        utf16: bool,

        /// Print segments as JSON instead of coloured text
        #[arg(long)]
        json: bool,
    },

    /// Render a result list from pages and index hits
    Highlight {
        /// JSON array of pages; a hit's `ref` is an index into it
        #[arg(short, long)]
        pages: PathBuf,

        /// JSON array of hits (`ref`, `score`, `matchData.metadata`)
        #[arg(long)]
        hits: PathBuf,

        /// Print the rendered list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize and filter queries (reads lines from stdin when none are given)
    Query {
        /// Raw query words, joined with spaces
        raw: Vec<String>,
    },
}

/// Parse `start:length` into a character interval.
fn parse_mark(value: &str) -> Result<Interval, String> {
    let (start, length) = value
        .split_once(':')
        .ok_or_else(|| format!("expected start:length, got '{}'", value))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start offset '{}'", start))?;
    let length: usize = length
        .trim()
        .parse()
        .map_err(|_| format!("invalid length '{}'", length))?;
    Ok(Interval::from_offset_len(start, length))
}
