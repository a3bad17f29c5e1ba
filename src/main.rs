// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use hitmark::{
    Document, ExcerptConfig, Highlighter, Interval, Page, PreparedQuery, QueryError, QueryMemo,
    SearchHit,
};
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = initialize_logging(&cli).and_then(|()| run(cli)) {
        eprintln!("{} {:#}", display::themed(display::Role::Bad, &[display::BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ExcerptConfig> {
    let base = match &cli.overrides.config {
        Some(path) => ExcerptConfig::load(path)?,
        None => ExcerptConfig::default(),
    };
    let config = cli.overrides.apply(base);
    config.validate().context("invalid command-line override")?;
    debug!(?config, "effective configuration");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Commands::Excerpt {
            text,
            marks,
            utf16,
            json,
        } => run_excerpt(config, &text, &marks, utf16, json),
        Commands::Highlight { pages, hits, json } => run_highlight(config, &pages, &hits, json),
        Commands::Query { raw } => run_query(config, &raw),
    }
}

fn read_text(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read text from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read {}", source))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("failed to parse {}", path.display()))
}

fn run_excerpt(config: ExcerptConfig, source: &str, marks: &[Interval], utf16: bool, json: bool) -> Result<()> {
    let text = read_text(source)?;
    let text = text.trim_end_matches(['\n', '\r']);
    let marks: Vec<Interval> = if utf16 {
        let doc = Document::new(text);
        marks.iter().map(|m| doc.utf16_interval(*m)).collect()
    } else {
        marks.to_vec()
    };

    let highlighter = Highlighter::new(config);
    let excerpt = highlighter.excerpt(text, &marks);

    if json {
        println!("{}", serde_json::to_string_pretty(&excerpt)?);
    } else {
        println!("{}", display::excerpt_line(&excerpt));
    }
    Ok(())
}

fn run_highlight(config: ExcerptConfig, pages: &Path, hits: &Path, json: bool) -> Result<()> {
    let pages: Vec<Page> = read_json(pages)?;
    let hits: Vec<SearchHit> = read_json(hits)?;
    debug!(pages = pages.len(), hits = hits.len(), "loaded inputs");

    let list = Highlighter::new(config).highlight_hits(&pages, &hits);

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        display::print_hit_list(&list);
    }
    Ok(())
}

fn run_query(config: ExcerptConfig, raw: &[String]) -> Result<()> {
    let highlighter = Highlighter::new(config);

    if !raw.is_empty() {
        let raw = raw.join(" ");
        println!("{}", display::query_line(&raw, &highlighter.prepare_query(&raw), false));
        return Ok(());
    }

    // One query per line, as if typed into the search box and resubmitted.
    let mut memo: QueryMemo<Result<PreparedQuery, QueryError>> = QueryMemo::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read query from stdin")?;
        let key = hitmark::normalize_query(&line);
        let (outcome, memo_hit) = memo.get_or_insert_with(&key, || highlighter.prepare_query(&line));
        println!("{}", display::query_line(&line, outcome, memo_hit));
    }
    Ok(())
}
