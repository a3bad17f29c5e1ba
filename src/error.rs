// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The excerpt engine itself is total: malformed match data is clamped or merged,
//! never rejected. Only two things can fail. Loading configuration, and turning
//! user input into a query worth sending to the index.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration could not be loaded or is out of range.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid JSON, or has fields of the wrong type.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The config parsed but a value is unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Why a raw query will not be executed.
///
/// Both variants are distinct from "executed, zero results": the caller shows
/// different guidance for each.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// Nothing left after normalization (empty or whitespace-only input).
    #[error("query is empty")]
    Blank,

    /// Every term was too short, or every remaining term is an exclusion.
    #[error("query has no usable search terms")]
    NoExecutableQuery,
}
