// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The excerpt engine.
//!
//! Four stages, each a pure function of its inputs:
//!
//! ```text
//!   raw positions ──▶ merge ──▶ window ──▶ (snap) ──▶ render ──▶ segments
//!                    (merge.rs) (window.rs) (boundary.rs) (render.rs)
//! ```
//!
//! - **merge**: sort and union raw `[start, end)` intervals per field
//! - **window**: cluster marks into bounded context windows, clamped to the text
//! - **boundary**: pull window edges in to whole words, never into a highlight
//! - **render**: emit `Plain` / `Highlighted` / `Ellipsis` segments

pub mod boundary;
pub mod merge;
pub mod render;
pub mod window;

pub use boundary::{is_word_forming, Direction, WordSnapper};
pub use merge::{collect_field_matches, merge_intervals};
pub use render::{render_excerpt, render_fallback, render_full, render_windows};
pub use window::{build_windows, snap_windows};
