//! # respell
//!
//! A dictionary-driven spelling correction library for Rust, based on the
//! edit-distance approach popularized by Peter Norvig.
//!
//! ## Features
//!
//! - Frequency table built from any token stream, with Laplace-style smoothing
//! - Candidate generation over edit distances 1, 2, and 3
//! - Tiered fallback: exact match, then increasingly distant neighborhoods
//! - Ranking by first-letter match and corpus frequency, deterministic ties
//!
//! ## Quick start
//!
//! ```
//! use respell::spelling::{build_table, correct};
//!
//! let table = build_table(["the", "cat", "sat", "on", "the", "mat"]);
//! assert_eq!(correct("teh", &table)[0], "the");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
