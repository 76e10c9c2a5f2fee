//! Text analysis for dictionary construction.
//!
//! This module turns raw corpus text into the token stream consumed by
//! [`crate::spelling::FrequencyTable`]. A token is a maximal run of lowercase
//! ASCII letters and digits; the same rule is applied to query words so
//! membership tests stay consistent between corpus and input.

pub mod tokenizer;

// Re-export commonly used types
pub use tokenizer::*;
