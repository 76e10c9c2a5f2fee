//! Spelling correction for respell.
//!
//! This module provides the two entry points of the crate: building a
//! frequency table from a token stream ([`build_table`]) and proposing
//! corrections for a word against that table ([`correct`]). The pieces are
//! exposed individually for callers that want finer control over candidate
//! generation or ranking.

pub mod corrector;
pub mod edits;
pub mod frequency;
pub mod misspell;

// Re-export commonly used types
pub use corrector::*;
pub use edits::*;
pub use frequency::*;
pub use misspell::*;
