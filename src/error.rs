//! Error types for the respell library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RespellError`] enum. The correction core itself is total and never
//! returns an error; errors only arise at the I/O boundary (dictionary
//! loading, CLI) and from caller-side precondition violations.
//!
//! # Examples
//!
//! ```
//! use respell::error::{RespellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RespellError::invalid_argument("dictionary is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for respell operations.
#[derive(Error, Debug)]
pub enum RespellError {
    /// I/O errors (dictionary file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RespellError.
pub type Result<T> = std::result::Result<T, RespellError>;

impl RespellError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RespellError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(msg.into())
    }
}
