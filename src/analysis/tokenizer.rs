//! Regex-based word tokenizer.

use std::sync::Arc;

use regex::Regex;

use crate::error::{RespellError, Result};

/// The tokenization rule shared by corpus construction and query words:
/// lowercase the text, then extract maximal `[a-z0-9]+` runs.
const WORD_PATTERN: &str = "[a-z0-9]+";

/// A regex-based tokenizer that extracts lowercase alphanumeric words.
///
/// Case folding happens before matching, so `"Dog's"` yields `["dog", "s"]`
/// and `"Route66"` yields `["route66"]`. Punctuation and whitespace never
/// appear in tokens.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default `[a-z0-9]+` pattern.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(WORD_PATTERN)
            .map_err(|e| RespellError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Tokenize raw text into lowercase alphanumeric words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }

    /// Apply the tokenization rule to a single word.
    ///
    /// Returns the first token found in the word, or an empty string if the
    /// word contains no alphanumeric characters at all. Query words pass
    /// through here before table lookups.
    pub fn normalize(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        self.pattern
            .find(&lowered)
            .map(|mat| mat.as_str().to_string())
            .unwrap_or_default()
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}
