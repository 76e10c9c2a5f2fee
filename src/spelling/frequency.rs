//! Corpus-derived word frequency table.

use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::tokenizer::WordTokenizer;
use crate::error::Result;

/// The smoothed count reported for words never seen during build.
///
/// Laplace-style smoothing: unseen words are not zero-probability, so
/// out-of-vocabulary edit candidates can still be ranked against each other.
/// Build initializes every new entry to this base before incrementing, which
/// means a word seen exactly once in the corpus is stored with count 2. A
/// stored entry therefore always holds a count >= 2, and [`contains`] only
/// needs to test entry existence.
///
/// [`contains`]: FrequencyTable::contains
pub const SMOOTHING_BASE: u64 = 1;

/// A word frequency table built once from a token stream and read-only
/// thereafter.
///
/// Keys obey the same tokenization rule as query words (lowercase ASCII
/// letters and digits), so membership tests are consistent between corpus and
/// input. The table holds a plain owned map with no interior mutability, so
/// shared references can be used from any number of threads at once.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Words and their smoothed occurrence counts
    counts: AHashMap<String, u64>,
}

impl FrequencyTable {
    /// Build a table from a stream of tokens.
    ///
    /// Each token is re-normalized through the tokenization rule before
    /// insertion; tokens with no alphanumeric content are skipped. Every new
    /// entry starts at [`SMOOTHING_BASE`] and is incremented per occurrence.
    pub fn build<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let tokenizer = WordTokenizer::default();
        let mut counts = AHashMap::new();

        for token in tokens {
            let word = tokenizer.normalize(token.as_ref());
            if word.is_empty() {
                continue;
            }
            *counts.entry(word).or_insert(SMOOTHING_BASE) += 1;
        }

        FrequencyTable { counts }
    }

    /// Build a table directly from raw corpus text.
    pub fn from_corpus(text: &str) -> Self {
        let tokenizer = WordTokenizer::default();
        Self::build(tokenizer.tokenize(text))
    }

    /// Build a table from a corpus text file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_corpus(&text))
    }

    /// Get the smoothed count for a word.
    ///
    /// Returns the stored count, or [`SMOOTHING_BASE`] for words absent from
    /// the table. Never fails and never returns 0.
    pub fn lookup(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(SMOOTHING_BASE)
    }

    /// Check whether a word was seen at least once during build.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Get the number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the table holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over the distinct words in the table. No ordering guarantee.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Get the most frequent words, highest first, ties in lexical order.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u64)> {
        let mut word_freq: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, freq)| (word.clone(), *freq))
            .collect();

        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_freq.truncate(limit);
        word_freq
    }
}
