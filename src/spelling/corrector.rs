//! Tiered spelling corrector with frequency-based ranking.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::WordTokenizer;
use crate::spelling::edits::{edits1, known, known_edits2, known_edits3};
use crate::spelling::frequency::FrequencyTable;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Maximum edit distance searched before echoing the input (1 to 3).
    pub max_edit_distance: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_suggestions: 3,
            max_edit_distance: 2,
        }
    }
}

/// A ranked correction candidate with its ranking signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Smoothed corpus frequency of the suggested word.
    pub frequency: u64,
    /// Whether the suggestion shares the input's first character.
    pub first_letter_match: bool,
}

/// Dictionary-driven spelling corrector.
///
/// Holds only configuration; the frequency table is borrowed per call and
/// never mutated, so one corrector can serve any number of tables and any
/// number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Corrector {
    config: CorrectorConfig,
    tokenizer: WordTokenizer,
}

impl Corrector {
    /// Create a corrector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(config: CorrectorConfig) -> Self {
        Corrector {
            config,
            tokenizer: WordTokenizer::default(),
        }
    }

    /// Get the corrector configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Propose up to `max_suggestions` corrections for `word`, best first.
    ///
    /// Total for any input string: when no dictionary-backed correction
    /// exists the input itself is echoed back as the sole suggestion.
    pub fn correct(&self, word: &str, table: &FrequencyTable) -> Vec<String> {
        self.suggestions(word, table)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Same pipeline as [`correct`], with the ranking signals exposed.
    ///
    /// [`correct`]: Corrector::correct
    pub fn suggestions(&self, word: &str, table: &FrequencyTable) -> Vec<Suggestion> {
        let word = self.tokenizer.normalize(word);
        let first_letter = word.chars().next();

        let mut ranked: Vec<Suggestion> = self
            .candidates(&word, table)
            .into_iter()
            .map(|candidate| Suggestion {
                frequency: table.lookup(&candidate),
                first_letter_match: candidate.chars().next() == first_letter
                    && first_letter.is_some(),
                word: candidate,
            })
            .collect();

        // Descending (first-letter match, frequency); lexical order breaks
        // ties so repeated calls rank identically regardless of set iteration
        // order.
        ranked.sort_by(|a, b| {
            b.first_letter_match
                .cmp(&a.first_letter_match)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| a.word.cmp(&b.word))
        });
        ranked.truncate(self.config.max_suggestions);
        ranked
    }

    /// Tiered candidate search; each tier runs only when the previous one
    /// produced an empty set.
    fn candidates(&self, word: &str, table: &FrequencyTable) -> AHashSet<String> {
        if table.contains(word) {
            return AHashSet::from_iter([word.to_string()]);
        }

        let depth = self.config.max_edit_distance.clamp(1, 3);

        let candidates = known(edits1(word), table);
        if !candidates.is_empty() {
            return candidates;
        }

        if depth >= 2 {
            let candidates = known_edits2(word, table);
            if !candidates.is_empty() {
                return candidates;
            }
        }

        if depth >= 3 {
            let candidates = known_edits3(word, table);
            if !candidates.is_empty() {
                return candidates;
            }
        }

        // No correction found; echo the input.
        AHashSet::from_iter([word.to_string()])
    }
}

/// Build a frequency table from a token stream with the default settings.
///
/// One of the crate's two top-level entry points.
pub fn build_table<I, T>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    FrequencyTable::build(tokens)
}

/// Correct a word against a table with the default configuration.
///
/// One of the crate's two top-level entry points.
pub fn correct(word: &str, table: &FrequencyTable) -> Vec<String> {
    Corrector::new().correct(word, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> FrequencyTable {
        FrequencyTable::build(["the", "cat", "sat", "on", "the", "mat"])
    }

    #[test]
    fn test_known_word_returns_itself_first() {
        let table = sample_table();
        let corrector = Corrector::new();

        for word in ["the", "cat", "sat", "on", "mat"] {
            let result = corrector.correct(word, &table);
            assert_eq!(result.first().map(String::as_str), Some(word));
        }
    }

    #[test]
    fn test_transpose_correction() {
        let table = sample_table();
        let result = correct("teh", &table);
        assert_eq!(result[0], "the");
    }

    #[test]
    fn test_delete_correction() {
        let table = sample_table();
        let result = correct("caat", &table);
        assert_eq!(result[0], "cat");
    }

    #[test]
    fn test_edit_distance_2_fallback() {
        let table = sample_table();
        // Two inserts away from "cat"; distance-1 tier finds nothing.
        let corrector = Corrector::new();
        assert!(known(edits1("caaat"), &table).is_empty());
        assert_eq!(corrector.correct("caaat", &table)[0], "cat");
    }

    #[test]
    fn test_echo_when_no_correction_exists() {
        let table = sample_table();
        let result = correct("zzzqxwvvv", &table);
        assert_eq!(result, vec!["zzzqxwvvv".to_string()]);
    }

    #[test]
    fn test_empty_word() {
        let table = sample_table();
        // No single-letter dictionary words, so "" falls through the
        // distance tiers and echoes back.
        let result = correct("", &table);
        assert_eq!(result, vec![String::new()]);

        // With a single-letter word in the table, the insert tier finds it.
        let table = FrequencyTable::build(["a", "cat"]);
        assert_eq!(correct("", &table), vec!["a".to_string()]);
    }

    #[test]
    fn test_never_more_than_max_suggestions() {
        let table = FrequencyTable::build(["bat", "cab", "cap", "car", "cot", "cut"]);
        let result = correct("cat", &table);
        assert!(result.len() <= 3);
    }

    #[test]
    fn test_first_letter_match_beats_frequency() {
        // "bat" is far more frequent, but "cot" keeps the input's first
        // letter and must rank above it. Both are one edit from "cat".
        let table = FrequencyTable::build([
            "bat", "bat", "bat", "bat", "bat", "bat", "bat", "bat", "cot",
        ]);
        let result = correct("cat", &table);
        assert_eq!(result[0], "cot");
        assert!(result.contains(&"bat".to_string()));
    }

    #[test]
    fn test_frequency_orders_within_first_letter_tier() {
        let table = FrequencyTable::build(["cap", "cap", "cap", "cab"]);
        let result = correct("cax", &table);
        assert_eq!(result[0], "cap");
        assert_eq!(result[1], "cab");
    }

    #[test]
    fn test_ranking_determinism() {
        // Same frequency, same first-letter score: lexical order decides.
        let table = FrequencyTable::build(["cab", "cap", "car"]);
        let corrector = Corrector::new();

        let first = corrector.correct("caz", &table);
        for _ in 0..10 {
            assert_eq!(corrector.correct("caz", &table), first);
        }
        assert_eq!(first, vec!["cab", "cap", "car"]);
    }

    #[test]
    fn test_idempotent_no_table_mutation() {
        let table = sample_table();
        let corrector = Corrector::new();

        let before = table.lookup("the");
        for _ in 0..5 {
            assert_eq!(corrector.correct("the", &table)[0], "the");
        }
        assert_eq!(table.lookup("the"), before);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_query_word_normalized() {
        let table = sample_table();
        assert_eq!(correct("TEH", &table)[0], "the");
        assert_eq!(correct("The!", &table)[0], "the");
    }

    #[test]
    fn test_max_edit_distance_3() {
        let table = sample_table();
        // Three deletes from "cat"; unreachable at the default depth.
        let default_corrector = Corrector::new();
        assert_eq!(default_corrector.correct("caaaat", &table), vec!["caaaat"]);

        let deep = Corrector::with_config(CorrectorConfig {
            max_edit_distance: 3,
            ..Default::default()
        });
        assert_eq!(deep.correct("caaaat", &table)[0], "cat");
    }

    #[test]
    fn test_max_edit_distance_1() {
        let table = sample_table();
        let shallow = Corrector::with_config(CorrectorConfig {
            max_edit_distance: 1,
            ..Default::default()
        });
        // Distance 2 is out of reach, so the input echoes back.
        assert_eq!(shallow.correct("caaat", &table), vec!["caaat"]);
        // Distance 1 still works.
        assert_eq!(shallow.correct("teh", &table)[0], "the");
    }

    #[test]
    fn test_suggestions_expose_ranking_signals() {
        let table = sample_table();
        let corrector = Corrector::new();

        let suggestions = corrector.suggestions("teh", &table);
        assert_eq!(suggestions[0].word, "the");
        assert_eq!(suggestions[0].frequency, 3);
        assert!(suggestions[0].first_letter_match);
    }
}
