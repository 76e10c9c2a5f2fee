//! Synthetic misspelling generation for demos and tests.
//!
//! The generator is the inverse of the corrector: it picks a known word and
//! damages it with one or two random single-character edits, producing inputs
//! the corrector should be able to recover. It is never consulted by the
//! correction pipeline itself.

use ahash::AHashSet;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::spelling::frequency::FrequencyTable;

/// Retries before giving up on finding an out-of-dictionary string.
const MAX_ATTEMPTS: usize = 32;

/// A generated misspelling together with the word it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTypo {
    /// The damaged string fed to the corrector.
    pub misspelled: String,
    /// The dictionary word the misspelling was derived from.
    pub intended: String,
}

/// Generates random misspellings of words drawn from a frequency table.
#[derive(Debug, Clone)]
pub struct Misspeller {
    /// Sorted for deterministic indexing under a seeded RNG.
    words: Vec<String>,
    word_set: AHashSet<String>,
}

impl Misspeller {
    /// Snapshot the known words of a table.
    ///
    /// An empty table yields a misspeller that cannot generate anything;
    /// callers guard against that upstream.
    pub fn new(table: &FrequencyTable) -> Self {
        let mut words: Vec<String> = table.words().map(str::to_string).collect();
        words.sort();
        let word_set = words.iter().cloned().collect();

        Misspeller { words, word_set }
    }

    /// Number of words available to misspell.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Generate one misspelling: a random known word with one or two random
    /// edits applied, retried until the result is not itself a dictionary
    /// word. After [`MAX_ATTEMPTS`] the last attempt is returned as-is.
    ///
    /// Returns `None` when the table had no words.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GeneratedTypo> {
        let intended = self.words.choose(rng)?.clone();
        let mut misspelled = intended.clone();

        for _ in 0..MAX_ATTEMPTS {
            let edit_count = rng.random_range(1..=2);
            misspelled = intended.clone();
            for _ in 0..edit_count {
                misspelled = random_edit(&misspelled, rng);
            }

            if !misspelled.is_empty() && !self.word_set.contains(&misspelled) {
                break;
            }
        }

        Some(GeneratedTypo {
            misspelled,
            intended,
        })
    }
}

/// Apply one random edit move (delete, transpose, replace, or insert) to a
/// word, mirroring the moves the corrector searches over.
fn random_edit<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    // Deletes and transposes need enough characters to act on; fall through
    // to replace/insert for short words.
    let op = rng.random_range(0..4);
    match op {
        0 if len >= 1 => {
            chars.remove(rng.random_range(0..len));
        }
        1 if len >= 2 => {
            let i = rng.random_range(0..len - 1);
            chars.swap(i, i + 1);
        }
        2 if len >= 1 => {
            chars[rng.random_range(0..len)] = random_letter(rng);
        }
        _ => {
            chars.insert(rng.random_range(0..=len), random_letter(rng));
        }
    }

    chars.into_iter().collect()
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    (b'a' + rng.random_range(0..26u8)) as char
}
