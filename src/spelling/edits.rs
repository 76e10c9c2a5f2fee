//! Edit-distance neighborhood generation.
//!
//! [`edits1`] is a pure function of the input string and the fixed 26-letter
//! alphabet; it knows nothing about any dictionary. The `known_*` functions
//! expand further neighborhoods lazily and keep only candidates present in
//! the frequency table, so the full two- or three-step cross product is never
//! held in memory at once.

use ahash::AHashSet;

use crate::spelling::frequency::FrequencyTable;

/// All strings at edit distance 1 from `word`, as a deduplicated set.
///
/// Four edit moves over a word of `n` characters:
/// - deletes: remove one character (`n` variants)
/// - transposes: swap two adjacent characters (`n - 1` variants)
/// - replaces: substitute each position with each of the 26 lowercase
///   letters (`26 * n` variants, including the identity replace, so `word`
///   itself is always a member for non-empty input)
/// - inserts: one lowercase letter at each of the `n + 1` positions
///   (`26 * (n + 1)` variants)
///
/// The empty string yields exactly the 26 single-letter insertions.
pub fn edits1(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = AHashSet::new();

    // Deletes
    for i in 0..len {
        let mut new_word = chars.clone();
        new_word.remove(i);
        edits.insert(new_word.into_iter().collect());
    }

    // Transposes
    for i in 0..len.saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        edits.insert(new_word.into_iter().collect());
    }

    // Replaces, identity replaces included
    for i in 0..len {
        for ch in 'a'..='z' {
            let mut new_word = chars.clone();
            new_word[i] = ch;
            edits.insert(new_word.into_iter().collect());
        }
    }

    // Inserts
    for i in 0..=len {
        for ch in 'a'..='z' {
            let mut new_word = chars.clone();
            new_word.insert(i, ch);
            edits.insert(new_word.into_iter().collect());
        }
    }

    edits
}

/// Filter candidates down to words present in the table.
pub fn known<I, T>(candidates: I, table: &FrequencyTable) -> AHashSet<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    candidates
        .into_iter()
        .filter(|candidate| table.contains(candidate.as_ref()))
        .map(|candidate| candidate.as_ref().to_string())
        .collect()
}

/// All known words at edit distance 2 from `word`.
///
/// Conceptually the full cross product `edits1(e1) for e1 in edits1(word)`,
/// filtered by table membership; the inner neighborhoods stream through the
/// iterator chain and only survivors are collected.
pub fn known_edits2(word: &str, table: &FrequencyTable) -> AHashSet<String> {
    edits1(word)
        .into_iter()
        .flat_map(|e1| edits1(&e1))
        .filter(|e2| table.contains(e2))
        .collect()
}

/// All known words at edit distance 3 from `word`.
///
/// Same shape as [`known_edits2`] extended one step, for recovering from
/// larger typos.
pub fn known_edits3(word: &str, table: &FrequencyTable) -> AHashSet<String> {
    edits1(word)
        .into_iter()
        .flat_map(|e1| edits1(&e1))
        .flat_map(|e2| edits1(&e2))
        .filter(|e3| table.contains(e3))
        .collect()
}
