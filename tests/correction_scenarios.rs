//! End-to-end correction scenarios through the public API.

use respell::spelling::{
    Corrector, CorrectorConfig, FrequencyTable, Misspeller, build_table, correct,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sample_table() -> FrequencyTable {
    build_table(["the", "cat", "sat", "on", "the", "mat"])
}

#[test]
fn known_words_are_their_own_top_suggestion() {
    let table = sample_table();
    for word in ["the", "cat", "sat", "on", "mat"] {
        assert_eq!(correct(word, &table)[0], word);
    }
}

#[test]
fn classic_typo_examples() {
    let table = sample_table();
    assert_eq!(correct("teh", &table)[0], "the");
    assert_eq!(correct("caat", &table)[0], "cat");
    assert_eq!(correct("mta", &table)[0], "mat");
}

#[test]
fn unknown_gibberish_echoes_back() {
    let table = sample_table();
    assert_eq!(correct("zzzqx", &table), vec!["zzzqx".to_string()]);
}

#[test]
fn corpus_from_raw_text() {
    let table = FrequencyTable::from_corpus(
        "The quick brown fox jumps over the lazy dog. The dog was not lazy.",
    );
    assert_eq!(correct("quik", &table)[0], "quick");
    assert_eq!(correct("doog", &table)[0], "dog");
}

#[test]
fn table_is_shared_across_threads() {
    let table = std::sync::Arc::new(sample_table());
    let corrector = Corrector::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = std::sync::Arc::clone(&table);
            let corrector = corrector.clone();
            std::thread::spawn(move || corrector.correct("teh", &table))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap()[0], "the");
    }
}

#[test]
fn generated_misspellings_round_trip() {
    let table = build_table([
        "spelling",
        "correction",
        "dictionary",
        "frequency",
        "candidate",
        "suggestion",
    ]);
    let misspeller = Misspeller::new(&table);
    let corrector = Corrector::with_config(CorrectorConfig {
        max_suggestions: 3,
        max_edit_distance: 2,
    });
    let mut rng = StdRng::seed_from_u64(2024);

    let mut recovered = 0;
    for _ in 0..30 {
        let typo = misspeller.generate(&mut rng).unwrap();
        if corrector
            .correct(&typo.misspelled, &table)
            .contains(&typo.intended)
        {
            recovered += 1;
        }
    }
    assert!(recovered >= 24, "only {recovered}/30 recovered");
}
