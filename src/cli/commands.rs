//! Command implementations for the respell CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::analysis::tokenizer::WordTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{RespellError, Result};
use crate::spelling::{Corrector, CorrectorConfig, FrequencyTable, Misspeller};

/// Execute a CLI command.
pub fn execute_command(args: RespellArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_words(check_args.clone(), &args),
        Command::Interactive(interactive_args) => {
            run_interactive(interactive_args.clone(), &args)
        }
        Command::Demo(demo_args) => run_demo(demo_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load a dictionary from a corpus file, rejecting empty corpora.
///
/// A table with no words at all is a caller-side precondition violation:
/// every lookup would return the smoothed default and the corrector could
/// only ever echo its input.
fn load_table(path: &Path, cli_args: &RespellArgs) -> Result<FrequencyTable> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", path.display());
    }

    let table = FrequencyTable::load_from_file(path)?;
    if table.is_empty() {
        return Err(RespellError::invalid_argument(format!(
            "dictionary {} contains no words",
            path.display()
        )));
    }

    if cli_args.verbosity() > 1 {
        println!("Loaded {} distinct words", table.len());
    }
    Ok(table)
}

fn corrector_config(top: usize, max_distance: usize) -> CorrectorConfig {
    CorrectorConfig {
        max_suggestions: top,
        max_edit_distance: max_distance,
    }
}

/// Correct a single word and assemble its report.
fn correct_word(word: &str, corrector: &Corrector, table: &FrequencyTable) -> CorrectionReport {
    let normalized = WordTokenizer::default().normalize(word);
    let suggestions = corrector.suggestions(&normalized, table);
    let known = table.contains(&normalized);
    // An unknown word the corrector could only echo back is reported as
    // having no suggestion.
    let no_suggestion =
        !known && suggestions.len() == 1 && suggestions[0].word == normalized;

    CorrectionReport {
        word: normalized,
        known,
        suggestions,
        no_suggestion,
    }
}

/// Correct the words given on the command line.
fn check_words(args: CheckArgs, cli_args: &RespellArgs) -> Result<()> {
    let table = load_table(&args.dictionary, cli_args)?;
    let corrector = Corrector::with_config(corrector_config(args.top, args.max_distance));

    for word in &args.words {
        let report = correct_word(word, &corrector, &table);
        print_correction(&report, cli_args)?;
    }

    Ok(())
}

/// Prompt loop reading words from stdin until EOF.
fn run_interactive(args: InteractiveArgs, cli_args: &RespellArgs) -> Result<()> {
    let table = load_table(&args.dictionary, cli_args)?;
    let corrector = Corrector::with_config(corrector_config(args.top, args.max_distance));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let report = correct_word(word, &corrector, &table);
        print_correction(&report, cli_args)?;
    }

    Ok(())
}

/// Generate synthetic misspellings and run them through the corrector.
fn run_demo(args: DemoArgs, cli_args: &RespellArgs) -> Result<()> {
    let table = load_table(&args.dictionary, cli_args)?;
    let corrector = Corrector::new();
    let misspeller = Misspeller::new(&table);
    let mut rng = rand::rng();

    let mut recovered_total = 0;
    for _ in 0..args.count {
        let Some(typo) = misspeller.generate(&mut rng) else {
            break;
        };
        let suggestions = corrector.suggestions(&typo.misspelled, &table);
        let recovered = suggestions.iter().any(|s| s.word == typo.intended);
        if recovered {
            recovered_total += 1;
        }

        let round = DemoRound {
            misspelled: typo.misspelled,
            intended: typo.intended,
            suggestions,
            recovered,
        };
        print_demo_round(&round, cli_args)?;
    }

    if cli_args.verbosity() >= 1 && cli_args.output_format == OutputFormat::Human {
        println!("Recovered {recovered_total}/{} misspellings", args.count);
    }

    Ok(())
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &RespellArgs) -> Result<()> {
    let table = load_table(&args.dictionary, cli_args)?;

    let stats = DictionaryStats {
        unique_words: table.len(),
        top_words: table.most_frequent(args.top),
    };
    print_stats(&stats, cli_args)
}
