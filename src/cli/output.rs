//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RespellArgs};
use crate::error::Result;
use crate::spelling::Suggestion;

/// Correction outcome for a single input word.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// The input word after normalization.
    pub word: String,
    /// Whether the word was already in the dictionary.
    pub known: bool,
    /// Ranked suggestions, best first.
    pub suggestions: Vec<Suggestion>,
    /// True when the corrector could only echo an unknown word back.
    pub no_suggestion: bool,
}

/// One round of the misspelling demo.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoRound {
    /// The generated misspelling.
    pub misspelled: String,
    /// The dictionary word it was derived from.
    pub intended: String,
    /// What the corrector proposed.
    pub suggestions: Vec<Suggestion>,
    /// Whether the intended word appeared among the suggestions.
    pub recovered: bool,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Number of distinct words.
    pub unique_words: usize,
    /// Most frequent words with their smoothed counts.
    pub top_words: Vec<(String, u64)>,
}

/// Print a correction report in the requested format.
pub fn print_correction(report: &CorrectionReport, args: &RespellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(report, args)?,
        OutputFormat::Human => {
            if report.no_suggestion {
                println!("{}: NO SUGGESTION", report.word);
            } else if report.known && args.verbosity() <= 1 {
                println!("{}: ok", report.word);
            } else {
                let words: Vec<&str> = report
                    .suggestions
                    .iter()
                    .map(|s| s.word.as_str())
                    .collect();
                println!("{}: {}", report.word, words.join(", "));
            }
        }
    }
    Ok(())
}

/// Print a demo round in the requested format.
pub fn print_demo_round(round: &DemoRound, args: &RespellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(round, args)?,
        OutputFormat::Human => {
            println!("Incorrect - {}", round.misspelled);
            let words: Vec<&str> = round
                .suggestions
                .iter()
                .map(|s| s.word.as_str())
                .collect();
            println!("Correct   - {}", words.join(", "));
            if args.verbosity() >= 2 {
                let marker = if round.recovered { "yes" } else { "no" };
                println!("Recovered - {marker} (intended {})", round.intended);
            }
            println!();
        }
    }
    Ok(())
}

/// Print dictionary statistics in the requested format.
pub fn print_stats(stats: &DictionaryStats, args: &RespellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(stats, args)?,
        OutputFormat::Human => {
            println!("Unique words: {}", stats.unique_words);
            println!("Top words:");
            for (word, count) in &stats.top_words {
                println!("  {word} {count}");
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, args: &RespellArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction_report_json_shape() {
        let report = CorrectionReport {
            word: "teh".to_string(),
            known: false,
            suggestions: vec![Suggestion {
                word: "the".to_string(),
                frequency: 3,
                first_letter_match: true,
            }],
            no_suggestion: false,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["word"], "teh");
        assert_eq!(json["known"], false);
        assert_eq!(json["suggestions"][0]["word"], "the");
        assert_eq!(json["suggestions"][0]["frequency"], 3);
    }

    #[test]
    fn test_demo_round_json_shape() {
        let round = DemoRound {
            misspelled: "caat".to_string(),
            intended: "cat".to_string(),
            suggestions: vec![],
            recovered: false,
        };

        let json = serde_json::to_value(&round).unwrap();
        assert_eq!(json["misspelled"], "caat");
        assert_eq!(json["intended"], "cat");
        assert_eq!(json["recovered"], false);
    }
}
