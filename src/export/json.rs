//! JSON exporter

use super::round_to_three_decimals;
use crate::config::Config;
use crate::core::Analysis;
use crate::error::{ReadabilityError, Result};
use crate::export::Exporter;
use serde::Serialize;
use std::io::Write;

/// JSON output exporter
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    file: &'a str,
    fingerprint: &'a str,
    cache_hit: bool,
    counts: JsonCounts,
    scores: JsonScores,
}

#[derive(Serialize)]
struct JsonCounts {
    characters: usize,
    letters: usize,
    digits: usize,
    words: usize,
    sentences: usize,
}

#[derive(Serialize)]
struct JsonScores {
    coleman_liau: f64,
    automated_readability_index: f64,
}

impl Exporter for JsonExporter {
    fn export(&self, analysis: &Analysis, config: &Config, writer: &mut dyn Write) -> Result<()> {
        let record = &analysis.record;

        let output = JsonOutput {
            file: &config.input_path,
            fingerprint: &record.fingerprint,
            cache_hit: analysis.cache_hit,
            counts: JsonCounts {
                characters: record.characters(),
                letters: record.letter_count,
                digits: record.digit_count,
                words: record.word_count,
                sentences: record.sentence_count,
            },
            scores: JsonScores {
                coleman_liau: round_to_three_decimals(record.coleman_liau),
                automated_readability_index: round_to_three_decimals(
                    record.automated_readability_index,
                ),
            },
        };

        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| ReadabilityError::Other(e.to_string()))?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
