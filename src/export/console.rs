//! Console (human-readable) exporter

use super::round_to_three_decimals;
use crate::config::Config;
use crate::core::Analysis;
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;

/// Human-readable report exporter
pub struct ConsoleExporter;

impl Exporter for ConsoleExporter {
    fn export(&self, analysis: &Analysis, config: &Config, writer: &mut dyn Write) -> Result<()> {
        let record = &analysis.record;

        writeln!(writer, "REPORT for {}", config.input_path)?;
        writeln!(writer, "{} characters", record.characters())?;
        writeln!(writer, "{} words", record.word_count)?;
        writeln!(writer, "{} sentences", record.sentence_count)?;
        writeln!(writer, "------------------")?;
        writeln!(
            writer,
            "Coleman-Liau Score: {}",
            round_to_three_decimals(record.coleman_liau)
        )?;
        writeln!(
            writer,
            "Automated Readability Index: {}",
            round_to_three_decimals(record.automated_readability_index)
        )?;

        Ok(())
    }
}
