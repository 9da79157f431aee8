//! Report rendering for readability results

mod console;
mod json;

use crate::config::{Config, OutputFormat};
use crate::core::Analysis;
use crate::error::{ReadabilityError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub use console::ConsoleExporter;
pub use json::JsonExporter;

/// Trait for output formatting
pub trait Exporter {
    /// Write the complete report for the given analysis
    fn export(&self, analysis: &Analysis, config: &Config, writer: &mut dyn Write) -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleExporter),
        OutputFormat::Json => Box::new(JsonExporter),
    }
}

/// Get a writer for the output (file or stdout)
pub fn get_output_writer(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(path).map_err(ReadabilityError::Io)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Round half up (towards positive infinity) to three decimal places for display
pub fn round_to_three_decimals(value: f64) -> f64 {
    (value * 1000.0 + 0.5).floor() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_three_decimals() {
        assert_eq!(round_to_three_decimals(11.21349), 11.213);
        assert_eq!(round_to_three_decimals(-7.000000000000001), -7.0);
        assert_eq!(round_to_three_decimals(2.0006), 2.001);
        assert_eq!(round_to_three_decimals(-2.0004), -2.0);
    }

    #[test]
    fn test_round_half_goes_up() {
        assert_eq!(round_to_three_decimals(0.5625), 0.563);
        assert_eq!(round_to_three_decimals(-0.5625), -0.562);
    }

    #[test]
    fn test_round_prints_shortest_form() {
        assert_eq!(round_to_three_decimals(-7.000000000000001).to_string(), "-7");
        assert_eq!(round_to_three_decimals(4.5).to_string(), "4.5");
        assert_eq!(round_to_three_decimals(-0.0001).to_string(), "0");
    }
}
