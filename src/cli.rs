//! CLI argument parsing using clap

use crate::config::{Config, LogLevel, OutputFormat};
use crate::error::{ReadabilityError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Readability scoring tool
#[derive(Parser, Debug)]
#[command(name = "readability-cache")]
#[command(version)]
#[command(
    about = "Compute Coleman-Liau and Automated Readability Index scores for a text file",
    long_about = None
)]
pub struct Cli {
    /// Text file to score
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Output file for the report (use "-" for stdout)
    #[arg(value_name = "OUTPUT", default_value = "-")]
    pub output: String,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// Compute scores without reading or writing the cache
    #[arg(long = "no-cache")]
    pub no_cache: bool,

    /// Directory holding cached results
    #[arg(long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Remove all cached results before scoring
    #[arg(long = "clear-cache")]
    pub clear_cache: bool,

    /// Diagnostic log verbosity (RUST_LOG overrides)
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        if self.no_cache && self.cache_dir.is_some() {
            return Err(ReadabilityError::InvalidConfig(
                "--cache-dir cannot be combined with --no-cache".to_string(),
            ));
        }

        let output_format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Console
        };

        Ok(Config {
            input_path: self.file,
            output_format,
            output_filename: self.output,
            cache_enabled: !self.no_cache,
            cache_dir: self.cache_dir,
            clear_cache: self.clear_cache,
            log_level: self.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["readability-cache", "essay.txt"]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.input_path, "essay.txt");
        assert_eq!(config.output_filename, "-");
        assert_eq!(config.output_format, OutputFormat::Console);
        assert!(config.cache_enabled);
        assert!(config.cache_dir.is_none());
        assert!(!config.clear_cache);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_json_output() {
        let cli = Cli::parse_from(["readability-cache", "--json", "essay.txt"]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_no_cache_with_dir_conflicts() {
        let cli = Cli::parse_from([
            "readability-cache",
            "--no-cache",
            "--cache-dir",
            "scores",
            "essay.txt",
        ]);
        let result = cli.into_config();

        assert!(matches!(result, Err(ReadabilityError::InvalidConfig(_))));
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::parse_from([
            "readability-cache",
            "--json",
            "--cache-dir",
            "scores",
            "--clear-cache",
            "--log-level",
            "debug",
            "essay.txt",
            "report.json",
        ]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.cache_dir, Some(PathBuf::from("scores")));
        assert!(config.clear_cache);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.input_path, "essay.txt");
        assert_eq!(config.output_filename, "report.json");
    }
}
