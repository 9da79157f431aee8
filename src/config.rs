//! Configuration types for readability-cache

use std::path::PathBuf;

/// Default directory for the result cache, relative to the working directory
pub const DEFAULT_CACHE_DIR: &str = ".readability-cache";

/// Output format for the readability report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Console,
    /// JSON output with structured data
    Json,
}

/// Verbosity of diagnostic logging on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    #[default]
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

impl LogLevel {
    /// Filter string understood by env_logger, or None when logging is off
    pub fn as_filter(self) -> Option<&'static str> {
        match self {
            LogLevel::None => None,
            LogLevel::Error => Some("error"),
            LogLevel::Warn => Some("warn"),
            LogLevel::Info => Some("info"),
            LogLevel::Debug => Some("debug"),
            LogLevel::Trace => Some("trace"),
        }
    }
}

/// Configuration options for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the text file to score
    pub input_path: String,

    /// Output format (console or json)
    pub output_format: OutputFormat,

    /// Path to output file (or "-" for stdout)
    pub output_filename: String,

    /// Look up and store results in the cache
    pub cache_enabled: bool,

    /// Cache directory (default: .readability-cache)
    pub cache_dir: Option<PathBuf>,

    /// Remove all cached results before running
    pub clear_cache: bool,

    /// Diagnostic log verbosity
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            output_format: OutputFormat::Console,
            output_filename: String::from("-"),
            cache_enabled: true,
            cache_dir: None,
            clear_cache: false,
            log_level: LogLevel::Warn,
        }
    }
}

impl Config {
    /// Returns the cache directory, falling back to the default location
    pub fn effective_cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR))
    }
}
