//! readability-cache - Readability scoring with a content-addressed cache
//!
//! Computes the Coleman-Liau index and the Automated Readability Index for a
//! text file. Results are cached by a fingerprint of the file contents, so
//! scoring the same content again skips tokenization.

mod cache;
mod cli;
mod config;
mod core;
mod error;
mod export;

use cache::{clear_cache, CacheStore, FileCache};
use clap::Parser;
use cli::Cli;
use config::{Config, LogLevel};
use crate::core::{Analyzer, EnglishTokenizer};
use error::Result;
use export::{create_exporter, get_output_writer};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Initialize env_logger at the requested level; RUST_LOG takes precedence
fn init_logging(log_level: LogLevel) {
    let Some(level) = log_level.as_filter() else {
        return;
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

/// Score one file and write the report
///
/// The cache handle is opened here and dropped when this returns, on success
/// and on every error path.
fn run(config: &Config) -> Result<()> {
    // === Phase 0: Handle --clear-cache ===
    if config.clear_cache {
        let removed = clear_cache(config)?;
        log::info!("Cleared {} cached result(s)", removed);
    }

    // === Phase 1: Setup Cache ===
    let cache = if config.cache_enabled {
        let cache = FileCache::open(config)?;
        log::debug!("Caching enabled in '{}'", cache.dir().display());
        Some(cache)
    } else {
        None
    };

    // === Phase 2: Score ===
    let tokenizer = EnglishTokenizer::new();
    let analyzer = Analyzer::new(
        &tokenizer,
        cache.as_ref().map(|c| c as &dyn CacheStore),
    );
    let analysis = analyzer.analyze_file(&config.input_path)?;
    log::info!(
        "Scored '{}' ({})",
        config.input_path,
        if analysis.cache_hit { "cached" } else { "computed" }
    );

    // === Phase 3: Export Results ===
    let exporter = create_exporter(config.output_format);
    let mut writer = get_output_writer(&config.output_filename)?;
    exporter.export(&analysis, config, &mut *writer)?;
    writer.flush()?;

    Ok(())
}
