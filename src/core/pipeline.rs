//! Scoring pipeline with cache lookup
//!
//! The flow for one input is strictly sequential:
//! read -> fingerprint -> cache lookup -> (hit: stored record) or
//! (miss: tokenize -> validate -> score -> store).

use super::hash::fingerprint;
use super::record::MetricsRecord;
use super::tokenizer::Tokenizer;
use crate::cache::CacheStore;
use crate::error::{ReadabilityError, Result};
use std::fs;

/// Outcome of scoring one input
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Counts and scores for the input
    pub record: MetricsRecord,
    /// Whether the record came from the cache
    pub cache_hit: bool,
}

/// Scores text, consulting and filling an optional cache
pub struct Analyzer<'a> {
    tokenizer: &'a dyn Tokenizer,
    cache: Option<&'a dyn CacheStore>,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer
    ///
    /// # Arguments
    /// * `tokenizer` - Tokenizer used on cache misses
    /// * `cache` - Store to consult and fill, or None to always compute
    pub fn new(tokenizer: &'a dyn Tokenizer, cache: Option<&'a dyn CacheStore>) -> Self {
        Self { tokenizer, cache }
    }

    /// Read a file fully and score its contents
    pub fn analyze_file(&self, path: &str) -> Result<Analysis> {
        let contents = fs::read(path).map_err(|e| ReadabilityError::FileNotFound {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        self.analyze_bytes(&contents, path)
    }

    /// Score raw contents
    ///
    /// The fingerprint covers the raw bytes; the text is decoded as UTF-8
    /// with invalid sequences replaced.
    ///
    /// # Arguments
    /// * `contents` - Complete input bytes
    /// * `source` - Name of the input for logs and errors
    pub fn analyze_bytes(&self, contents: &[u8], source: &str) -> Result<Analysis> {
        let fingerprint = fingerprint(contents);

        if let Some(cache) = self.cache {
            if let Some(record) = cache.get(&fingerprint)? {
                log::debug!("Cache hit for '{}' ({})", source, fingerprint);
                return Ok(Analysis {
                    record,
                    cache_hit: true,
                });
            }
            log::debug!("Cache miss for '{}' ({})", source, fingerprint);
        }

        let text = String::from_utf8_lossy(contents);
        let counts = self.tokenizer.tokenize(&text);
        log::debug!(
            "Tokenized '{}' with {}: {} sentences, {} words, {} letters, {} digits",
            source,
            self.tokenizer.name(),
            counts.sentences,
            counts.words,
            counts.letters,
            counts.digits
        );

        let record = MetricsRecord::from_counts(fingerprint, &counts, source)?;

        if let Some(cache) = self.cache {
            cache.put(&record)?;
        }

        Ok(Analysis {
            record,
            cache_hit: false,
        })
    }
}
