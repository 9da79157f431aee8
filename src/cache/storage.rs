//! Cache storage implementation

use super::CacheStore;
use crate::config::Config;
use crate::core::hash::is_fingerprint;
use crate::core::MetricsRecord;
use crate::error::{ReadabilityError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Current cache format version
const CACHE_VERSION: u32 = 1;

/// Extension of cache entry files
const CACHE_EXTENSION: &str = "cache";

/// On-disk cache entry for a single fingerprint
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// Cache format version
    version: u32,
    /// Stored readability record
    record: MetricsRecord,
}

/// Directory-backed record store, one JSON entry per fingerprint
#[derive(Debug)]
pub struct FileCache {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl FileCache {
    /// Open (creating if needed) the cache directory named by the configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing cache settings
    ///
    /// # Returns
    /// A FileCache instance, or an error if the cache directory cannot be created
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_dir(config.effective_cache_dir())
    }

    /// Open (creating if needed) a cache rooted at `cache_dir`
    pub fn open_dir(cache_dir: impl Into<PathBuf>) -> Result<Self> {
        let cache_dir = cache_dir.into();

        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).map_err(|e| {
                ReadabilityError::CacheError(format!(
                    "Failed to create cache directory '{}': {}",
                    cache_dir.display(),
                    e
                ))
            })?;
        } else if !cache_dir.is_dir() {
            return Err(ReadabilityError::CacheError(format!(
                "Cache path '{}' is not a directory",
                cache_dir.display()
            )));
        }

        log::info!("Using cache directory '{}'", cache_dir.display());
        Ok(Self { cache_dir })
    }

    /// Directory holding the entries
    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the entry path for a fingerprint
    fn cache_path(&self, fingerprint: &str) -> Result<PathBuf> {
        if !is_fingerprint(fingerprint) {
            return Err(ReadabilityError::CacheError(format!(
                "Malformed fingerprint '{}'",
                fingerprint
            )));
        }
        Ok(self
            .cache_dir
            .join(format!("{}.{}", fingerprint, CACHE_EXTENSION)))
    }

    /// Read and validate an entry, treating unusable entries as absent
    fn read_entry(&self, path: &Path, fingerprint: &str) -> Result<Option<MetricsRecord>> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ReadabilityError::CacheError(format!(
                    "Failed to read cache file '{}': {}",
                    path.display(),
                    e
                )))
            }
        };

        let entry: CacheEntry = match serde_json::from_reader(BufReader::new(file)) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Ignoring unreadable cache entry '{}': {}", path.display(), e);
                return Ok(None);
            }
        };

        // Validate version
        if entry.version != CACHE_VERSION {
            log::debug!(
                "Ignoring cache entry '{}' with format version {}",
                path.display(),
                entry.version
            );
            return Ok(None);
        }

        // Validate key
        if entry.record.fingerprint != fingerprint {
            log::warn!(
                "Cache entry '{}' holds a record for fingerprint {}",
                path.display(),
                entry.record.fingerprint
            );
            return Ok(None);
        }

        Ok(Some(entry.record))
    }

    fn write_entry(&self, path: &Path, record: &MetricsRecord) -> Result<()> {
        let entry = CacheEntry {
            version: CACHE_VERSION,
            record: record.clone(),
        };

        let file = File::create(path).map_err(|e| {
            ReadabilityError::CacheError(format!(
                "Failed to create cache file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &entry).map_err(|e| {
            ReadabilityError::CacheError(format!("Failed to write cache entry: {}", e))
        })?;
        writer.flush().map_err(|e| {
            ReadabilityError::CacheError(format!("Failed to write cache entry: {}", e))
        })?;

        Ok(())
    }
}

impl CacheStore for FileCache {
    fn get(&self, fingerprint: &str) -> Result<Option<MetricsRecord>> {
        let path = self.cache_path(fingerprint)?;
        self.read_entry(&path, fingerprint)
    }

    fn put(&self, record: &MetricsRecord) -> Result<()> {
        let path = self.cache_path(&record.fingerprint)?;

        // Entries are never replaced: the first record for a fingerprint wins
        if let Some(existing) = self.read_entry(&path, &record.fingerprint)? {
            if existing != *record {
                log::warn!(
                    "Fingerprint {} already maps to a different record; keeping the stored one",
                    record.fingerprint
                );
            }
            return Ok(());
        }

        self.write_entry(&path, record)
    }
}

/// Remove every cache entry from the configured cache directory
pub fn clear_cache(config: &Config) -> Result<usize> {
    let cache_dir = config.effective_cache_dir();
    let mut removed = 0usize;

    if cache_dir.exists() {
        for entry in fs::read_dir(&cache_dir).map_err(|e| {
            ReadabilityError::CacheError(format!(
                "Failed to read cache directory '{}': {}",
                cache_dir.display(),
                e
            ))
        })? {
            let entry = entry.map_err(|e| {
                ReadabilityError::CacheError(format!("Failed to read cache entry: {}", e))
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == CACHE_EXTENSION) {
                fs::remove_file(&path).map_err(|e| {
                    ReadabilityError::CacheError(format!(
                        "Failed to remove cache file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                removed += 1;
            }
        }
    }

    Ok(removed)
}
