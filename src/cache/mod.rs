//! Content-addressed result cache
//!
//! Records are keyed by the fingerprint of the scored file's contents, so a
//! key can never go stale: changed content yields a different key. The
//! pipeline talks to the cache only through the `CacheStore` trait.

mod storage;

pub use storage::{clear_cache, FileCache};

use crate::core::MetricsRecord;
use crate::error::Result;

/// Trait for fingerprint-keyed record storage
pub trait CacheStore: Send + Sync {
    /// Look up a record by fingerprint
    ///
    /// Returns `Ok(None)` when the fingerprint is unknown; errors are reserved
    /// for a store that cannot be read at all.
    fn get(&self, fingerprint: &str) -> Result<Option<MetricsRecord>>;

    /// Store a record under its own fingerprint
    ///
    /// Writing an identical record twice has no further effect.
    fn put(&self, record: &MetricsRecord) -> Result<()>;
}

#[cfg(test)]
pub use memory::MemoryCache;
