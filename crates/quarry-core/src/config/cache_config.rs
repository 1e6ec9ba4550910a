use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether answers are cached at all. Off means a true bypass: no
    /// store is allocated, every lookup misses, every write is a no-op.
    pub enabled: bool,
    /// Entries older than this are invisible to lookups.
    pub ttl_secs: u64,
    /// Hard cap; inserting beyond it evicts the least-recently-used entry.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_USE_CACHE,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            max_entries: defaults::DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}
