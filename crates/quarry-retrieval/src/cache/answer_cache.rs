//! Exact-key answer cache: strict LRU eviction, lazy TTL expiry.
//!
//! Keys are raw query strings — no normalization, no semantic matching; a
//! near-duplicate query is a miss. When disabled the cache is a true
//! bypass: no backing store is allocated at all.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::debug;

use quarry_core::config::CacheConfig;

struct CacheEntry {
    answer: String,
    inserted_at: Instant,
}

/// Bounded TTL answer cache with hit/miss tracking.
///
/// Safe for concurrent `get`/`put`: the lookup, eviction, and insert
/// sequences all run under one mutex, so capacity can never be exceeded
/// under race.
pub struct AnswerCache {
    /// `None` when caching is disabled.
    inner: Option<Mutex<LruCache<String, CacheEntry>>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AnswerCache {
    /// Build from configuration. `enabled = false` yields a bypass cache.
    pub fn from_config(config: &CacheConfig) -> Self {
        let inner = config.enabled.then(|| {
            let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
            Mutex::new(LruCache::new(capacity))
        });

        Self {
            inner,
            ttl: Duration::from_secs(config.ttl_secs),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up an answer under the raw query key.
    ///
    /// An entry that outlived its TTL is dropped here and reported as a
    /// miss (lazy expiry); `get` never returns an expired value.
    pub fn get(&self, query: &str) -> Option<String> {
        let Some(inner) = &self.inner else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        };

        let mut cache = lock(inner);

        // Probe first so the entry borrow ends before the eviction below.
        let probe = cache
            .get(query)
            .map(|entry| (entry.inserted_at.elapsed() < self.ttl).then(|| entry.answer.clone()));

        match probe {
            Some(Some(answer)) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(answer)
            }
            Some(None) => {
                cache.pop(query);
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert an answer under the raw query key.
    ///
    /// Refreshing an existing key updates its value, timestamp, and
    /// recency. Inserting a new key at capacity first evicts exactly the
    /// least-recently-used entry.
    pub fn put(&self, query: &str, answer: &str) {
        let Some(inner) = &self.inner else { return };

        let mut cache = lock(inner);
        let displaced = cache.push(
            query.to_string(),
            CacheEntry {
                answer: answer.to_string(),
                inserted_at: Instant::now(),
            },
        );

        if let Some((key, _)) = displaced {
            if key != query {
                debug!(evicted = %key, "capacity reached, evicted least-recently-used entry");
            }
        }
    }

    /// Total lookup hits.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total lookup misses.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let m = self.misses() as f64;
        let total = h + m;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    /// Number of stored entries. Expired-but-unevicted entries count until
    /// a lookup or eviction drops them.
    pub fn entry_count(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| lock(inner).len())
    }

    /// Whether caching is enabled at all.
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        if let Some(inner) = &self.inner {
            lock(inner).clear();
        }
    }
}

fn lock(inner: &Mutex<LruCache<String, CacheEntry>>) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
