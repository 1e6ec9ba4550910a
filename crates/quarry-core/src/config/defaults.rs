// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_RETRIEVAL_TOP_K: usize = 10;
pub const DEFAULT_RRF_K: u32 = 60;

// --- Re-ranking ---
pub const DEFAULT_RERANK_ENABLED: bool = false;
pub const DEFAULT_RERANK_TOP_N: usize = 3;

// --- Answer cache ---
pub const DEFAULT_USE_CACHE: bool = false;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 100;
