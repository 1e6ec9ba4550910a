//! Configuration: per-subsystem structs with serde defaults, loadable from
//! TOML or from the process environment.

pub mod defaults;

mod cache_config;
mod rerank_config;
mod retrieval_config;

pub use cache_config::CacheConfig;
pub use rerank_config::RerankConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration for the answer pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuarryConfig {
    pub retrieval: RetrievalConfig,
    pub rerank: RerankConfig,
    pub cache: CacheConfig,
}

impl QuarryConfig {
    /// Load from a TOML string. Missing sections and fields keep defaults.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|e| ConfigError::Toml {
            reason: e.to_string(),
        })
    }

    /// Load from the process environment, overriding defaults.
    ///
    /// Recognized keys: `RERANK_ENABLED`, `USE_CACHE`, `RETRIEVAL_TOP_K`,
    /// `RERANK_TOP_N`, `CACHE_TTL_SECONDS`, `CACHE_MAX_ENTRIES`, `RRF_K`.
    /// Unset keys keep their defaults; a set-but-unparsable value is an
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = env_bool("RERANK_ENABLED")? {
            config.rerank.enabled = v;
        }
        if let Some(v) = env_bool("USE_CACHE")? {
            config.cache.enabled = v;
        }
        if let Some(v) = env_parse::<usize>("RETRIEVAL_TOP_K")? {
            config.retrieval.retrieval_top_k = v;
        }
        if let Some(v) = env_parse::<usize>("RERANK_TOP_N")? {
            config.rerank.top_n = v;
        }
        if let Some(v) = env_parse::<u64>("CACHE_TTL_SECONDS")? {
            config.cache.ttl_secs = v;
        }
        if let Some(v) = env_parse::<usize>("CACHE_MAX_ENTRIES")? {
            config.cache.max_entries = v;
        }
        if let Some(v) = env_parse::<u32>("RRF_K")? {
            config.retrieval.rrf_k = v;
        }

        Ok(config)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().map(Some).map_err(|_| ConfigError::InvalidEnv {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(None),
    }
}

/// Booleans are accepted case-insensitively ("true"/"TRUE"/"False").
fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .to_ascii_lowercase()
            .parse::<bool>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                key: key.to_string(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}
