use serde::{Deserialize, Serialize};

use super::defaults;

/// Re-ranking stage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankConfig {
    /// Whether to re-score fused candidates with the pairwise relevance
    /// model. Disabled is a valid production configuration for
    /// latency-sensitive deployments.
    pub enabled: bool,
    /// Number of documents kept for generation, re-ranked or not.
    pub top_n: usize,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_RERANK_ENABLED,
            top_n: defaults::DEFAULT_RERANK_TOP_N,
        }
    }
}
