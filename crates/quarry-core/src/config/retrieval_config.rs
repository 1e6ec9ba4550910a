use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Candidates requested from each source per query.
    pub retrieval_top_k: usize,
    /// RRF k-value for rank fusion.
    pub rrf_k: u32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            retrieval_top_k: defaults::DEFAULT_RETRIEVAL_TOP_K,
            rrf_k: defaults::DEFAULT_RRF_K,
        }
    }
}
