use async_trait::async_trait;

use crate::errors::RerankError;

/// Pairwise relevance model used by the re-ranking stage.
#[async_trait]
pub trait IRelevanceScorer: Send + Sync {
    /// Score a (query, passage) pair. Higher = more relevant.
    async fn score_pair(&self, query: &str, content: &str) -> Result<f64, RerankError>;
}
