use async_trait::async_trait;

use crate::errors::QuarryResult;
use crate::models::AnswerReport;

/// The full query pipeline: cache → retrieve → fuse → re-rank → generate.
#[async_trait]
pub trait IAnswerPipeline: Send + Sync {
    /// Answer a query, returning the answer text and per-stage timings.
    async fn answer(&self, query: &str) -> QuarryResult<AnswerReport>;
}
