use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::RankedList;

/// A backend search call: given a query, return a ranked candidate list.
///
/// Implementations wrap external backends (dense vector stores, lexical
/// keyword indexes). A failure here is reported per source and never
/// aborts the whole query on its own.
#[async_trait]
pub trait ICandidateSource: Send + Sync {
    /// Short name used in logs (e.g. "dense", "lexical").
    fn name(&self) -> &str;

    /// Return up to `top_k` candidates, most relevant first.
    async fn search(&self, query: &str, top_k: usize) -> Result<RankedList, SourceError>;
}
