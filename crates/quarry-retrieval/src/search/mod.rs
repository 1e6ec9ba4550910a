//! HybridSearcher: concurrent multi-source candidate gathering + RRF fusion.

pub mod rrf_fusion;

use futures::future::join_all;
use tracing::{debug, warn};

use quarry_core::errors::RetrievalError;
use quarry_core::models::RankedList;
use quarry_core::traits::ICandidateSource;

use rrf_fusion::FusedCandidate;

/// Hybrid search across independent candidate sources, fused via
/// Reciprocal Rank Fusion.
pub struct HybridSearcher<'a> {
    sources: &'a [&'a dyn ICandidateSource],
    /// RRF smoothing constant (default 60).
    rrf_k: u32,
}

impl<'a> HybridSearcher<'a> {
    pub fn new(sources: &'a [&'a dyn ICandidateSource], rrf_k: u32) -> Self {
        Self { sources, rrf_k }
    }

    /// Query every source concurrently and fuse the survivors.
    ///
    /// The sources have no ordering dependency on each other; this is a
    /// join point, not a race — fusion waits for all of them. A failing
    /// source is logged and dropped here, at the source-query boundary, so
    /// fusion only ever receives valid lists. An empty list from a healthy
    /// source is a valid result. Only when every source fails does the
    /// query abort with `AllSourcesFailed`.
    pub async fn search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<FusedCandidate>, RetrievalError> {
        let attempted = self.sources.len();

        let results = join_all(self.sources.iter().map(|source| async move {
            (source.name(), source.search(query, top_k).await)
        }))
        .await;

        let mut lists: Vec<RankedList> = Vec::with_capacity(attempted);
        for (name, result) in results {
            match result {
                Ok(list) => {
                    debug!(source = name, candidates = list.len(), "source returned");
                    lists.push(list);
                }
                Err(error) => {
                    warn!(source = name, error = %error, "candidate source failed, degrading");
                }
            }
        }

        if lists.is_empty() {
            return Err(RetrievalError::AllSourcesFailed { attempted });
        }

        Ok(rrf_fusion::fuse(&lists, self.rrf_k))
    }
}
