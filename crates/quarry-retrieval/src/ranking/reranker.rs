//! Cross-encoder re-ranking over fused candidates.
//!
//! Scores every (query, content) pair with the wired relevance model and
//! keeps the top N. Scoring is all-or-nothing: a ranking built from a
//! subset of scores would not be comparable, so any scorer failure fails
//! the whole query.

use tracing::debug;

use quarry_core::errors::RerankError;
use quarry_core::models::Document;
use quarry_core::traits::IRelevanceScorer;

use crate::search::rrf_fusion::FusedCandidate;

/// Re-rank fused candidates with a pairwise relevance model and truncate
/// to `top_n`.
///
/// The returned documents carry the scorer's output as their score. The
/// sort is stable: equal scores keep their fused order.
pub async fn rerank(
    scorer: &dyn IRelevanceScorer,
    query: &str,
    candidates: Vec<FusedCandidate>,
    top_n: usize,
) -> Result<Vec<Document>, RerankError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let mut scored: Vec<Document> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let score = scorer.score_pair(query, &candidate.document.content).await?;
        let mut document = candidate.document;
        document.score = score;
        scored.push(document);
    }

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);

    debug!(kept = scored.len(), "re-ranking complete");
    Ok(scored)
}

/// The disabled-re-ranking fallback: keep the fused order, take the first
/// `top_n`. The returned documents carry their fused RRF score.
pub fn truncate_to_top_n(candidates: Vec<FusedCandidate>, top_n: usize) -> Vec<Document> {
    candidates
        .into_iter()
        .take(top_n)
        .map(|candidate| {
            let mut document = candidate.document;
            document.score = candidate.rrf_score;
            document
        })
        .collect()
}
