//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Combines multiple ranked lists into a single fused ranking without
//! requiring score normalization across different retrieval methods.

use std::collections::HashMap;

use quarry_core::models::{Document, RankedList};

/// A candidate after RRF fusion.
#[derive(Debug, Clone)]
pub struct FusedCandidate {
    pub document: Document,
    /// Fused RRF score (higher = more relevant).
    pub rrf_score: f64,
}

/// Fuse multiple ranked lists using Reciprocal Rank Fusion.
///
/// `k` is the smoothing constant (default 60). Higher k reduces the
/// influence of high-ranking items from any single list.
///
/// A document at 0-based rank `r` in a list contributes `1 / (k + r)`;
/// contributions sum across lists, so a document found by several sources
/// outranks one found by a single source. Deduplication is by identifier
/// and the first occurrence (list order, then rank order) supplies the
/// content snapshot. The output is exactly the id-union of the inputs,
/// each id once, sorted by fused score descending. Ties break on the
/// identifier so the ordering never depends on hash-map iteration.
///
/// Truncation is the caller's job; the full union is always returned.
pub fn fuse(lists: &[RankedList], k: u32) -> Vec<FusedCandidate> {
    let mut scores: HashMap<String, f64> = HashMap::new();
    let mut snapshots: HashMap<String, Document> = HashMap::new();

    for list in lists {
        for (rank, document) in list.iter().enumerate() {
            let rrf = 1.0 / (k as f64 + rank as f64);
            *scores.entry(document.id.clone()).or_default() += rrf;
            snapshots
                .entry(document.id.clone())
                .or_insert_with(|| document.clone());
        }
    }

    let mut candidates: Vec<FusedCandidate> = snapshots
        .into_iter()
        .map(|(id, document)| FusedCandidate {
            rrf_score: scores.get(&id).copied().unwrap_or_default(),
            document,
        })
        .collect();

    // Sort by RRF score descending, identifier ascending on ties.
    candidates.sort_by(|a, b| {
        b.rrf_score
            .partial_cmp(&a.rrf_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.document.id.cmp(&b.document.id))
    });

    candidates
}
