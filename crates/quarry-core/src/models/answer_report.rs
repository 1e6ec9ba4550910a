use serde::{Deserialize, Serialize};

/// Wall-clock duration of each pipeline stage, in milliseconds.
///
/// A required part of every answer, not optional telemetry: operators use
/// these to validate cache and re-rank trade-offs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimings {
    pub retrieval_ms: u64,
    pub rerank_ms: u64,
    pub generation_ms: u64,
    pub total_ms: u64,
}

/// Final output of the answer pipeline for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerReport {
    /// The generated answer, a cached answer, or the standard
    /// no-information response.
    pub answer: String,
    /// Whether the answer came from the cache (all later stages skipped).
    pub cache_hit: bool,
    /// Per-stage timings. Zeroed on cache hits.
    pub timings: StageTimings,
}
