use serde::{Deserialize, Serialize};

/// A retrieval candidate.
///
/// The meaning of `score` depends on the stage that produced it: cosine
/// similarity from the dense source, keyword rank from the lexical source,
/// fused RRF score, or cross-encoder output. Identifier uniqueness within
/// a corpus is the sole invariant used for deduplication across fusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, unique within a corpus.
    pub id: String,
    /// Text payload.
    pub content: String,
    /// Stage-dependent relevance score.
    pub score: f64,
    /// Free-form metadata (e.g. page number). `Null` when absent.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            score,
            metadata: serde_json::Value::Null,
        }
    }
}

/// An ordered sequence of documents from one candidate source, most
/// relevant first. The 0-based position within the list is the rank input
/// to fusion, not just the score.
pub type RankedList = Vec<Document>;
