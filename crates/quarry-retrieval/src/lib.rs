//! # quarry-retrieval
//!
//! The query engine. Hybrid search (multi-source candidate gathering +
//! RRF fusion), optional cross-encoder re-ranking, answer caching, and
//! generation orchestration.
//!
//! ## Architecture
//!
//! ```text
//! AnswerEngine (IAnswerPipeline)
//! ├── AnswerCache (exact-key, strict LRU + lazy TTL)
//! ├── HybridSearcher
//! │   ├── ICandidateSource × N (dense, lexical, …)
//! │   └── RRF Fusion (reciprocal rank)
//! ├── Reranker (IRelevanceScorer, optional)
//! ├── Context assembly (separator-joined, ranking order)
//! └── IAnswerGenerator (single call, never retried)
//! ```

pub mod cache;
pub mod context;
pub mod engine;
pub mod ranking;
pub mod search;

pub use cache::AnswerCache;
pub use engine::AnswerEngine;
pub use search::HybridSearcher;
