//! Candidate selection: pairwise re-ranking or plain fused-order truncation.

pub mod reranker;
