/// Re-ranking stage errors.
///
/// Always fatal for the query: a ranking built from a subset of scores
/// would silently corrupt comparability, so there is no partial path.
#[derive(Debug, thiserror::Error)]
pub enum RerankError {
    #[error("relevance scorer failed: {reason}")]
    ScorerFailed { reason: String },

    #[error("re-ranking is enabled but no relevance scorer is wired")]
    ScorerMissing,
}
