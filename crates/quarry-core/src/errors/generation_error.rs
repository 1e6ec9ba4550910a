/// Generative model errors.
///
/// Fatal for the query. The core never retries: generation calls are
/// non-idempotent, at-most-once operations. Retries belong to the caller.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("transient generation failure: {reason}")]
    Transient { reason: String },

    #[error("permanent generation failure: {reason}")]
    Permanent { reason: String },
}
