/// A single candidate source failed.
///
/// Recoverable: the searcher logs it and fuses whatever the remaining
/// sources returned. Fusion itself never sees an error value.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("backend query failed: {reason}")]
    Backend { reason: String },
}
