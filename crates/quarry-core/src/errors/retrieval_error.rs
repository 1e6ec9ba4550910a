/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// Every candidate source failed; no list survived to fuse.
    #[error("all {attempted} candidate sources failed")]
    AllSourcesFailed { attempted: usize },
}
