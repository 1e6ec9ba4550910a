//! Error taxonomy: per-subsystem enums plus the `QuarryError` umbrella.
//!
//! A single failing candidate source (`SourceError`) is recoverable and is
//! handled at the source-query boundary; every other failure is fatal for
//! the query and propagates to the caller.

mod config_error;
mod generation_error;
mod rerank_error;
mod retrieval_error;
mod source_error;

pub use config_error::ConfigError;
pub use generation_error::GenerationError;
pub use rerank_error::RerankError;
pub use retrieval_error::RetrievalError;
pub use source_error::SourceError;

/// Umbrella error for the answer pipeline.
#[derive(Debug, thiserror::Error)]
pub enum QuarryError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Rerank(#[from] RerankError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type QuarryResult<T> = Result<T, QuarryError>;
