/// Quarry system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator placed between document contents when assembling the
/// generation context.
pub const CONTEXT_SEPARATOR: &str = "\n---\n";

/// Fixed instruction given to the generative model for every query.
pub const SYSTEM_INSTRUCTION: &str =
    "You are an expert assistant. Answer using only the given context.";

/// Standard response when retrieval finds no documents for a query.
/// The generative model is never invoked with an empty context.
pub const NO_INFORMATION_ANSWER: &str =
    "No relevant information was found for this question.";
