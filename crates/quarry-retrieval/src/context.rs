//! Generation context assembly.

use quarry_core::constants::CONTEXT_SEPARATOR;
use quarry_core::models::Document;

/// Join the selected documents' content with the context separator,
/// preserving final ranking order.
pub fn assemble(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|document| document.content.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}
