use async_trait::async_trait;

use crate::errors::GenerationError;

/// Generative model producing free text from an instruction, an assembled
/// context, and the original question.
#[async_trait]
pub trait IAnswerGenerator: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        context: &str,
        question: &str,
    ) -> Result<String, GenerationError>;
}
