//! Creative prompt generation.

use tracing::info;

use crate::constants::PROMPT_INSTRUCTION;
use crate::error::AutostockError;
use crate::pipeline::{Halt, StageOutput};
use crate::service::TextGenerator;

/// Asks the text service for one art-direction prompt. Transport failures
/// propagate; a blank response is a soft halt.
pub async fn generate_prompt(
    text: &impl TextGenerator,
) -> Result<StageOutput<String>, AutostockError> {
    let response = text.generate_text(PROMPT_INSTRUCTION).await?;
    let prompt = response.trim();
    if prompt.is_empty() {
        return Ok(StageOutput::Halted(Halt::NoPrompt));
    }
    info!("Generated AI prompt:\n{prompt}");
    Ok(StageOutput::Completed(prompt.to_string()))
}
