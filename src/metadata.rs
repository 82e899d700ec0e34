//! Submission metadata derivation.
//!
//! The text service is instructed to answer with exactly three lines:
//! title, alternate title, tags. The instruction is the only enforcement;
//! the parser accepts whatever comes back and pads or truncates to three
//! fields so malformed output degrades instead of failing.

use tracing::info;

use crate::constants::metadata_instruction;
use crate::error::AutostockError;
use crate::service::TextGenerator;

/// The three metadata fields for one asset. Any of them may be empty when
/// the upstream response had fewer than three lines.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Metadata {
    /// Short professional title, at most six words by instruction.
    pub title: String,
    /// Creative paraphrase of the title, used as the CSV description.
    pub description: String,
    /// Comma-separated keyword list.
    pub tags: String,
}

impl Metadata {
    /// Splits a response into the three positional fields. Missing lines
    /// become empty strings; lines past the third are discarded.
    pub fn parse(response: &str) -> Self {
        let mut lines = response.trim().lines();
        Self {
            title: lines.next().unwrap_or_default().trim().to_string(),
            description: lines.next().unwrap_or_default().trim().to_string(),
            tags: lines.next().unwrap_or_default().trim().to_string(),
        }
    }
}

/// Asks the text service for title, alternate title, and tags describing
/// the prompt. Transport failures propagate.
pub async fn generate_metadata(
    text: &impl TextGenerator,
    prompt: &str,
) -> Result<Metadata, AutostockError> {
    let response = text.generate_text(&metadata_instruction(prompt)).await?;
    let metadata = Metadata::parse(&response);
    info!(
        "Generated metadata:\nTitle: {}\nCreative description: {}\nTags: {}",
        metadata.title, metadata.description, metadata.tags
    );
    Ok(metadata)
}
