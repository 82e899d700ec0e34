//! Pipeline driver.
//!
//! Stages run in strict sequence: sweep, prompt, image, metadata,
//! finalize. A stage that cannot produce its output halts the run cleanly;
//! only transport-level failures of the text calls surface as errors.

use std::path::PathBuf;

use tracing::info;

use crate::config::AppConfig;
use crate::error::AutostockError;
use crate::finalize::{AssetRecord, finalize_asset};
use crate::metadata::generate_metadata;
use crate::prompt::generate_prompt;
use crate::service::{ImageGenerator, TextGenerator};
use crate::sweep::sweep_save_dir;
use crate::synth::synthesize_image;

/// Why a run stopped early without producing an asset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Halt {
    /// The text service produced no usable prompt.
    NoPrompt,
    /// Neither decode path yielded an image.
    NoImage,
}

/// What one stage handed back: its output, or a reason to stop.
#[derive(Debug)]
pub enum StageOutput<T> {
    /// The stage produced its output and the run continues.
    Completed(T),
    /// The stage could not produce output; the run ends cleanly.
    Halted(Halt),
}

/// Terminal state of one pipeline run. Halts are quiet outcomes, not
/// errors; both exit the process successfully.
#[derive(Debug)]
pub enum RunOutcome {
    /// An asset was produced and recorded.
    Finalized {
        /// Final on-disk path of the image.
        image_path: PathBuf,
        /// The CSV row that was written.
        record: AssetRecord,
    },
    /// The run stopped early.
    Halted(Halt),
}

/// Runs the full pipeline once.
pub async fn run<T, I>(
    config: &AppConfig,
    text: &T,
    images: &I,
) -> Result<RunOutcome, AutostockError>
where
    T: TextGenerator,
    I: ImageGenerator,
{
    sweep_save_dir(&config.save_dir).await?;

    let prompt = match generate_prompt(text).await? {
        StageOutput::Completed(prompt) => prompt,
        StageOutput::Halted(halt) => {
            info!("No prompt generated. Skipping image generation.");
            return Ok(RunOutcome::Halted(halt));
        }
    };

    let image_path = match synthesize_image(config, images, &prompt).await? {
        StageOutput::Completed(path) => path,
        StageOutput::Halted(halt) => {
            info!("Image generation produced no image. Run ends.");
            return Ok(RunOutcome::Halted(halt));
        }
    };

    let metadata = generate_metadata(text, &prompt).await?;
    let (image_path, record) = finalize_asset(config, &image_path, &metadata)?;

    Ok(RunOutcome::Finalized { image_path, record })
}
