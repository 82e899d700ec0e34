//! Shared constants for the asset pipeline
//!

/// Minimum width of a finished image; smaller renders get upscaled.
pub const UPSCALE_WIDTH: u32 = 2048;

/// Minimum height of a finished image; smaller renders get upscaled.
pub const UPSCALE_HEIGHT: u32 = 2048;

/// JPEG quality used when persisting the finished image.
pub const JPEG_QUALITY: u8 = 95;

/// Maximum length (in characters) of a sanitized filename stem.
pub const FILENAME_STEM_MAX: usize = 50;

/// Every asset is submitted under this category.
pub const FIXED_CATEGORY: &str = "Technology";

/// Fixed name of the submission metadata table, overwritten each run.
pub const CSV_FILENAME: &str = "shutterstock_metadata.csv";

/// Diffusion step count; kept low so a run stays cheap.
pub const IMAGE_STEPS: u32 = 4;

/// Images requested per synthesis call.
pub const IMAGE_COUNT: u32 = 1;

/// Largest square the image service will render; upscaling happens locally.
pub const SERVICE_IMAGE_SIZE: u32 = 1024;

/// Instruction sent to the text model to obtain the creative prompt.
pub const PROMPT_INSTRUCTION: &str = "Generate a unique, high-quality 4K cyberpunk-themed art description with futuristic elements, \
neon lights, and cityscape details. Ensure the details are ultra-realistic and suitable for stock image submission.";

/// Builds the three-line metadata instruction for a given prompt.
pub fn metadata_instruction(prompt: &str) -> String {
    format!(
        "Generate a short, descriptive, professional stock photo title (6 words max) for this AI-generated image: {prompt}. \
Then on a new line, generate a creative paraphrase of that title, adding some creative descriptive elements, and acting as an alternative title, \
but keep it around 10 words or so, while adding some randomness to the order that you introduce the items as well as the words used \
(you tend to use the words: Futuristic Metropolis, a lot), as well as in general, making the phrase make grammatical sense. \
Then on a new line, output a comma-separated list of 5-10 relevant tags. \
Do not include extra text, disclaimers, or headings. Output only these three lines in plain text."
    )
}
