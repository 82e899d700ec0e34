//! CLI parser
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "AUTOSTOCK_DEBUG")]
    /// Enable debug logging. Env: AUTOSTOCK_DEBUG
    pub debug: bool,

    #[clap(long, short, default_value = "./images", env = "AUTOSTOCK_SAVE_DIR")]
    /// Directory the image and metadata CSV are written to, created if
    /// absent. Env: AUTOSTOCK_SAVE_DIR
    pub save_dir: PathBuf,

    #[clap(long, required = true, env = "TOGETHER_API_KEY", hide_env_values = true)]
    /// Together AI API key. Env: TOGETHER_API_KEY
    pub api_key: String,

    #[clap(
        long,
        default_value = "https://api.together.xyz",
        env = "AUTOSTOCK_BASE_URL"
    )]
    /// Base URL of the generation API.
    /// Env: AUTOSTOCK_BASE_URL
    pub base_url: String,

    #[clap(
        long,
        default_value = "meta-llama/Llama-3.3-70B-Instruct-Turbo",
        env = "AUTOSTOCK_TEXT_MODEL"
    )]
    /// Text model used for prompt and metadata generation.
    /// Env: AUTOSTOCK_TEXT_MODEL
    pub text_model: String,

    #[clap(
        long,
        default_value = "black-forest-labs/FLUX.1-schnell-Free",
        env = "AUTOSTOCK_IMAGE_MODEL"
    )]
    /// Image model used for synthesis.
    /// Env: AUTOSTOCK_IMAGE_MODEL
    pub image_model: String,

    #[clap(long, default_value = "120", env = "AUTOSTOCK_TIMEOUT_SECONDS")]
    /// Per-request timeout in seconds for every service call.
    /// Env: AUTOSTOCK_TIMEOUT_SECONDS
    pub timeout_seconds: u64,
}
