//! Config handling

use std::path::PathBuf;
use std::time::Duration;

use tracing::log::LevelFilter;

use crate::cli::CliOptions;

/// Sets up logging based on the debug flag
pub fn setup_logging(debug: bool) -> Result<(), Box<std::io::Error>> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut logger = simple_logger::SimpleLogger::new().with_level(level);
    if !debug {
        logger = logger
            .with_module_level("tracing", LevelFilter::Warn)
            .with_module_level("rustls", LevelFilter::Info)
            .with_module_level("hyper_util", LevelFilter::Info)
            .with_module_level("h2", LevelFilter::Info);
    }
    logger.init().map_err(|err| {
        eprintln!("Failed to initialize logger: {}", err);
        Box::new(std::io::Error::other(err))
    })
}

/// Startup configuration, built once and passed by reference into each
/// pipeline stage.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory the image and CSV land in.
    pub save_dir: PathBuf,
    /// API credential for the generation services.
    pub api_key: String,
    /// Base URL of the generation API.
    pub base_url: String,
    /// Model used for both text calls.
    pub text_model: String,
    /// Model used for image synthesis.
    pub image_model: String,
    /// Applied to every outbound request.
    pub request_timeout: Duration,
}

impl From<&CliOptions> for AppConfig {
    fn from(cli: &CliOptions) -> Self {
        Self {
            save_dir: cli.save_dir.clone(),
            api_key: cli.api_key.clone(),
            base_url: cli.base_url.trim_end_matches('/').to_string(),
            text_model: cli.text_model.clone(),
            image_model: cli.image_model.clone(),
            request_timeout: Duration::from_secs(cli.timeout_seconds),
        }
    }
}
