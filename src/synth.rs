//! Image synthesis and post-processing.
//!
//! The service response is untrusted: the image may arrive inline as
//! base64 or behind a URL. Inline decode is tried first; a failed decode
//! falls through to the URL fetch. Whatever arrives gets normalized to
//! RGB, upscaled to the target resolution when small, and saved as JPEG.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose;
use image::DynamicImage;
use image::imageops::FilterType;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::constants::{JPEG_QUALITY, UPSCALE_HEIGHT, UPSCALE_WIDTH};
use crate::error::AutostockError;
use crate::pipeline::{Halt, StageOutput};
use crate::service::{ImageGenerator, ImagePayload};

/// Requests one image for the prompt, decodes it, normalizes it, and
/// persists it under a timestamped temporary filename. Failures of the
/// generation call itself are soft halts, not errors.
pub async fn synthesize_image(
    config: &AppConfig,
    images: &impl ImageGenerator,
    prompt: &str,
) -> Result<StageOutput<PathBuf>, AutostockError> {
    let payload = match images.generate_image(prompt).await {
        Ok(payload) => payload,
        Err(err) => {
            error!("Error generating image: {err}");
            return Ok(StageOutput::Halted(Halt::NoImage));
        }
    };

    let image = match decode_payload(images, &payload).await {
        Some(image) => image,
        None => {
            warn!("Failed to obtain image from both base64 and URL.");
            return Ok(StageOutput::Halted(Halt::NoImage));
        }
    };

    let image = normalize(image);
    let path = save_jpeg(&config.save_dir, &image)?;
    info!("AI image saved: {}", path.display());
    Ok(StageOutput::Completed(path))
}

/// Tries the inline payload first, then the remote URL. Every failure is
/// logged and falls through; `None` means neither path worked.
async fn decode_payload(
    images: &impl ImageGenerator,
    payload: &ImagePayload,
) -> Option<DynamicImage> {
    if let Some(b64_json) = &payload.b64_json {
        match general_purpose::STANDARD.decode(b64_json) {
            Ok(bytes) => match image::load_from_memory(&bytes) {
                Ok(image) => return Some(image),
                Err(err) => warn!("Error opening image from base64 payload: {err}"),
            },
            Err(err) => warn!("Error decoding base64 image payload: {err}"),
        }
    }

    if let Some(url) = &payload.url {
        match images.fetch_remote(url).await {
            Ok(bytes) => match image::load_from_memory(&bytes) {
                Ok(image) => return Some(image),
                Err(err) => warn!("Error opening image fetched from {url}: {err}"),
            },
            Err(err) => warn!("Error downloading image from {url}: {err}"),
        }
    }

    None
}

/// Converts to three-channel color and forces the target resolution when
/// either axis is below it. The resize is an exact-box resample, not
/// aspect-preserving.
fn normalize(image: DynamicImage) -> DynamicImage {
    let image = match image {
        DynamicImage::ImageRgb8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    };

    let (width, height) = (image.width(), image.height());
    info!("Initial image size: {width}x{height}");
    if width < UPSCALE_WIDTH || height < UPSCALE_HEIGHT {
        info!("Upscaling image to {UPSCALE_WIDTH}x{UPSCALE_HEIGHT}...");
        image.resize_exact(UPSCALE_WIDTH, UPSCALE_HEIGHT, FilterType::Lanczos3)
    } else {
        image
    }
}

/// Saves under `generated_image_<unix-seconds>.jpg` so a rerun within the
/// same directory never collides with an unrenamed leftover.
fn save_jpeg(save_dir: &Path, image: &DynamicImage) -> Result<PathBuf, AutostockError> {
    let filename = format!("generated_image_{}.jpg", chrono::Utc::now().timestamp());
    let path = save_dir.join(filename);
    let file = std::fs::File::create(&path)?;
    let mut writer = BufWriter::new(file);
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    encoder.encode_image(image)?;
    Ok(path)
}
