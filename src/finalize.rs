//! Asset finalization: title-based rename and the submission CSV row.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::constants::{CSV_FILENAME, FIXED_CATEGORY};
use crate::error::AutostockError;
use crate::metadata::Metadata;
use crate::sanitize::filename_stem;

/// One submission row. Field names map to the stock-submission CSV header;
/// serialization order is the column order.
#[derive(Clone, Debug, Serialize)]
pub struct AssetRecord {
    /// Final on-disk filename of the image.
    #[serde(rename = "Filename")]
    pub filename: String,
    /// Creative description (the alternate title).
    #[serde(rename = "Description")]
    pub description: String,
    /// Comma-separated keyword list.
    #[serde(rename = "Keywords")]
    pub keywords: String,
    /// Always the fixed category.
    #[serde(rename = "Categories")]
    pub categories: String,
    /// Always "no".
    #[serde(rename = "Editorial")]
    pub editorial: String,
    /// Always "no".
    #[serde(rename = "Mature content")]
    pub mature_content: String,
    /// Always "no".
    #[serde(rename = "illustration")]
    pub illustration: String,
}

/// Renames the image after its sanitized title and overwrites the metadata
/// table with a header plus exactly one row. A failed rename keeps the
/// temporary filename; the CSV row always names the file that exists.
pub fn finalize_asset(
    config: &AppConfig,
    image_path: &Path,
    metadata: &Metadata,
) -> Result<(PathBuf, AssetRecord), AutostockError> {
    let final_path = rename_with_title(image_path, &metadata.title);
    let filename = final_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    let record = AssetRecord {
        filename,
        description: metadata.description.clone(),
        keywords: metadata.tags.clone(),
        categories: FIXED_CATEGORY.to_string(),
        editorial: "no".to_string(),
        mature_content: "no".to_string(),
        illustration: "no".to_string(),
    };

    write_csv_record(&config.save_dir, &record)?;
    Ok((final_path, record))
}

/// Builds `<sanitized title>.jpg` beside the image and renames it. Rename
/// failures are non-fatal; the original path is kept.
fn rename_with_title(image_path: &Path, title: &str) -> PathBuf {
    let stem = filename_stem(title);
    let new_path = match image_path.parent() {
        Some(parent) => parent.join(format!("{stem}.jpg")),
        None => return image_path.to_path_buf(),
    };

    match std::fs::rename(image_path, &new_path) {
        Ok(()) => {
            info!("Renamed file to: {}", new_path.display());
            new_path
        }
        Err(err) => {
            warn!("Could not rename file: {err}");
            image_path.to_path_buf()
        }
    }
}

/// Overwrites the single metadata table with one header and one data row.
/// The record arrives fully composed; no partial row is ever written.
fn write_csv_record(save_dir: &Path, record: &AssetRecord) -> Result<(), AutostockError> {
    let csv_path = save_dir.join(CSV_FILENAME);
    let mut writer = csv::Writer::from_path(&csv_path)?;
    writer.serialize(record)?;
    writer.flush().map_err(AutostockError::Io)?;
    info!("CSV metadata written to {}", csv_path.display());
    Ok(())
}
