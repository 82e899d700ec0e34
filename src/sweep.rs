//! Pre-run sweep of the save directory.
//!
//! Deletes every jpg and csv left behind by the previous run. This is a
//! blunt delete-all, not an age check: the directory holds at most one
//! asset at a time and the new run replaces it.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::error::AutostockError;

/// Creates the save directory if absent, then removes every file whose
/// extension matches a pipeline output type. A single failed deletion is
/// logged and skipped; it never aborts the sweep. Returns the number of
/// files removed.
pub async fn sweep_save_dir(save_dir: &Path) -> Result<usize, AutostockError> {
    tokio::fs::create_dir_all(save_dir).await?;

    let mut entries = match tokio::fs::read_dir(save_dir).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err.into()),
    };

    let mut deleted = 0;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !is_pipeline_output(&path) {
            continue;
        }
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted file: {}", path.display());
                deleted += 1;
            }
            Err(err) => {
                warn!("Failed to delete {}: {}", path.display(), err);
            }
        }
    }
    Ok(deleted)
}

fn is_pipeline_output(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweep_removes_only_pipeline_outputs() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "old_image.jpg",
            "UPPER.JPG",
            "shutterstock_metadata.csv",
            "keep.png",
            "notes.txt",
        ] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }

        let deleted = sweep_save_dir(dir.path()).await.unwrap();
        assert_eq!(deleted, 3);

        assert!(!dir.path().join("old_image.jpg").exists());
        assert!(!dir.path().join("UPPER.JPG").exists());
        assert!(!dir.path().join("shutterstock_metadata.csv").exists());
        assert!(dir.path().join("keep.png").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[tokio::test]
    async fn test_sweep_creates_missing_save_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("images");

        let deleted = sweep_save_dir(&target).await.unwrap();
        assert_eq!(deleted, 0);
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_sweep_skips_directories_with_matching_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("archive.jpg")).unwrap();
        std::fs::write(dir.path().join("real.jpg"), b"x").unwrap();

        // The directory deletion fails and is skipped; the run continues.
        let deleted = sweep_save_dir(dir.path()).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(dir.path().join("archive.jpg").is_dir());
    }
}
