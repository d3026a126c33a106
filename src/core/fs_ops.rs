// src/core/fs_ops.rs
//! Profile reads and rendered-output writes for the CLI

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Parent directories of an `--output` path are created on demand.
    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                Self::ensure_dir_exists(parent).await?;
            }
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        info!("Written file: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("deeper").join("cv.html");

        FsOps::write_file_safe(&target, "<p>hi</p>").await.unwrap();
        assert_eq!(FsOps::read_file_safe(&target).await.unwrap(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_read_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsOps::read_file_safe(&dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
