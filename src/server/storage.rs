//! Local file store for uploaded media.
//!
//! Uploads are written under the configured root as `<millis>-<random>.<ext>` and
//! referenced by their public path `/uploads/<file name>`, which is also the prefix the
//! router serves the directory under.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::server::{error::AppError, util::multipart::UploadedFile};

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if it does not exist yet.
    pub async fn init(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Writes an upload under a fresh unique name.
    ///
    /// # Returns
    /// - `Ok(String)` - Public path of the stored file
    /// - `Err(AppError::IoErr)` - Failed to write the file
    pub async fn save(&self, file: &UploadedFile) -> Result<String, AppError> {
        let file_name = match file.extension() {
            Some(ext) => format!("{}-{}.{}", Utc::now().timestamp_millis(), rand::random::<u32>(), ext),
            None => format!("{}-{}", Utc::now().timestamp_millis(), rand::random::<u32>()),
        };

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&file_name), &file.bytes).await?;

        tracing::debug!("Stored upload {} ({} bytes)", file_name, file.bytes.len());

        Ok(format!("{}/{}", PUBLIC_PREFIX, file_name))
    }

    /// Deletes a file previously returned by [`FileStore::save`].
    ///
    /// A file that is already gone counts as removed. Paths that do not name a plain file
    /// directly under the store root are ignored.
    pub async fn remove(&self, stored_path: &str) -> Result<(), AppError> {
        let Some(path) = self.resolve(stored_path) else {
            tracing::warn!("Refusing to remove file outside upload root: {}", stored_path);
            return Ok(());
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Best-effort removal used when a record stops referencing a file.
    ///
    /// Failures are logged and swallowed.
    pub async fn discard(&self, stored_path: Option<&str>) {
        let Some(stored_path) = stored_path else {
            return;
        };

        if let Err(e) = self.remove(stored_path).await {
            tracing::error!("Failed to remove orphaned file {}: {}", stored_path, e);
        }
    }

    /// Filesystem location of a stored public path.
    pub fn resolve(&self, stored_path: &str) -> Option<PathBuf> {
        let file_name = stored_path.rsplit('/').next()?;

        if file_name.is_empty() || file_name == "." || file_name == ".." || file_name.contains('\\') {
            return None;
        }

        Some(self.root.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Bytes;

    use super::*;

    fn upload(name: &str, content: &'static [u8]) -> UploadedFile {
        UploadedFile {
            file_name: Some(name.to_string()),
            bytes: Bytes::from_static(content),
        }
    }

    #[tokio::test]
    async fn saves_under_public_prefix_with_extension() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());

        let path = store.save(&upload("clip.MP4", b"video")).await?;

        assert!(path.starts_with("/uploads/"));
        assert!(path.ends_with(".mp4"));
        let file_name = path.trim_start_matches("/uploads/");
        assert_eq!(std::fs::read(dir.path().join(file_name))?, b"video");

        Ok(())
    }

    #[tokio::test]
    async fn removes_stored_file_and_tolerates_missing() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());
        let path = store.save(&upload("thumb.png", b"png")).await?;

        store.remove(&path).await?;
        store.remove(&path).await?;

        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn ignores_traversal_paths() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());

        store.remove("/uploads/..").await?;
        store.remove("").await?;

        Ok(())
    }
}
