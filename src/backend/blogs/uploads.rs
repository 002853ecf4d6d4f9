/**
 * Upload Store
 *
 * Image files for blog posts live flat in one directory and are served
 * under `/uploads/<file>`. The database stores only the bare file name.
 *
 * # Naming
 *
 * Every saved file is named `<uuid-v4>.<ext>`, so client-supplied names
 * never reach the filesystem.
 */

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// URL prefix the upload directory is mounted under
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Directory-backed image storage
#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open the store, creating the directory if needed
    pub async fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        tracing::info!("Upload directory ready at {}", dir.display());
        Ok(Self { dir })
    }

    /// Directory files are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path on disk for a stored file name
    ///
    /// Only the final component of `file_name` is used, so a stored value
    /// can never point outside the directory.
    pub fn path_of(&self, file_name: &str) -> Option<PathBuf> {
        let name = Path::new(file_name).file_name()?;
        Some(self.dir.join(name))
    }

    /// Write `bytes` to a fresh `<uuid>.<extension>` file and flush it to disk
    ///
    /// Returns the generated file name.
    pub async fn save(&self, extension: &str, bytes: &[u8]) -> io::Result<String> {
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.dir.join(&file_name);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        if let Err(e) = write_all_synced(&mut file, bytes).await {
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path).await {
                tracing::warn!("Failed to remove partial upload {}: {}", path.display(), cleanup);
            }
            return Err(e);
        }

        tracing::debug!("Stored upload {} ({} bytes)", file_name, bytes.len());
        Ok(file_name)
    }

    /// Remove a stored file; a file that is already gone is not an error
    pub async fn remove(&self, file_name: &str) -> io::Result<()> {
        let path = self.path_of(file_name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid stored file name: {file_name:?}"),
            )
        })?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Upload already absent: {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

async fn write_all_synced(file: &mut fs::File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}

/// Public URL path for a stored file name
pub fn public_image_path(file_name: &str) -> String {
    format!("{UPLOADS_URL_PREFIX}/{file_name}")
}
