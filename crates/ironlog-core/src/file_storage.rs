//! Storage for uploaded exercise images.
//!
//! Handlers depend on the [`FileStorage`] trait only; the server wires in
//! [`LocalFileStorage`], whose files are exposed under `/files`. An object
//! store backend can implement the same trait.
//!
//! ```ignore
//! let storage = LocalFileStorage::new(PathBuf::from("storage/uploads"), base_url);
//! storage.check_upload("image/png", bytes.len())?;
//! let key = storage.save("exercises/3f2a-1b9c.png", &bytes).await?;
//! let url = storage.get_url(&key)?;
//! ```

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use tokio::fs;

pub type StorageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StorageError>> + Send + 'a>>;

pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
];

pub trait FileStorage: Send + Sync {
    /// Stores `content` under `key` and returns the key.
    fn save<'a>(&'a self, key: &'a str, content: &'a [u8]) -> StorageFuture<'a, String>;

    /// Removes the file at `key`. Missing files are not an error.
    fn delete<'a>(&'a self, key: &'a str) -> StorageFuture<'a, ()>;

    fn get_url(&self, key: &str) -> Result<String, StorageError>;

    /// Rejects uploads whose MIME type or size is not accepted, returning
    /// the file extension to store the upload under.
    fn check_upload(&self, content_type: &str, len: usize) -> Result<&'static str, StorageError>;
}

#[derive(Debug)]
pub enum StorageError {
    InvalidFileSize { max_bytes: usize },
    InvalidMimeType {
        received: String,
        allowed: Vec<String>,
    },
    IoError(std::io::Error),
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFileSize { max_bytes } => {
                write!(f, "File exceeds maximum size of {} bytes", max_bytes)
            }
            Self::InvalidMimeType { received, allowed } => write!(
                f,
                "File type '{}' not allowed. Allowed types: {}",
                received,
                allowed.join(", ")
            ),
            Self::IoError(e) => write!(f, "I/O error: {}", e),
            Self::InvalidKey(msg) => write!(f, "Invalid storage key: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}

impl StorageError {
    /// Whether the error was caused by the uploaded file rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFileSize { .. } | Self::InvalidMimeType { .. }
        )
    }
}

/// Maps an accepted image MIME type to the extension used in storage keys.
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    IMAGE_TYPES
        .iter()
        .find(|(mime, _)| *mime == essence)
        .map(|(_, ext)| *ext)
}

/// Filesystem-backed storage rooted at `base_dir`.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    base_dir: PathBuf,
    base_url: String,
    max_file_size: usize,
}

impl LocalFileStorage {
    pub fn new(base_dir: PathBuf, base_url: String) -> Self {
        Self::with_max_size(base_dir, base_url, DEFAULT_MAX_FILE_SIZE)
    }

    pub fn with_max_size(base_dir: PathBuf, base_url: String, max_file_size: usize) -> Self {
        Self {
            base_dir,
            base_url,
            max_file_size,
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn validate_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty() || key.contains("..") || key.starts_with('/') || key.starts_with('\\') {
            return Err(StorageError::InvalidKey(
                "Key must not be empty, contain '..', or start with a separator".to_string(),
            ));
        }

        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.'))
        {
            return Err(StorageError::InvalidKey(
                "Key contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }
}

impl FileStorage for LocalFileStorage {
    fn save<'a>(&'a self, key: &'a str, content: &'a [u8]) -> StorageFuture<'a, String> {
        Box::pin(async move {
            Self::validate_key(key)?;

            if content.len() > self.max_file_size {
                return Err(StorageError::InvalidFileSize {
                    max_bytes: self.max_file_size,
                });
            }

            let file_path = self.base_dir.join(key);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(&file_path, content).await?;

            tracing::debug!(key, bytes = content.len(), "Stored upload");
            Ok(key.to_string())
        })
    }

    fn delete<'a>(&'a self, key: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            Self::validate_key(key)?;

            match fs::remove_file(self.base_dir.join(key)).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn get_url(&self, key: &str) -> Result<String, StorageError> {
        Self::validate_key(key)?;
        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), key))
    }

    fn check_upload(&self, content_type: &str, len: usize) -> Result<&'static str, StorageError> {
        let ext = image_extension(content_type).ok_or_else(|| StorageError::InvalidMimeType {
            received: content_type.to_string(),
            allowed: IMAGE_TYPES.iter().map(|(mime, _)| mime.to_string()).collect(),
        })?;

        if len == 0 || len > self.max_file_size {
            return Err(StorageError::InvalidFileSize {
                max_bytes: self.max_file_size,
            });
        }

        Ok(ext)
    }
}
