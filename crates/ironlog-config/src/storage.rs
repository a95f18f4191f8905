//! Upload storage settings.
//!
//! - `UPLOAD_DIR`: directory uploads are written to (default `storage/uploads`)
//! - `PUBLIC_FILES_URL`: URL prefix the directory is served under
//!   (default `http://localhost:3000/files`)
//! - `MAX_UPLOAD_BYTES`: largest accepted upload (default 5 MiB)

use std::env;
use std::path::PathBuf;

use crate::env_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub public_base_url: String,
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("storage/uploads"),
            public_base_url: "http://localhost:3000/files".to_string(),
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            public_base_url: env::var("PUBLIC_FILES_URL").unwrap_or(defaults.public_base_url),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
        }
    }
}
