use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A file the user picked or dropped, waiting to be uploaded.
///
/// Only metadata is held here; the bytes are read from `path` when the
/// upload payload is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Self {
            name,
            size: metadata.len(),
            mime_type,
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Selected,
    Uploading,
    Done,
    Failed,
}

/// Everything a worker needs to perform one upload.
#[derive(Debug, Clone)]
pub struct UploadJob {
    pub file: SelectedFile,
    pub endpoint: String,
    pub field_name: String,
}

/// Raw JSON body returned by the processing server.
#[derive(Debug, Default, Deserialize)]
pub struct UploadReply {
    pub url: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub url: String,
}

/// What the preview card shows after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub src: String,
    pub download_href: String,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid server response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Server(String),
    #[error("Upload response did not include a url")]
    MissingUrl,
    #[error("{0}")]
    Worker(String),
}
