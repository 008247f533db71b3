mod client;
mod types;

pub use client::{HttpUploader, Uploader};
pub use types::{Preview, SelectedFile, UploadError, UploadJob, UploadPhase, UploadResult};
