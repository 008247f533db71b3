use crate::config::ClientConfig;
use crate::upload::{Preview, SelectedFile, UploadError, UploadJob, UploadPhase, UploadResult};
use crate::utils::clock::Clock;

pub const PROMPT_SELECT_FIRST: &str = "Please select a video file first.";
pub const STATUS_UPLOADING: &str = "Uploading...";
pub const STATUS_DONE: &str = "Done!";

/// Owns the selection, the status line and the preview, and moves them
/// through `idle -> selected -> uploading -> done | failed`.
///
/// The controller never touches the network itself: `begin_upload` hands out
/// a job and `finish_upload` takes the outcome back, so the caller decides
/// where the request runs.
pub struct UploadController {
    selected: Option<SelectedFile>,
    status: String,
    phase: UploadPhase,
    upload_enabled: bool,
    preview: Option<Preview>,
    endpoint: String,
    field_name: String,
    clock: Box<dyn Clock>,
}

impl UploadController {
    pub fn new(config: &ClientConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            selected: None,
            status: String::new(),
            phase: UploadPhase::Idle,
            upload_enabled: true,
            preview: None,
            endpoint: config.upload_endpoint(),
            field_name: config.field_name.clone(),
            clock,
        }
    }

    /// Takes the first of `files` as the new selection. Returns `false` and
    /// changes nothing when `files` is empty.
    pub fn select_files<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let Some(file) = files.into_iter().next() else {
            return false;
        };

        tracing::info!(name = %file.name, size = file.size, mime = %file.mime_type, "file selected");
        self.status = format!("Selected: {}", file.name);
        if self.phase != UploadPhase::Uploading {
            self.phase = UploadPhase::Selected;
        }
        self.selected = Some(file);
        true
    }

    pub fn begin_upload(&mut self) -> Option<UploadJob> {
        let Some(file) = self.selected.clone() else {
            self.status = PROMPT_SELECT_FIRST.to_string();
            return None;
        };

        tracing::info!(name = %file.name, endpoint = %self.endpoint, "upload started");
        self.status = STATUS_UPLOADING.to_string();
        self.phase = UploadPhase::Uploading;
        self.upload_enabled = false;

        Some(UploadJob {
            file,
            endpoint: self.endpoint.clone(),
            field_name: self.field_name.clone(),
        })
    }

    pub fn finish_upload(&mut self, outcome: Result<UploadResult, UploadError>) {
        match outcome {
            Ok(result) => {
                tracing::info!(url = %result.url, "upload finished");
                self.preview = Some(Preview {
                    src: format!("{}?t={}", result.url, self.clock.now_millis()),
                    download_href: result.url,
                });
                self.status = STATUS_DONE.to_string();
                self.phase = UploadPhase::Done;
            }
            Err(e) => {
                tracing::error!(error = %e, "upload failed");
                self.status = format!("Error: {}", e);
                self.phase = UploadPhase::Failed;
            }
        }
        self.upload_enabled = true;
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn is_upload_enabled(&self) -> bool {
        self.upload_enabled
    }

    /// Set by the first successful upload and replaced by later ones; a
    /// failed attempt leaves the previous result on screen.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }
}
