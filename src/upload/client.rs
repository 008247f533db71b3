use crate::upload::types::{UploadError, UploadJob, UploadReply, UploadResult};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, StatusCode};
use tokio_util::io::ReaderStream;

/// Failure text used when the server rejects an upload without saying why.
pub const DEFAULT_FAILURE: &str = "Upload failed";

#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, job: &UploadJob) -> Result<UploadResult, UploadError>;
}

#[derive(Clone, Default)]
pub struct HttpUploader {
    client: reqwest::Client,
}

impl HttpUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Streams the file from disk; source videos can run to hundreds of
    /// megabytes.
    async fn build_form(job: &UploadJob) -> Result<Form, UploadError> {
        let read_error = |source| UploadError::Read {
            path: job.file.path.clone(),
            source,
        };
        let file = tokio::fs::File::open(&job.file.path)
            .await
            .map_err(read_error)?;
        let length = file.metadata().await.map_err(read_error)?.len();

        let body = Body::wrap_stream(ReaderStream::new(file));
        let part = Part::stream_with_length(body, length)
            .file_name(job.file.name.clone())
            .mime_str(&job.file.mime_type)?;

        Ok(Form::new().part(job.field_name.clone(), part))
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    async fn upload(&self, job: &UploadJob) -> Result<UploadResult, UploadError> {
        let form = Self::build_form(job).await?;

        tracing::debug!(
            endpoint = %job.endpoint,
            file = %job.file.name,
            size = job.file.size,
            "sending upload request"
        );

        let response = self.client.post(&job.endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(%status, bytes = body.len(), "upload response received");
        interpret_response(status, &body)
    }
}

/// Turns a raw server reply into an upload outcome.
///
/// The body is parsed before the status is checked, so a reply that is not
/// JSON fails as a parse error whatever its status.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<UploadResult, UploadError> {
    let reply: UploadReply = serde_json::from_slice(body)?;

    if !status.is_success() {
        return Err(UploadError::Server(
            reply.error.unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        ));
    }

    reply
        .url
        .map(|url| UploadResult { url })
        .ok_or(UploadError::MissingUrl)
}
