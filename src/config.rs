use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_UPLOAD_PATH: &str = "/upload";
pub const DEFAULT_UPLOAD_FIELD: &str = "video";

/// Where uploads go and how the file part is named.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    upload_path: String,
    pub field_name: String,
}

impl ClientConfig {
    pub fn new(server_url: &str, upload_path: &str, field_name: &str) -> Result<Self> {
        let trimmed = server_url.trim_end_matches('/');
        let base_url = Url::parse(&format!("{}/", trimmed))
            .with_context(|| format!("Invalid server url: {}", server_url))?;

        Ok(Self {
            base_url,
            upload_path: upload_path.to_string(),
            field_name: field_name.to_string(),
        })
    }

    /// Reads `CARTOON_SERVER_URL`, `CARTOON_UPLOAD_PATH` and `CARTOON_UPLOAD_FIELD`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url =
            var("CARTOON_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let upload_path =
            var("CARTOON_UPLOAD_PATH").unwrap_or_else(|| DEFAULT_UPLOAD_PATH.to_string());
        let field_name =
            var("CARTOON_UPLOAD_FIELD").unwrap_or_else(|| DEFAULT_UPLOAD_FIELD.to_string());

        Self::new(&server_url, &upload_path, &field_name)
    }

    pub fn server_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn upload_endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.server_url(),
            self.upload_path.trim_start_matches('/')
        )
    }

    /// Makes a url returned by the server absolute. Already absolute urls
    /// pass through untouched.
    pub fn resolve(&self, url: &str) -> String {
        match self.base_url.join(url) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                tracing::warn!(url, error = %e, "could not resolve result url");
                url.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> ClientConfig {
        ClientConfig::new(DEFAULT_SERVER_URL, DEFAULT_UPLOAD_PATH, DEFAULT_UPLOAD_FIELD).unwrap()
    }

    #[test]
    fn default_points_at_local_server() {
        let config = local();
        assert_eq!(config.upload_endpoint(), "http://127.0.0.1:5000/upload");
        assert_eq!(config.field_name, "video");
    }

    #[test]
    fn trailing_slashes_do_not_double_up() {
        let config = ClientConfig::new("http://media.local:8080///", "upload", "video").unwrap();
        assert_eq!(config.server_url(), "http://media.local:8080");
        assert_eq!(config.upload_endpoint(), "http://media.local:8080/upload");
    }

    #[test]
    fn relative_result_urls_resolve_against_server() {
        let config = local();
        assert_eq!(
            config.resolve("/static/outputs/clip_cartoon.mp4?t=5"),
            "http://127.0.0.1:5000/static/outputs/clip_cartoon.mp4?t=5"
        );
        assert_eq!(
            config.resolve("https://cdn.example.com/a.mp4"),
            "https://cdn.example.com/a.mp4"
        );
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = ClientConfig::from_vars(|_| None).unwrap();
        assert_eq!(config.upload_endpoint(), "http://127.0.0.1:5000/upload");
        assert_eq!(config.field_name, DEFAULT_UPLOAD_FIELD);
    }

    #[test]
    fn variables_override_defaults() {
        let config = ClientConfig::from_vars(|key| match key {
            "CARTOON_SERVER_URL" => Some("https://toon.example.com/".to_string()),
            "CARTOON_UPLOAD_PATH" => Some("/api/process".to_string()),
            "CARTOON_UPLOAD_FIELD" => Some("file".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.upload_endpoint(), "https://toon.example.com/api/process");
        assert_eq!(config.field_name, "file");
    }

    #[test]
    fn bad_server_variable_fails_startup() {
        let result = ClientConfig::from_vars(|key| {
            (key == "CARTOON_SERVER_URL").then(|| "::nope".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn from_env_reads_process_environment() {
        std::env::set_var("CARTOON_UPLOAD_FIELD", "clip");
        let config = ClientConfig::from_env().unwrap();
        std::env::remove_var("CARTOON_UPLOAD_FIELD");

        assert_eq!(config.field_name, "clip");
    }

    #[test]
    fn invalid_server_url_is_rejected() {
        assert!(ClientConfig::new("not a url", "/upload", "video").is_err());
    }
}
