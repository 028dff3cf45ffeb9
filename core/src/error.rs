#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("invalid JSON in {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GalleryError {
    pub fn url(&self) -> &str {
        match self {
            GalleryError::Status { url, .. }
            | GalleryError::Network { url, .. }
            | GalleryError::Json { url, .. } => url,
        }
    }
}
