use thiserror::Error;

/// Everything that can abort an export run. Only 429 throttling is
/// recovered (inside `http::ApiClient`); every variant here is fatal.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("next link is not a valid url: {0}")]
    BadNextLink(String),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
