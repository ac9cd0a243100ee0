use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response body has no `{0}` field")]
    MissingField(&'static str),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
