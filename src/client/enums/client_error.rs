use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}
