use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between pressing submit and reading the
/// server's answer. The form collapses all of these into one message.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid content type {mime}: {source}")]
    InvalidMime {
        mime: String,
        source: reqwest::Error,
    },
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upload failed with status: {0}")]
    Status(reqwest::StatusCode),
    #[error("Failed to parse upload response: {0}")]
    InvalidResponse(String),
    #[error("Upload worker unavailable: {0}")]
    WorkerUnavailable(String),
}
