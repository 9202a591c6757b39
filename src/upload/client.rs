use crate::upload::error::UploadError;
use crate::upload::media;
use crate::upload::types::{UploadReceipt, UploadRequest};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Sends one upload request and reports the server-assigned id.
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, UploadError>;
}

#[derive(Deserialize)]
struct UploadResponse {
    id: Option<serde_json::Value>,
}

/// Multipart POST to a fixed endpoint.
#[derive(Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUploader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn build_form(request: UploadRequest) -> Result<Form, UploadError> {
        let bytes = tokio::fs::read(&request.file.path)
            .await
            .map_err(|source| UploadError::ReadFile {
                path: request.file.path.clone(),
                source,
            })?;

        let mime = media::mime_for_path(&request.file.path);
        let part = Part::bytes(bytes)
            .file_name(request.file.file_name.clone())
            .mime_str(mime.essence_str())
            .map_err(|source| UploadError::InvalidMime {
                mime: mime.to_string(),
                source,
            })?;

        Ok(Form::new()
            .part("file", part)
            .text("user_email", request.user_email)
            .text("name", request.name)
            .text("description", request.description))
    }
}

#[async_trait]
impl UploadTransport for HttpUploader {
    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, UploadError> {
        tracing::info!(
            "Uploading '{}' ({} bytes) to {}",
            request.file.file_name,
            request.file.size,
            self.endpoint
        );
        let form = Self::build_form(request).await?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status(status));
        }

        let body = response.bytes().await?;
        parse_receipt(&body)
    }
}

/// Reads the `id` out of a success body. A string id is kept as-is, any
/// other JSON value is rendered in its JSON form.
pub fn parse_receipt(body: &[u8]) -> Result<UploadReceipt, UploadError> {
    let response: UploadResponse =
        serde_json::from_slice(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

    match response.id {
        Some(serde_json::Value::String(id)) => Ok(UploadReceipt { id }),
        Some(serde_json::Value::Null) | None => Err(UploadError::InvalidResponse(
            "response has no id".to_string(),
        )),
        Some(other) => Ok(UploadReceipt {
            id: other.to_string(),
        }),
    }
}
