mod client;
mod error;
pub mod media;
mod types;

pub use client::{parse_receipt, HttpUploader, UploadTransport};
pub use error::UploadError;
pub use types::{strip_extension, PendingUpload, SelectedFile, UploadReceipt, UploadRequest};
