use crate::upload::{UploadError, UploadReceipt};
use std::sync::mpsc::Receiver;

pub const NOT_AUTHENTICATED_MESSAGE: &str = "User not authenticated. Please sign in.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InProgress,
    Success {
        id: String,
    },
    Failure {
        reason: String,
    },
}

impl SubmissionStatus {
    /// Inline message shown under the form. Empty while idle or in progress.
    pub fn message(&self) -> String {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::InProgress => String::new(),
            SubmissionStatus::Success { id } => format!("Upload successful! Video ID: {}", id),
            SubmissionStatus::Failure { reason } => reason.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success { .. })
    }
}

pub type UploadOutcome = Result<UploadReceipt, UploadError>;

#[derive(Default)]
pub struct UploadState {
    pub status: SubmissionStatus,
    pub is_uploading: bool,
    pub outcome_receiver: Option<Receiver<UploadOutcome>>,
}

impl UploadState {
    pub fn begin(&mut self, receiver: Receiver<UploadOutcome>) {
        self.status = SubmissionStatus::InProgress;
        self.is_uploading = true;
        self.outcome_receiver = Some(receiver);
    }

    pub fn fail(&mut self, reason: &str) {
        self.status = SubmissionStatus::Failure {
            reason: reason.to_string(),
        };
    }

    /// Records the worker's answer and drops back out of the in-progress state.
    pub fn finish(&mut self, outcome: UploadOutcome) {
        self.status = match outcome {
            Ok(receipt) => SubmissionStatus::Success { id: receipt.id },
            Err(_) => SubmissionStatus::Failure {
                reason: UPLOAD_FAILED_MESSAGE.to_string(),
            },
        };
        self.is_uploading = false;
        self.outcome_receiver = None;
    }

    pub fn message(&self) -> String {
        self.status.message()
    }
}
