mod state;
mod ui;

use crate::session::SessionProvider;
use crate::upload::{
    media, PendingUpload, SelectedFile, UploadError, UploadRequest, UploadTransport,
};
use eframe::{egui, App};
pub use state::{
    SubmissionStatus, UploadOutcome, UploadState, NOT_AUTHENTICATED_MESSAGE, UPLOAD_FAILED_MESSAGE,
};
use std::path::Path;
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The upload form: one pending file, one request in flight at most.
pub struct MediaUploader {
    pending: PendingUpload,
    state: UploadState,
    session: Arc<dyn SessionProvider>,
    transport: Arc<dyn UploadTransport>,
}

impl MediaUploader {
    pub fn new(session: Arc<dyn SessionProvider>, transport: Arc<dyn UploadTransport>) -> Self {
        Self {
            pending: PendingUpload::default(),
            state: UploadState::default(),
            session,
            transport,
        }
    }

    pub fn pending(&self) -> &PendingUpload {
        &self.pending
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.state.status
    }

    pub fn message(&self) -> String {
        self.state.message()
    }

    pub fn is_uploading(&self) -> bool {
        self.state.is_uploading
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.pending.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.pending.description = description.into();
    }

    /// Submit stays disabled while a request is outstanding or nothing is selected.
    pub fn can_submit(&self) -> bool {
        !self.state.is_uploading && self.pending.file.is_some()
    }

    /// The dialog filter only suggests media files; any readable file the
    /// user ends up picking is taken.
    pub fn select_file(&mut self, path: &Path) {
        if !media::is_supported_file(path) {
            tracing::warn!("{} is not a video or image; uploading anyway", path.display());
        }
        match SelectedFile::from_path(path) {
            Ok(file) => self.select(file),
            Err(e) => tracing::warn!("Could not read selected file {}: {}", path.display(), e),
        }
    }

    pub fn select(&mut self, file: SelectedFile) {
        tracing::debug!("Selected '{}' ({} bytes)", file.file_name, file.size);
        self.pending.select(file);
    }

    pub fn submit(&mut self) {
        if self.state.is_uploading {
            return;
        }
        let Some(file) = self.pending.file.clone() else {
            return;
        };

        let Some(user_email) = self.session.user_email() else {
            tracing::warn!("Upload refused: no signed-in user");
            self.state.fail(NOT_AUTHENTICATED_MESSAGE);
            return;
        };

        let request = UploadRequest {
            file,
            user_email,
            name: self.pending.name.clone(),
            description: self.pending.description.clone(),
        };

        let (sender, receiver) = mpsc::channel();
        self.state.begin(receiver);

        let transport = Arc::clone(&self.transport);
        let spawned = std::thread::Builder::new()
            .name("upload-worker".to_string())
            .spawn(move || {
                let outcome = match tokio::runtime::Runtime::new() {
                    Ok(rt) => rt.block_on(transport.upload(request)),
                    Err(e) => Err(UploadError::WorkerUnavailable(e.to_string())),
                };
                // The form may be gone by now; nobody to tell.
                let _ = sender.send(outcome);
            });

        if let Err(e) = spawned {
            self.complete(Err(UploadError::WorkerUnavailable(e.to_string())));
        }
    }

    /// Picks up the worker's answer if it has arrived. Returns true when the
    /// form changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.state.outcome_receiver else {
            return false;
        };
        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(UploadError::WorkerUnavailable(
                "worker stopped without reporting".to_string(),
            )),
        };
        self.complete(outcome);
        true
    }

    fn complete(&mut self, outcome: UploadOutcome) {
        match &outcome {
            Ok(receipt) => tracing::info!("Upload finished with id {}", receipt.id),
            Err(e) => tracing::error!("Upload error: {}", e),
        }
        self.state.finish(outcome);
        self.pending.clear();
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.poll() {
            ctx.request_repaint();
        }
        if self.state.is_uploading {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

impl App for MediaUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
