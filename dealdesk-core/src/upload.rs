//! Simulated document upload
//!
//! There is no real transfer. A submitted file is validated against an
//! accept-list, then a background task sleeps for the configured latency and
//! delivers a pre-drawn outcome over a channel. The event loop polls the
//! widget each tick, the same way the app polls chat replies.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;

/// Accept anything a borrower would reasonably attach.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "jpg", "jpeg", "png"];

/// Credit memos are document-format only.
pub const MEMO_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Simulated transfer time.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Demo success rate for the random outcome source.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

/// What the file picker hands over: a name, a declared MIME type and a
/// size. File contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileRef {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Lowercased extension, if the name has one.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("a file is already selected; clear it before picking another")]
    AlreadySelected,
}

/// Extension allow-list for one upload surface
#[derive(Debug, Clone)]
pub struct AcceptList {
    extensions: Vec<String>,
}

impl AcceptList {
    pub fn new(extensions: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
        }
    }

    pub fn documents() -> Self {
        Self::new(DOCUMENT_EXTENSIONS)
    }

    pub fn memos() -> Self {
        Self::new(MEMO_EXTENSIONS)
    }

    /// A file passes when its extension is listed, or its declared MIME
    /// subtype matches a listed extension (e.g. "application/pdf").
    pub fn permits(&self, file: &FileRef) -> Result<(), UploadError> {
        if let Some(ext) = file.extension() {
            if self.extensions.iter().any(|e| *e == ext) {
                return Ok(());
            }
        }

        let mime = file.mime_type.to_ascii_lowercase();
        if let Some(subtype) = mime.rsplit('/').next() {
            if !subtype.is_empty() && self.extensions.iter().any(|e| *e == subtype) {
                return Ok(());
            }
        }

        Err(UploadError::UnsupportedType(
            file.extension().unwrap_or_else(|| file.mime_type.clone()),
        ))
    }
}

/// Status of one upload widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

/// Terminal result of a simulated transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Delivered,
    Failed,
}

/// Source of simulated transfer outcomes. Injected so tests can force a
/// deterministic result instead of sampling.
pub trait OutcomeSource: Send {
    fn draw(&mut self) -> UploadOutcome;
}

/// Production source: succeed with the configured probability.
pub struct RandomOutcomes {
    success_rate: f64,
}

impl RandomOutcomes {
    pub fn new(success_rate: f64) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }
}

impl OutcomeSource for RandomOutcomes {
    fn draw(&mut self) -> UploadOutcome {
        use rand::Rng;
        if rand::thread_rng().gen_bool(self.success_rate) {
            UploadOutcome::Delivered
        } else {
            UploadOutcome::Failed
        }
    }
}

/// Deterministic source for tests and forced demos.
pub struct FixedOutcomes {
    outcome: UploadOutcome,
}

impl FixedOutcomes {
    pub fn new(outcome: UploadOutcome) -> Self {
        Self { outcome }
    }
}

impl OutcomeSource for FixedOutcomes {
    fn draw(&mut self) -> UploadOutcome {
        self.outcome
    }
}

/// Completion message delivered after the simulated latency
#[derive(Debug)]
pub struct UploadCompletion {
    pub file: FileRef,
    pub outcome: UploadOutcome,
}

/// Validates submissions and runs the delayed fake transfer.
pub struct UploadSimulator {
    accept: AcceptList,
    latency: Duration,
    outcomes: Box<dyn OutcomeSource>,
}

impl UploadSimulator {
    pub fn new(accept: AcceptList, latency: Duration, outcomes: Box<dyn OutcomeSource>) -> Self {
        Self {
            accept,
            latency,
            outcomes,
        }
    }

    /// Simulator with the stock document accept-list and demo policy.
    pub fn documents(success_rate: f64, latency: Duration) -> Self {
        Self::new(
            AcceptList::documents(),
            latency,
            Box::new(RandomOutcomes::new(success_rate)),
        )
    }

    /// Simulator with the memo accept-list and demo policy.
    pub fn memos(success_rate: f64, latency: Duration) -> Self {
        Self::new(
            AcceptList::memos(),
            latency,
            Box::new(RandomOutcomes::new(success_rate)),
        )
    }

    /// Validate a file and start the fake transfer. The outcome is drawn up
    /// front and arrives on the returned channel after the latency elapses.
    /// Validation failure is synchronous and starts nothing.
    pub fn begin(
        &mut self,
        file: FileRef,
        handle: &tokio::runtime::Handle,
    ) -> Result<mpsc::UnboundedReceiver<UploadCompletion>, UploadError> {
        self.accept.permits(&file)?;

        let outcome = self.outcomes.draw();
        let latency = self.latency;
        let (tx, rx) = mpsc::unbounded_channel();

        handle.spawn(async move {
            tokio::time::sleep(latency).await;
            let _ = tx.send(UploadCompletion { file, outcome });
        });

        Ok(rx)
    }
}

/// One event reported by a widget poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    Completed(FileRef),
    Failed(FileRef),
}

/// State machine behind one upload surface: selected file, status and the
/// pending completion channel. Clearing the widget while a transfer is in
/// flight drops the channel, so a late completion is ignored.
#[derive(Default)]
pub struct UploadWidget {
    pub file: Option<FileRef>,
    pub status: UploadStatus,
    pending: Option<mpsc::UnboundedReceiver<UploadCompletion>>,
}

impl UploadWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a file. On accept the widget moves to `Uploading`; on a
    /// validation failure nothing changes and the error is returned.
    pub fn select(
        &mut self,
        file: FileRef,
        simulator: &mut UploadSimulator,
        handle: &tokio::runtime::Handle,
    ) -> Result<(), UploadError> {
        if self.file.is_some() {
            return Err(UploadError::AlreadySelected);
        }

        let rx = simulator.begin(file.clone(), handle)?;
        self.file = Some(file);
        self.status = UploadStatus::Uploading;
        self.pending = Some(rx);
        Ok(())
    }

    /// Poll the pending transfer. Reports at most one event per submission.
    pub fn poll(&mut self) -> Option<UploadEvent> {
        let rx = self.pending.as_mut()?;
        match rx.try_recv() {
            Ok(completion) => {
                self.pending = None;
                match completion.outcome {
                    UploadOutcome::Delivered => {
                        self.status = UploadStatus::Success;
                        Some(UploadEvent::Completed(completion.file))
                    }
                    UploadOutcome::Failed => {
                        self.status = UploadStatus::Error;
                        Some(UploadEvent::Failed(completion.file))
                    }
                }
            }
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.pending = None;
                self.status = UploadStatus::Error;
                None
            }
        }
    }

    /// Drop the selection and return to `Idle` so another file can be
    /// picked. The only cancellation the reference behavior offers.
    pub fn clear(&mut self) {
        self.file = None;
        self.status = UploadStatus::Idle;
        self.pending = None;
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }
}
