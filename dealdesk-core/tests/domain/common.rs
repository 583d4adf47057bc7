//! Shared fixtures for domain tests

use std::time::Duration;

use dealdesk_core::upload::{UploadEvent, UploadWidget};
use dealdesk_core::{Document, FileRef};

pub fn pdf_file(name: &str) -> FileRef {
    FileRef::new(name, "application/pdf", 48_213)
}

pub fn exe_file(name: &str) -> FileRef {
    FileRef::new(name, "application/x-msdownload", 1_024)
}

pub fn sample_document(name: &str) -> Document {
    Document::from_upload(&pdf_file(name))
}

/// Poll the widget until the delayed completion lands. Transfers in tests
/// use zero latency, so a short polling window is plenty.
pub fn wait_for_event(widget: &mut UploadWidget) -> Option<UploadEvent> {
    for _ in 0..200 {
        if let Some(event) = widget.poll() {
            return Some(event);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    None
}
