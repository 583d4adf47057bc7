//! File picker overlay
//!
//! The closest a terminal gets to the browser's file input: browse the real
//! filesystem, fuzzy-filter by name, pick a file. Only the name and size are
//! taken from the picked path; contents are never read.

use std::path::Path;

use dealdesk_core::FileRef;

use super::*;

/// Build a `FileRef` from a real path. The MIME type is guessed from the
/// extension; unknown extensions get the generic binary type so the
/// accept-list rejects them by extension alone.
pub fn file_ref_from_path(path: &Path) -> FileRef {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    };

    let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    FileRef::new(name, mime, size)
}

impl App {
    /// Open the picker; the chosen file will be submitted to `target`.
    pub fn open_file_picker(&mut self, target: UploadTarget) {
        self.upload_target = Some(target);
        self.show_file_browser = true;
        self.file_browser_search.clear();
        self.load_file_browser_items();
    }

    pub fn close_file_picker(&mut self) {
        self.show_file_browser = false;
        self.file_browser_items.clear();
        self.file_browser_selected = 0;
        self.file_browser_search.clear();
        self.upload_target = None;
    }

    pub fn load_file_browser_items(&mut self) {
        let mut items = Vec::new();

        // Parent directory first
        if let Some(parent) = self.current_dir.parent() {
            items.push(parent.to_path_buf());
        }

        if let Ok(entries) = std::fs::read_dir(&self.current_dir) {
            for entry in entries.flatten() {
                items.push(entry.path());
            }
        }

        // Sort: directories first, then files
        items.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.file_name().cmp(&b.file_name()),
        });

        self.file_browser_items = items;
        self.file_browser_selected = 0;
    }

    pub fn file_browser_next(&mut self) {
        if self.file_browser_selected < self.file_browser_items.len().saturating_sub(1) {
            self.file_browser_selected += 1;
        }
    }

    pub fn file_browser_previous(&mut self) {
        if self.file_browser_selected > 0 {
            self.file_browser_selected -= 1;
        }
    }

    /// Descend into a directory or pick a file and submit it.
    pub fn file_browser_select(&mut self) {
        let Some(path) = self
            .file_browser_items
            .get(self.file_browser_selected)
            .cloned()
        else {
            return;
        };

        if path.is_dir() {
            self.current_dir = path;
            self.file_browser_search.clear();
            self.load_file_browser_items();
            return;
        }

        let file = file_ref_from_path(&path);
        let target = self.upload_target;
        self.close_file_picker();

        if let Some(target) = target {
            self.submit_upload(target, file);
        }
    }
}
