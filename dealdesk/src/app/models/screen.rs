//! Screen routing

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Borrower-facing dashboard
    Dashboard,
    /// Internal agent console
    Console,
}

/// Where a picked file should be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    /// Documents view of the agent console
    ConsoleDocument,
    /// Memo view of the agent console
    Memo,
    /// One of the required dashboard slots
    DashboardSlot(usize),
    /// The dashboard "additional documents" box
    DashboardExtra,
}
