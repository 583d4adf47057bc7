//! Borrower dashboard state

use dealdesk_core::upload::UploadWidget;

/// Number of required document uploads before the to-do item completes.
pub const REQUIRED_DOCUMENTS: usize = 3;

/// Detail panel opened from the to-do list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    UploadDocuments,
    VerifyInformation,
    SignAgreements,
}

impl DashboardPanel {
    pub fn from_task_id(id: &str) -> Option<Self> {
        match id {
            "upload-documents" => Some(DashboardPanel::UploadDocuments),
            "verify-information" => Some(DashboardPanel::VerifyInformation),
            "sign-agreements" => Some(DashboardPanel::SignAgreements),
            _ => None,
        }
    }
}

/// One required upload box on the dashboard
pub struct DashboardSlot {
    pub title: &'static str,
    pub description: &'static str,
    pub widget: UploadWidget,
}

impl DashboardSlot {
    fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            widget: UploadWidget::new(),
        }
    }
}

pub fn dashboard_slots() -> Vec<DashboardSlot> {
    vec![
        DashboardSlot::new(
            "Proof of Income",
            "Upload your most recent pay stub, W-2, or tax return document.",
        ),
        DashboardSlot::new(
            "Identity Verification",
            "Upload a valid government-issued ID (passport, driver's license).",
        ),
        DashboardSlot::new(
            "Additional Documentation",
            "Upload any supplemental files for to-do list items.",
        ),
    ]
}
