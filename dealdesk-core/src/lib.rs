// Application stage lifecycle
pub mod stage;

// Stage -> console view routing
pub mod views;

// Simulated document upload
pub mod upload;

// Keyword-scripted chat replies
pub mod script;

// Deal, document and spread data model
pub mod models;

pub use models::*;
pub use stage::{stage_progress, Stage, StageProgress, StageStatus};
pub use upload::{AcceptList, FileRef, UploadError, UploadSimulator, UploadStatus, UploadWidget};
pub use views::{default_view, views_for_stage, ConsoleView};
