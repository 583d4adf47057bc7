//! Data models for the application
//!
//! State containers for the two screens. All of it is owned by the single
//! `App` struct and lives only for the session.

mod app;
mod dashboard;
mod screen;

// Re-export all public types
pub use app::*;
pub use dashboard::*;
pub use screen::*;
