// Application state and operations
pub mod app;

// Chat transcript state
pub mod chat;

// TUI rendering
pub mod ui;
