//! # Async Tasks
//!
//! - [`refresh`]: one view reconciliation, shared by the poller and the coordinator
//! - [`actions`]: spawns operator actions onto the tokio runtime so the UI thread never blocks

pub mod actions;
pub mod refresh;

pub use refresh::refresh_view;
