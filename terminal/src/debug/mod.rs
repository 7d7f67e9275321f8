//! # Logging Infrastructure
//!
//! File-based structured logging for the ledger terminal.
//!
//! - **File logging**: `logs/ledger-terminal.log.YYYY-MM-DD` (daily rotation)
//! - **Console**: warnings and errors on stderr
//! - **Panics**: logged with location before the default hook runs
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: filter (default `ledger_terminal=info,warn`)
//! - `LEDGER_LOG_DIR`: log directory (default `logs`)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize logging. Call once at startup before anything logs.
pub fn init() {
    init_logger();
}
