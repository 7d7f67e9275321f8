//! # Ledger Terminal - Library Root
//!
//! Native desktop client for a remote append-only ledger service. The
//! service owns all ledger state; this crate keeps a local view of it in
//! sync and lets an operator submit transactions, trigger mining, and
//! search recorded transactions.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              ledger-terminal (this crate)              │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  Tokio         - Poll loop and mutation tasks          │
//! │  Reqwest       - HTTP client                           │
//! │  tracing       - Structured file logging               │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON
//!          ▼
//! ┌──────────────────────────────────────┐
//! │  Ledger service                      │
//! │  GET /view  POST /tx  POST /mine     │
//! │  GET /search?q=                      │
//! └──────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: session, view store, poll scheduler, mutation coordinator,
//!   search executor
//! - **config**: [`AppConfig`] from environment
//! - **core**: [`AppError`] and the [`LedgerService`] transport seam
//! - **debug**: logging setup
//! - **services**: HTTP implementation of [`LedgerService`]
//! - **ui**: view model projection and egui rendering
//! - **utils**: input validation
//!
//! ## Usage
//!
//! ```bash
//! LEDGER_API_URL=http://localhost:8080 cargo run --bin ledger-terminal
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p ledger-terminal
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, Connectivity, InteractionState, ViewSnapshot, ViewState};
pub use config::AppConfig;
pub use core::{AppError, LedgerService, Result};
