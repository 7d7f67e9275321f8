//! # Utility Functions
//!
//! - **[`validation`]**: Operator input validation (transaction text, search queries)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers (hash formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
