//! Validation utilities for operator input.
//!
//! Validation failures are silent at the UI: nothing is sent and nothing is
//! shown. The error values exist for logging.

use crate::core::error::{AppError, Result};

/// Trimmed transaction text, or a validation error when nothing is left.
pub fn validate_transaction_text(draft: &str) -> Result<&str> {
    let text = draft.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Transaction text is required".to_string()));
    }
    Ok(text)
}

/// Trimmed search query, or `None` when the query is blank.
///
/// A blank query is not an error: it means "clear the results".
pub fn normalize_query(query: &str) -> Option<&str> {
    let query = query.trim();
    (!query.is_empty()).then_some(query)
}
