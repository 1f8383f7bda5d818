//! Raw numeric text validation.

use tracing::debug;
use uc_core::Real;

use crate::error::{AppError, AppResult};

/// Parse the text of the value field.
///
/// Surrounding whitespace is ignored. Empty text and text that is not a
/// finite real number are rejected before anything reaches the engine.
pub fn parse_value(text: &str) -> AppResult<Real> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        debug!("rejected empty value");
        return Err(AppError::EmptyInput);
    }

    match trimmed.parse::<Real>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => {
            debug!(input = trimmed, "rejected non-numeric value");
            Err(AppError::InvalidNumber {
                input: trimmed.to_string(),
            })
        }
    }
}
