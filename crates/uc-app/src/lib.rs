//! Shared application service layer for the unit converter.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing input validation, conversion, result formatting, converter
//! form state, and settings loading.

pub mod conversion_service;
pub mod error;
pub mod form;
pub mod format;
pub mod input;
pub mod settings;

// Re-export key types for convenience
pub use conversion_service::{Conversion, convert_labels, convert_text};
pub use error::{AppError, AppResult};
pub use form::ConverterForm;
pub use format::format_result;
pub use input::parse_value;
pub use settings::{MAX_DECIMALS, Settings, load_settings, parse_settings};
