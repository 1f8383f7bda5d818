//! Error types for the uc-app service layer.

use std::path::PathBuf;
use uc_core::CoreError;

/// Application error type shared by the CLI and GUI.
///
/// The `Display` text of the input variants is the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please enter a value")]
    EmptyInput,

    #[error("Please enter a valid number")]
    InvalidNumber { input: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read settings file: {path}")]
    SettingsFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] serde_yaml::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Failed to serialize settings: {0}")]
    SettingsWrite(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Message suitable for the error line of a form or stderr.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True for errors caused by what the user typed or selected.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyInput | AppError::InvalidNumber { .. } | AppError::Core(_)
        )
    }
}

/// Result type for uc-app operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uc_core::Category;

    #[test]
    fn input_messages() {
        assert_eq!(AppError::EmptyInput.user_message(), "Please enter a value");
        let err = AppError::InvalidNumber {
            input: "abc".into(),
        };
        assert_eq!(err.user_message(), "Please enter a valid number");
    }

    #[test]
    fn core_errors_pass_through() {
        let err: AppError = CoreError::InvalidUnit {
            category: Category::Length,
            unit: "Ton".into(),
        }
        .into();
        assert!(err.is_input_error());
        assert_eq!(err.user_message(), "Unknown Length unit: 'Ton'");
    }

    #[test]
    fn settings_errors_are_not_input_errors() {
        assert!(!AppError::InvalidSettings("decimals".into()).is_input_error());
    }
}
