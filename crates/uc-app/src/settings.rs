//! User settings loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uc_core::Category;

use crate::error::{AppError, AppResult};

/// Highest number of decimal places a result line may show.
pub const MAX_DECIMALS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Decimal places for both numbers in the result line.
    pub decimals: usize,
    /// Category selected when the converter opens.
    pub default_category: Category,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decimals: 2,
            default_category: Category::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> AppResult<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(AppError::InvalidSettings(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        Ok(())
    }

    /// YAML form, as accepted by [`parse_settings`].
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::SettingsWrite(e.to_string()))
    }

    pub fn with_decimals(mut self, decimals: usize) -> AppResult<Self> {
        self.decimals = decimals;
        self.validate()?;
        Ok(self)
    }
}

/// Parse settings from YAML text. Blank text yields the defaults.
pub fn parse_settings(yaml: &str) -> AppResult<Settings> {
    if yaml.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml::from_str(yaml)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from a YAML file.
pub fn load_settings(path: &Path) -> AppResult<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::SettingsFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_settings(&content)
}
