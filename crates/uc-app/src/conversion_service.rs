//! Validated conversions from raw user input.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uc_core::{Category, Real, Unit, registry};

use crate::error::AppResult;
use crate::format::format_result;
use crate::input::parse_value;

/// A completed conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    pub input: Real,
    pub output: Real,
}

impl Conversion {
    /// Result line with `decimals` places on both numbers.
    pub fn display(&self, decimals: usize) -> String {
        format_result(self.input, self.from, self.output, self.to, decimals)
    }

    /// Pretty-printed JSON with units written as their labels.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Validate `text`, then convert it from `from` to `to` within `category`.
pub fn convert_text(category: Category, from: Unit, to: Unit, text: &str) -> AppResult<Conversion> {
    let input = parse_value(text)?;
    let output = uc_core::convert(category, from, to, input)?;
    debug!(%category, %from, %to, input, output, "converted");
    Ok(Conversion {
        category,
        from,
        to,
        input,
        output,
    })
}

/// Same as [`convert_text`] but with category and units given by display label.
pub fn convert_labels(category: &str, from: &str, to: &str, text: &str) -> AppResult<Conversion> {
    let category: Category = category.parse()?;
    let from = registry::lookup(category, from)?;
    let to = registry::lookup(category, to)?;
    convert_text(category, from, to, text)
}
