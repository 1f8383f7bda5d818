//! State of the single converter screen.
//!
//! Frontends own one `ConverterForm`, bind their widgets to it, and call
//! [`ConverterForm::submit`] when the user asks for a conversion.

use tracing::debug;
use uc_core::{Category, CoreError, Unit};

use crate::conversion_service::{Conversion, convert_text};
use crate::error::{AppError, AppResult};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct ConverterForm {
    category: Category,
    from: Unit,
    to: Unit,
    /// Raw text of the value field.
    pub input: String,
    result_text: String,
    error_text: String,
    decimals: usize,
}

/// Initial (from, to) selection for a category: first and second unit.
pub fn default_units(category: Category) -> (Unit, Unit) {
    let units = category.units();
    let from = units[0];
    let to = units.get(1).copied().unwrap_or(from);
    (from, to)
}

impl ConverterForm {
    pub fn new(settings: &Settings) -> Self {
        let category = settings.default_category;
        let (from, to) = default_units(category);
        Self {
            category,
            from,
            to,
            input: String::new(),
            result_text: String::new(),
            error_text: String::new(),
            decimals: settings.decimals,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> Unit {
        self.from
    }

    pub fn to_unit(&self) -> Unit {
        self.to
    }

    /// Units offered by both unit selectors.
    pub fn units(&self) -> &'static [Unit] {
        self.category.units()
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Switch category. Selecting a different category resets both unit
    /// selectors to that category's defaults.
    pub fn select_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        debug!(%category, "category changed");
        self.category = category;
        (self.from, self.to) = default_units(category);
    }

    pub fn select_from(&mut self, unit: Unit) -> AppResult<()> {
        self.ensure_offered(unit)?;
        self.from = unit;
        Ok(())
    }

    pub fn select_to(&mut self, unit: Unit) -> AppResult<()> {
        self.ensure_offered(unit)?;
        self.to = unit;
        Ok(())
    }

    /// Run the conversion for the current selection and input text.
    ///
    /// The previous error is cleared first. On success the result line is
    /// replaced; on failure only the error line is set and the previous
    /// result line is left as it was.
    pub fn submit(&mut self) -> AppResult<Conversion> {
        self.error_text.clear();
        match convert_text(self.category, self.from, self.to, &self.input) {
            Ok(conversion) => {
                self.result_text = conversion.display(self.decimals);
                Ok(conversion)
            }
            Err(err) => {
                self.error_text = err.user_message();
                Err(err)
            }
        }
    }

    fn ensure_offered(&self, unit: Unit) -> AppResult<()> {
        if self.category.contains(unit) {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::InvalidUnit {
                category: self.category,
                unit: unit.label().to_string(),
            }))
        }
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let form = ConverterForm::default();
        assert_eq!(form.category(), Category::Length);
        assert_eq!(form.from_unit(), Unit::Inch);
        assert_eq!(form.to_unit(), Unit::Foot);
        assert!(form.result_text().is_empty());
        assert!(form.error_text().is_empty());
    }

    #[test]
    fn settings_choose_initial_category() {
        let settings = Settings {
            default_category: Category::Temperature,
            ..Settings::default()
        };
        let form = ConverterForm::new(&settings);
        assert_eq!(form.from_unit(), Unit::Celsius);
        assert_eq!(form.to_unit(), Unit::Fahrenheit);
    }

    #[test]
    fn category_change_resets_units() {
        let mut form = ConverterForm::default();
        form.select_to(Unit::Kilometer).unwrap();
        form.select_category(Category::Weight);
        assert_eq!(form.from_unit(), Unit::Pound);
        assert_eq!(form.to_unit(), Unit::Ounce);
        assert_eq!(form.units().len(), 5);
    }

    #[test]
    fn reselecting_same_category_keeps_units() {
        let mut form = ConverterForm::default();
        form.select_from(Unit::Mile).unwrap();
        form.select_category(Category::Length);
        assert_eq!(form.from_unit(), Unit::Mile);
    }

    #[test]
    fn units_outside_category_cannot_be_selected() {
        let mut form = ConverterForm::default();
        assert!(form.select_from(Unit::Kelvin).is_err());
        assert_eq!(form.from_unit(), Unit::Inch);
    }

    #[test]
    fn empty_input_keeps_previous_result() {
        let mut form = ConverterForm::default();
        form.select_to(Unit::Inch).unwrap();
        form.input = "5".into();
        form.submit().unwrap();
        assert_eq!(form.result_text(), "5.00 Inch = 5.00 Inch");

        form.input.clear();
        assert!(matches!(form.submit(), Err(AppError::EmptyInput)));
        assert_eq!(form.error_text(), "Please enter a value");
        assert_eq!(form.result_text(), "5.00 Inch = 5.00 Inch");
    }

    #[test]
    fn successful_submit_clears_error() {
        let mut form = ConverterForm::default();
        form.input = "abc".into();
        assert!(form.submit().is_err());
        assert_eq!(form.error_text(), "Please enter a valid number");

        form.select_category(Category::Weight);
        form.select_to(Unit::Kilogram).unwrap();
        form.input = "10".into();
        form.submit().unwrap();
        assert!(form.error_text().is_empty());
        assert_eq!(form.result_text(), "10.00 Pound = 4.54 kg");
    }
}
