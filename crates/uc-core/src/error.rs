use crate::Category;
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown {category} unit: '{unit}'")]
    InvalidUnit { category: Category, unit: String },

    #[error("Unknown category: '{name}'")]
    InvalidCategory { name: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_unit_names_category_and_unit() {
        let err = CoreError::InvalidUnit {
            category: Category::Weight,
            unit: "Furlong".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Weight"));
        assert!(msg.contains("Furlong"));
    }
}
