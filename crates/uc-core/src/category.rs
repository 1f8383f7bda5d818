//! Measurement categories.

use crate::{CoreError, Unit, registry};
use std::fmt;
use std::str::FromStr;

/// A measurement domain with its own set of convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Display label shown in selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
        }
    }

    /// Units of this category in display order.
    pub fn units(self) -> &'static [Unit] {
        registry::units_for(self)
    }

    pub fn base_unit(self) -> Unit {
        registry::base_unit(self)
    }

    /// True when `unit` belongs to this category.
    pub fn contains(self, unit: Unit) -> bool {
        unit.category() == self
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == name)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.label().eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| CoreError::InvalidCategory {
                name: name.to_string(),
            })
    }
}
