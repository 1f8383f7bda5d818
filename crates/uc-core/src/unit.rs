//! Units and their conversion rules.

use crate::{Category, Real, registry};
use std::fmt;

/// Every unit the converter knows about.
///
/// Display labels are kept separate from the variant names so selectors can
/// show "cm" while code says `Centimeter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    // Length
    Inch,
    Foot,
    Yard,
    Mile,
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeter,
    #[cfg_attr(feature = "serde", serde(rename = "km"))]
    Kilometer,
    // Weight
    Pound,
    Ounce,
    Ton,
    #[cfg_attr(feature = "serde", serde(rename = "kg"))]
    Kilogram,
    #[cfg_attr(feature = "serde", serde(rename = "g"))]
    Gram,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Self::Inch => "Inch",
            Self::Foot => "Foot",
            Self::Yard => "Yard",
            Self::Mile => "Mile",
            Self::Centimeter => "cm",
            Self::Kilometer => "km",
            Self::Pound => "Pound",
            Self::Ounce => "Ounce",
            Self::Ton => "Ton",
            Self::Kilogram => "kg",
            Self::Gram => "g",
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        }
    }

    pub fn category(self) -> Category {
        registry::category_of(self)
    }

    pub fn rule(self) -> ConversionRule {
        registry::rule(self)
    }

    pub fn is_base(self) -> bool {
        registry::base_unit(self.category()) == self
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a unit maps onto its category's base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionRule {
    /// `base = value * factor`
    Factor(Real),
    /// `base = (value - offset) / scale`, inverse `value = base * scale + offset`
    Affine { scale: Real, offset: Real },
}

impl ConversionRule {
    pub const IDENTITY: ConversionRule = ConversionRule::Factor(1.0);

    #[inline]
    pub fn to_base(self, value: Real) -> Real {
        match self {
            Self::Factor(factor) => value * factor,
            Self::Affine { scale, offset } => (value - offset) / scale,
        }
    }

    #[inline]
    pub fn from_base(self, base: Real) -> Real {
        match self {
            Self::Factor(factor) => base / factor,
            Self::Affine { scale, offset } => base * scale + offset,
        }
    }

    pub fn is_identity(self) -> bool {
        match self {
            Self::Factor(factor) => factor == 1.0,
            Self::Affine { scale, offset } => scale == 1.0 && offset == 0.0,
        }
    }
}
