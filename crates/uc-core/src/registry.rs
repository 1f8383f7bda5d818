//! Static unit taxonomy.
//!
//! Each category owns an ordered unit list (order = display order) and a base
//! unit through which every conversion is chained. All data is compiled in;
//! nothing here can change at runtime.

use crate::{Category, ConversionRule, CoreError, CoreResult, Unit};

const LENGTH_UNITS: [Unit; 6] = [
    Unit::Inch,
    Unit::Foot,
    Unit::Yard,
    Unit::Mile,
    Unit::Centimeter,
    Unit::Kilometer,
];

const WEIGHT_UNITS: [Unit; 5] = [
    Unit::Pound,
    Unit::Ounce,
    Unit::Ton,
    Unit::Kilogram,
    Unit::Gram,
];

const TEMPERATURE_UNITS: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

/// Categories in display order.
pub fn categories() -> &'static [Category] {
    &Category::ALL
}

/// Units of `category` in display order. Never empty.
pub fn units_for(category: Category) -> &'static [Unit] {
    match category {
        Category::Length => &LENGTH_UNITS,
        Category::Weight => &WEIGHT_UNITS,
        Category::Temperature => &TEMPERATURE_UNITS,
    }
}

pub fn base_unit(category: Category) -> Unit {
    match category {
        Category::Length => Unit::Centimeter,
        Category::Weight => Unit::Kilogram,
        Category::Temperature => Unit::Celsius,
    }
}

pub fn category_of(unit: Unit) -> Category {
    match unit {
        Unit::Inch
        | Unit::Foot
        | Unit::Yard
        | Unit::Mile
        | Unit::Centimeter
        | Unit::Kilometer => Category::Length,
        Unit::Pound | Unit::Ounce | Unit::Ton | Unit::Kilogram | Unit::Gram => Category::Weight,
        Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
    }
}

/// Conversion rule relating `unit` to its category base unit.
pub fn rule(unit: Unit) -> ConversionRule {
    use ConversionRule::{Affine, Factor};

    match unit {
        // Length, base cm
        Unit::Inch => Factor(2.54),
        Unit::Foot => Factor(30.48),
        Unit::Yard => Factor(91.44),
        Unit::Mile => Factor(160_934.0),
        Unit::Centimeter => ConversionRule::IDENTITY,
        Unit::Kilometer => Factor(100_000.0),
        // Weight, base kg
        Unit::Pound => Factor(0.453_592),
        Unit::Ounce => Factor(0.028_349_5),
        Unit::Ton => Factor(907.185),
        Unit::Kilogram => ConversionRule::IDENTITY,
        Unit::Gram => Factor(0.001),
        // Temperature, base Celsius
        Unit::Celsius => Affine {
            scale: 1.0,
            offset: 0.0,
        },
        Unit::Fahrenheit => Affine {
            scale: 1.8,
            offset: 32.0,
        },
        Unit::Kelvin => Affine {
            scale: 1.0,
            offset: 273.15,
        },
    }
}

/// Resolve a unit by display label within `category`.
///
/// Exact label match wins; otherwise a case-insensitive match is accepted.
/// Names are only unique per category, so the category is always required.
pub fn lookup(category: Category, name: &str) -> CoreResult<Unit> {
    let name = name.trim();
    let units = units_for(category);
    units
        .iter()
        .copied()
        .find(|u| u.label() == name)
        .or_else(|| {
            units
                .iter()
                .copied()
                .find(|u| u.label().eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| CoreError::InvalidUnit {
            category,
            unit: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_units() {
        for &c in categories() {
            assert!(!units_for(c).is_empty(), "{c} has no units");
        }
    }

    #[test]
    fn declared_display_order() {
        let labels: Vec<_> = units_for(Category::Length)
            .iter()
            .map(|u| u.label())
            .collect();
        assert_eq!(labels, ["Inch", "Foot", "Yard", "Mile", "cm", "km"]);

        let labels: Vec<_> = units_for(Category::Weight)
            .iter()
            .map(|u| u.label())
            .collect();
        assert_eq!(labels, ["Pound", "Ounce", "Ton", "kg", "g"]);

        let labels: Vec<_> = units_for(Category::Temperature)
            .iter()
            .map(|u| u.label())
            .collect();
        assert_eq!(labels, ["Celsius", "Fahrenheit", "Kelvin"]);
    }

    #[test]
    fn labels_unique_within_category() {
        for &c in categories() {
            let labels: HashSet<_> = units_for(c).iter().map(|u| u.label()).collect();
            assert_eq!(labels.len(), units_for(c).len());
        }
    }

    #[test]
    fn every_unit_belongs_to_its_listing_category() {
        for &c in categories() {
            for &u in units_for(c) {
                assert_eq!(category_of(u), c);
            }
        }
    }

    #[test]
    fn base_units_have_identity_rules() {
        for &c in categories() {
            let base = base_unit(c);
            assert!(units_for(c).contains(&base));
            assert!(rule(base).is_identity(), "{base} is not identity");
        }
        assert_eq!(base_unit(Category::Length), Unit::Centimeter);
        assert_eq!(base_unit(Category::Weight), Unit::Kilogram);
        assert_eq!(base_unit(Category::Temperature), Unit::Celsius);
    }

    #[test]
    fn temperature_rules_are_affine() {
        for &u in units_for(Category::Temperature) {
            assert!(matches!(rule(u), ConversionRule::Affine { .. }));
        }
    }

    #[test]
    fn lookup_is_scoped_to_category() {
        assert_eq!(lookup(Category::Weight, "Ton").unwrap(), Unit::Ton);
        assert_eq!(lookup(Category::Length, "KM").unwrap(), Unit::Kilometer);
        assert_eq!(
            lookup(Category::Length, "Ton"),
            Err(CoreError::InvalidUnit {
                category: Category::Length,
                unit: "Ton".into(),
            })
        );
    }
}
