//! Conversion engine.
//!
//! Every conversion is chained through the category base unit:
//! `from --to_base--> base --from_base--> to`.

use crate::{Category, CoreError, CoreResult, Real, Unit, ensure_finite, registry};

/// Express `value` (in `unit`) in the base unit of its category.
pub fn to_base(unit: Unit, value: Real) -> Real {
    unit.rule().to_base(value)
}

/// Express a base-unit value in `unit`.
pub fn from_base(unit: Unit, base: Real) -> Real {
    unit.rule().from_base(base)
}

/// Convert `value` from `from` to `to`, both of which must belong to `category`.
///
/// Converting a unit to itself returns `value` untouched, so no rounding is
/// introduced by the trip through the base unit.
pub fn convert(category: Category, from: Unit, to: Unit, value: Real) -> CoreResult<Real> {
    ensure_member(category, from)?;
    ensure_member(category, to)?;
    let value = ensure_finite(value, "conversion input")?;

    if from == to {
        return Ok(value);
    }

    let base = to_base(from, value);
    ensure_finite(from_base(to, base), "conversion output")
}

/// Name-based entry point: resolves both labels within `category` and converts.
pub fn convert_named(category: Category, from: &str, to: &str, value: Real) -> CoreResult<Real> {
    let from = registry::lookup(category, from)?;
    let to = registry::lookup(category, to)?;
    convert(category, from, to, value)
}

fn ensure_member(category: Category, unit: Unit) -> CoreResult<()> {
    if category.contains(unit) {
        Ok(())
    } else {
        Err(CoreError::InvalidUnit {
            category,
            unit: unit.label().to_string(),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn category_and_two_units() -> impl Strategy<Value = (Category, Unit, Unit)> {
        prop::sample::select(Category::ALL.to_vec()).prop_flat_map(|c| {
            let units = c.units().to_vec();
            (
                Just(c),
                prop::sample::select(units.clone()),
                prop::sample::select(units),
            )
        })
    }

    proptest! {
        #[test]
        fn same_unit_is_exact_identity(
            (c, u, _) in category_and_two_units(),
            v in -1.0e9_f64..1.0e9_f64,
        ) {
            prop_assert_eq!(convert(c, u, u, v).unwrap(), v);
        }

        #[test]
        fn round_trip_returns_input(
            (c, a, b) in category_and_two_units(),
            v in -1.0e6_f64..1.0e6_f64,
        ) {
            let there = convert(c, a, b, v).unwrap();
            let back = convert(c, b, a, there).unwrap();
            prop_assert!(nearly_equal(back, v, Tolerances::default()), "{v} -> {there} -> {back}");
        }
    }
}
