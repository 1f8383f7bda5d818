// uc-core/src/si.rs

use crate::{Category, CoreError, CoreResult, Real, Unit, convert::to_base};
use uom::si::f64::{
    Length as UomLength, Mass as UomMass,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Typed SI quantities (f64) for callers that want dimension checking
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn cm(v: Real) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn kg(v: Real) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn deg_c(v: Real) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// `value` in a length unit as a typed length.
pub fn length(value: Real, unit: Unit) -> CoreResult<Length> {
    expect_category(Category::Length, unit)?;
    Ok(cm(to_base(unit, value)))
}

/// `value` in a weight unit as a typed mass.
pub fn mass(value: Real, unit: Unit) -> CoreResult<Mass> {
    expect_category(Category::Weight, unit)?;
    Ok(kg(to_base(unit, value)))
}

/// `value` in a temperature unit as a typed thermodynamic temperature.
pub fn temperature(value: Real, unit: Unit) -> CoreResult<Temperature> {
    expect_category(Category::Temperature, unit)?;
    Ok(deg_c(to_base(unit, value)))
}

/// `value` in `unit` expressed in the SI base unit of its category (m, kg, K),
/// paired with that unit's symbol.
pub fn si_value(value: Real, unit: Unit) -> CoreResult<(Real, &'static str)> {
    use uom::si::length::meter;
    use uom::si::mass::kilogram;
    use uom::si::thermodynamic_temperature::kelvin;

    Ok(match unit.category() {
        Category::Length => (length(value, unit)?.get::<meter>(), "m"),
        Category::Weight => (mass(value, unit)?.get::<kilogram>(), "kg"),
        Category::Temperature => (temperature(value, unit)?.get::<kelvin>(), "K"),
    })
}

fn expect_category(category: Category, unit: Unit) -> CoreResult<()> {
    if unit.category() == category {
        Ok(())
    } else {
        Err(CoreError::InvalidUnit {
            category,
            unit: unit.label().to_string(),
        })
    }
}
