//! Result line formatting.

use uc_core::{Real, Unit};

/// `"<input> <from> = <output> <to>"` with `decimals` places on both numbers.
pub fn format_result(input: Real, from: Unit, output: Real, to: Unit, decimals: usize) -> String {
    format!("{input:.decimals$} {from} = {output:.decimals$} {to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimals() {
        assert_eq!(
            format_result(5.0, Unit::Inch, 5.0, Unit::Inch, 2),
            "5.00 Inch = 5.00 Inch"
        );
        assert_eq!(
            format_result(10.0, Unit::Pound, 4.535_92, Unit::Kilogram, 2),
            "10.00 Pound = 4.54 kg"
        );
    }

    #[test]
    fn custom_precision() {
        assert_eq!(
            format_result(1.0, Unit::Mile, 1.609_34, Unit::Kilometer, 4),
            "1.0000 Mile = 1.6093 km"
        );
        assert_eq!(
            format_result(0.0, Unit::Celsius, 32.0, Unit::Fahrenheit, 0),
            "0 Celsius = 32 Fahrenheit"
        );
    }
}
