//! Unit-aware text input for temperatures, pressures and mole fractions.
//!
//! Values are parsed from user text ("80C", "760 mmHg", "45%") into canonical
//! SI numbers. A bare number is read in the units of the Antoine tables:
//! °C for temperature, mmHg for pressure.

use std::fmt;
use sw_core::units::{Pressure, Temperature, atm, bar, k, kpa, mmhg, pa, psia};

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Mole fraction (canonical: 0-1)
    Fraction,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Fraction => write!(f, "Mole Fraction"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    ParseError(String),
    /// Unit not recognized for this quantity
    UnknownUnit { unit: String, quantity: Quantity },
    /// Unit not allowed for this quantity (plain "psi" needs "psia" or "psig")
    AmbiguousUnit { unit: String, reason: String },
    /// Value out of physical range (e.g., negative absolute temperature)
    OutOfRange { value: f64, reason: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "Unknown unit '{}' for {}", unit, quantity)
            }
            Self::AmbiguousUnit { unit, reason } => {
                write!(f, "Ambiguous unit '{}': {}", unit, reason)
            }
            Self::OutOfRange { value, reason } => {
                write!(f, "Value {} out of range: {}", value, reason)
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Parse a quantity value from user input text into canonical SI units.
///
/// - `raw_text`: User input (e.g., "80C", "1 atm", "50%")
/// - `quantity`: Dimension/quantity family for validation
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature_k(trimmed),
        Quantity::Pressure => parse_pressure_typed(trimmed).map(|p| p.value),
        Quantity::Fraction => parse_fraction(trimmed),
    }
}

/// Typed temperature from text.
pub fn parse_temperature(raw_text: &str) -> Result<Temperature, UnitError> {
    parse_temperature_k(raw_text.trim()).map(k)
}

/// Typed absolute pressure from text.
pub fn parse_pressure(raw_text: &str) -> Result<Pressure, UnitError> {
    parse_pressure_typed(raw_text.trim())
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature_k(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "k" | "kelvin" => value,
        "" | "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(kelvin)
}

/// Parse absolute pressure in various units.
fn parse_pressure_typed(input: &str) -> Result<Pressure, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let p = match unit.to_lowercase().as_str() {
        "" | "mmhg" | "torr" => mmhg(value),
        "pa" | "pascal" => pa(value),
        "kpa" => kpa(value),
        "mpa" => kpa(value * 1e3),
        "bar" => bar(value),
        "mbar" | "millibar" => bar(value * 1e-3),
        "atm" => atm(value),
        "psia" => psia(value),
        "psig" => psia(value) + atm(1.0),
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute) or 'psig' (gauge)".to_string(),
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            });
        }
    };

    if p.value <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: p.value,
            reason: "Absolute pressure must be positive".to_string(),
        });
    }

    Ok(p)
}

/// Parse a mole fraction (0-1), accepting percent notation.
fn parse_fraction(input: &str) -> Result<f64, UnitError> {
    let fraction = if let Some(num_str) = input.strip_suffix('%') {
        let percent: f64 = num_str.trim().parse().map_err(|_| {
            UnitError::ParseError(format!("Could not parse fraction from '{}'", input))
        })?;
        percent / 100.0
    } else {
        input.parse().map_err(|_| {
            UnitError::ParseError(format!("Could not parse fraction from '{}'", input))
        })?
    };

    if !(0.0..=1.0).contains(&fraction) {
        return Err(UnitError::OutOfRange {
            value: fraction,
            reason: "Mole fraction must be between 0 and 1".to_string(),
        });
    }

    Ok(fraction)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// - "80C" -> (80.0, "C")
/// - "760 mmHg" -> (760.0, "mmHg")
/// - "1.2e5Pa" -> (120000.0, "Pa")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // An exponent marker only counts when a digit or sign follows it
    let bytes = trimmed.as_bytes();
    let mut split_idx = trimmed.len();
    for (i, c) in trimmed.char_indices() {
        let numeric = c.is_ascii_digit() || c == '.' || c == '-' || c == '+';
        let exponent = (c == 'e' || c == 'E')
            && i > 0
            && bytes
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == b'-' || *n == b'+');
        if !numeric && !exponent {
            split_idx = i;
            break;
        }
    }

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kelvin() {
        assert_eq!(parse_quantity("300 K", Quantity::Temperature).unwrap(), 300.0);
        assert_eq!(parse_quantity("300K", Quantity::Temperature).unwrap(), 300.0);
    }

    #[test]
    fn bare_temperature_is_celsius() {
        let t = parse_quantity("80.1", Quantity::Temperature).unwrap();
        assert!((t - 353.25).abs() < 1e-9);
    }

    #[test]
    fn parse_fahrenheit() {
        let t = parse_temperature("212F").unwrap();
        assert!((t.value - 373.15).abs() < 1e-6);
    }

    #[test]
    fn reject_negative_absolute_temperature() {
        assert!(matches!(
            parse_quantity("-300C", Quantity::Temperature),
            Err(UnitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn pressures_agree_on_one_atmosphere() {
        let from_mmhg = parse_quantity("760 mmHg", Quantity::Pressure).unwrap();
        let bare = parse_quantity("760", Quantity::Pressure).unwrap();
        let from_atm = parse_quantity("1 atm", Quantity::Pressure).unwrap();
        let from_kpa = parse_quantity("101.325kPa", Quantity::Pressure).unwrap();
        assert!((from_mmhg - 101_325.0).abs() < 0.1);
        assert_eq!(bare, from_mmhg);
        assert_eq!(from_atm, 101_325.0);
        assert!((from_kpa - 101_325.0).abs() < 1e-9);
    }

    #[test]
    fn text_pressures_read_back_in_table_units() {
        use sw_core::units::to_mmhg;
        assert_eq!(to_mmhg(parse_pressure("1 atm").unwrap()), 760.0);
        assert_eq!(to_mmhg(parse_pressure("760").unwrap()), 760.0);
        assert_eq!(parse_pressure("760 torr").unwrap(), parse_pressure("760 mmHg").unwrap());
        assert!((to_mmhg(parse_pressure("101.325 kPa").unwrap()) - 760.0).abs() < 1e-9);
        assert!((to_mmhg(parse_pressure("0 psig").unwrap()) - 760.0).abs() < 1e-9);
    }

    #[test]
    fn exponent_notation() {
        assert_eq!(parse_pressure("1.2e5Pa").unwrap().value, 1.2e5);
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_quantity("14.7 psi", Quantity::Pressure),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn unknown_pressure_unit() {
        assert!(matches!(
            parse_quantity("3 furlongs", Quantity::Pressure),
            Err(UnitError::UnknownUnit { quantity: Quantity::Pressure, .. })
        ));
    }

    #[test]
    fn fractions_and_percent() {
        assert_eq!(parse_quantity("0.95", Quantity::Fraction).unwrap(), 0.95);
        assert_eq!(parse_quantity("50%", Quantity::Fraction).unwrap(), 0.5);
        assert!(parse_quantity("1.5", Quantity::Fraction).is_err());
        assert!(parse_quantity("abc", Quantity::Fraction).is_err());
    }
}
