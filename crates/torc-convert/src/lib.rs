//! Temperature conversions between Celsius, Fahrenheit, and Kelvin.

use thiserror::Error;

/// Errors for temperature conversion inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConvertError {
    /// NaN or infinite input.
    #[error("input must be a finite number")]
    NotFinite,

    /// A Kelvin reading below zero is physically meaningless.
    #[error("temperature cannot be below absolute zero: {0} K")]
    BelowAbsoluteZero(f64),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// The three supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Convert Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> Result<f64> {
    check_finite(celsius)?;
    Ok(celsius * 9.0 / 5.0 + 32.0)
}

/// Convert Fahrenheit to Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64> {
    check_finite(fahrenheit)?;
    Ok((fahrenheit - 32.0) * 5.0 / 9.0)
}

/// Convert Celsius to Kelvin.
pub fn celsius_to_kelvin(celsius: f64) -> Result<f64> {
    check_finite(celsius)?;
    Ok(celsius + 273.15)
}

/// Convert Kelvin to Celsius.
///
/// Fails with [`ConvertError::BelowAbsoluteZero`] for negative Kelvin input.
pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64> {
    check_finite(kelvin)?;
    if kelvin < 0.0 {
        return Err(ConvertError::BelowAbsoluteZero(kelvin));
    }
    Ok(kelvin - 273.15)
}

/// Convert between any two scales, routing through Celsius.
pub fn convert(value: f64, from: Scale, to: Scale) -> Result<f64> {
    let celsius = match from {
        Scale::Celsius => {
            check_finite(value)?;
            value
        }
        Scale::Fahrenheit => fahrenheit_to_celsius(value)?,
        Scale::Kelvin => kelvin_to_celsius(value)?,
    };
    match to {
        Scale::Celsius => Ok(celsius),
        Scale::Fahrenheit => celsius_to_fahrenheit(celsius),
        Scale::Kelvin => celsius_to_kelvin(celsius),
    }
}

fn check_finite(value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConvertError::NotFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn celsius_fahrenheit_reference_points() {
        assert!(close(celsius_to_fahrenheit(0.0).unwrap(), 32.0));
        assert!(close(celsius_to_fahrenheit(25.0).unwrap(), 77.0));
        assert!(close(celsius_to_fahrenheit(-40.0).unwrap(), -40.0));
        assert!(close(fahrenheit_to_celsius(77.0).unwrap(), 25.0));
        assert!(close(fahrenheit_to_celsius(212.0).unwrap(), 100.0));
    }

    #[test]
    fn kelvin_reference_points() {
        assert!(close(celsius_to_kelvin(0.0).unwrap(), 273.15));
        assert!(close(kelvin_to_celsius(273.15).unwrap(), 0.0));
        assert!(close(kelvin_to_celsius(0.0).unwrap(), -273.15));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert_eq!(celsius_to_fahrenheit(f64::NAN), Err(ConvertError::NotFinite));
        assert_eq!(
            fahrenheit_to_celsius(f64::INFINITY),
            Err(ConvertError::NotFinite)
        );
        assert_eq!(celsius_to_kelvin(f64::NAN), Err(ConvertError::NotFinite));
    }

    #[test]
    fn negative_kelvin_is_rejected() {
        assert_eq!(
            kelvin_to_celsius(-1.0),
            Err(ConvertError::BelowAbsoluteZero(-1.0))
        );
    }

    #[test]
    fn convert_routes_between_all_scales() {
        assert!(close(
            convert(212.0, Scale::Fahrenheit, Scale::Kelvin).unwrap(),
            373.15
        ));
        assert!(close(
            convert(300.0, Scale::Kelvin, Scale::Fahrenheit).unwrap(),
            80.33
        ));
        assert!(close(convert(25.0, Scale::Celsius, Scale::Celsius).unwrap(), 25.0));
    }
}
