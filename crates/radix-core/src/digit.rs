//! Digits, digit strings and representations

use num_complex::Complex64;

use crate::{reconstruct, RadixError, RadixResult};

/// A single digit. Signed: balanced alphabets emit negative digits.
pub type Digit = i64;

/// An ordered digit-sequence pair tied to a specific base.
///
/// Integer digits are most-significant-first; fraction digits are ordered by
/// increasing negative power (the first fraction digit has weight β⁻¹).
#[derive(Clone, Debug, PartialEq)]
pub struct Representation {
    /// Integer-part digits, most-significant-first
    pub integer: Vec<Digit>,
    /// Fractional-part digits, first digit weighted β⁻¹
    pub fraction: Vec<Digit>,
    /// The base these digits are read in
    pub base: Complex64,
}

impl Representation {
    /// Create a representation from its parts
    pub fn new(integer: Vec<Digit>, fraction: Vec<Digit>, base: Complex64) -> Self {
        Representation {
            integer,
            fraction,
            base,
        }
    }

    /// Evaluate the digits back into a value
    pub fn evaluate(&self) -> Complex64 {
        reconstruct(&self.integer, &self.fraction, self.base)
    }

    /// True when the fractional part is empty or all zeros
    pub fn fraction_is_zero(&self) -> bool {
        self.fraction.iter().all(|&d| d == 0)
    }
}

/// Parse a positional-digit string for a standard integer base.
///
/// Every character must be an ASCII decimal digit; the first offending
/// character is reported in the error.
pub fn parse_digit_string(s: &str) -> RadixResult<Vec<Digit>> {
    if s.is_empty() {
        return Err(RadixError::InvalidDigitString(' '));
    }
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as Digit)
                .ok_or(RadixError::InvalidDigitString(c))
        })
        .collect()
}

/// Evaluate a digit string in a standard integer source base
pub fn value_from_digits(digits: &[Digit], base: i64) -> Complex64 {
    reconstruct(digits, &[], Complex64::new(base as f64, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digit_string() {
        assert_eq!(parse_digit_string("130").unwrap(), vec![1, 3, 0]);
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            parse_digit_string("12a4"),
            Err(RadixError::InvalidDigitString('a'))
        );
        assert_eq!(
            parse_digit_string("-5"),
            Err(RadixError::InvalidDigitString('-'))
        );
        assert!(parse_digit_string("").is_err());
    }

    #[test]
    fn test_value_from_digits_decimal() {
        let v = value_from_digits(&[1, 3, 0], 10);
        assert_eq!(v, Complex64::new(130.0, 0.0));
    }

    #[test]
    fn test_value_from_digits_binary() {
        let v = value_from_digits(&[1, 1, 0, 1], 2);
        assert_eq!(v, Complex64::new(13.0, 0.0));
    }

    #[test]
    fn test_fraction_is_zero() {
        let base = Complex64::new(2.0, 0.0);
        assert!(Representation::new(vec![1], vec![], base).fraction_is_zero());
        assert!(Representation::new(vec![1], vec![0, 0], base).fraction_is_zero());
        assert!(!Representation::new(vec![1], vec![0, 1], base).fraction_is_zero());
    }
}
