//! Base (radix) primitives
//!
//! A base is any complex number β with |β| ≠ 1. Bases with |β| = 1 admit no
//! finite or convergent positional system and are rejected up front, before
//! any digit extraction runs.

use num_complex::Complex64;

use crate::{RadixError, RadixResult};

/// Primitive cube root of unity, ω = −½ + i·√3/2
pub fn omega() -> Complex64 {
    Complex64::new(-0.5, 3.0_f64.sqrt() / 2.0)
}

/// The Gaussian base −1+i
pub fn gaussian_base() -> Complex64 {
    Complex64::new(-1.0, 1.0)
}

/// The Eisenstein base −1+ω
pub fn eisenstein_base() -> Complex64 {
    Complex64::new(-1.0, 0.0) + omega()
}

/// A validated destination base.
///
/// Construction enforces |β| ≠ 1. The check is exact equality against 1.0,
/// not a tolerance band: a base like 0.9999999999 is accepted and later
/// rewritten through its reciprocal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Base(Complex64);

impl Base {
    /// Validate a candidate base. Fails with [`RadixError::InvalidBase`]
    /// when |β| = 1.
    pub fn new(beta: Complex64) -> RadixResult<Self> {
        if beta.norm() == 1.0 {
            return Err(RadixError::InvalidBase(beta));
        }
        Ok(Base(beta))
    }

    /// The underlying complex radix
    #[inline]
    pub fn value(self) -> Complex64 {
        self.0
    }

    /// |β|
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.0.norm()
    }

    /// A standard base is real-valued with an integer radix; everything
    /// else (non-integer, negative-fractional, complex) is exotic.
    #[inline]
    pub fn is_standard(self) -> bool {
        self.0.im == 0.0 && self.0.re == self.0.re.trunc()
    }

    /// True when this is exactly the Gaussian base −1+i
    #[inline]
    pub fn is_gaussian(self) -> bool {
        self.0 == gaussian_base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unit_magnitude_bases() {
        assert!(matches!(
            Base::new(Complex64::new(1.0, 0.0)),
            Err(RadixError::InvalidBase(_))
        ));
        assert!(matches!(
            Base::new(Complex64::new(-1.0, 0.0)),
            Err(RadixError::InvalidBase(_))
        ));
    }

    #[test]
    fn test_accepts_valid_bases() {
        assert!(Base::new(Complex64::new(2.0, 0.0)).is_ok());
        assert!(Base::new(Complex64::new(-1.0, 1.0)).is_ok());
        assert!(Base::new(Complex64::new(0.5, 0.0)).is_ok());
    }

    #[test]
    fn test_standard_classification() {
        assert!(Base::new(Complex64::new(16.0, 0.0)).unwrap().is_standard());
        assert!(Base::new(Complex64::new(-2.0, 0.0)).unwrap().is_standard());
        assert!(!Base::new(Complex64::new(2.5, 0.0)).unwrap().is_standard());
        assert!(!Base::new(Complex64::new(-1.0, 1.0)).unwrap().is_standard());
    }

    #[test]
    fn test_gaussian_detection() {
        assert!(Base::new(gaussian_base()).unwrap().is_gaussian());
        assert!(!Base::new(Complex64::new(2.0, 0.0)).unwrap().is_gaussian());
    }

    #[test]
    fn test_eisenstein_base_magnitude() {
        // | -1 + ω | = √3 > 1, so the base is directly expandable
        let b = Base::new(eisenstein_base()).unwrap();
        assert!((b.magnitude() - 3.0_f64.sqrt()).abs() < 1e-12);
    }
}
