//! Symbolic base labels
//!
//! A pure lookup table matching a numeric base against named algebraic
//! constants, consulted only when rendering a base's label. Matches against
//! the named real constants use a tolerance; the two fixed exotic bases are
//! matched exactly.

use std::f64::consts::PI;

use num_complex::Complex64;
use radix_core::{eisenstein_base, gaussian_base};

/// Tolerance for matching a base against a named real constant
const LABEL_TOLERANCE: f64 = 1e-12;

/// Render the display label for a base: a named constant glyph when one
/// matches, the plain number otherwise.
pub fn base_label(base: Complex64) -> String {
    if base.im == 0.0 {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        if (base.re - PI).abs() < LABEL_TOLERANCE {
            return "π".to_string();
        }
        if (base.re - 2.0_f64.sqrt()).abs() < LABEL_TOLERANCE {
            return "√2".to_string();
        }
        if (base.re - phi).abs() < LABEL_TOLERANCE {
            return "φ".to_string();
        }
    }
    if base == gaussian_base() {
        return "-1+i".to_string();
    }
    if base == eisenstein_base() {
        return "-1+ω".to_string();
    }
    format_complex(base)
}

/// Render a complex number compactly: real-only values drop the imaginary
/// term, integral components drop their fraction.
pub fn format_complex(z: Complex64) -> String {
    let part = |v: f64| {
        if v == v.trunc() && v.abs() < 1e15 {
            format!("{}", v as i64)
        } else {
            format!("{v}")
        }
    };
    if z.im == 0.0 {
        part(z.re)
    } else if z.im < 0.0 {
        format!("{}-{}i", part(z.re), part(-z.im))
    } else {
        format!("{}+{}i", part(z.re), part(z.im))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_constants() {
        assert_eq!(base_label(Complex64::new(PI, 0.0)), "π");
        assert_eq!(base_label(Complex64::new(2.0_f64.sqrt(), 0.0)), "√2");
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        assert_eq!(base_label(Complex64::new(phi, 0.0)), "φ");
    }

    #[test]
    fn test_exotic_bases() {
        assert_eq!(base_label(gaussian_base()), "-1+i");
        assert_eq!(base_label(eisenstein_base()), "-1+ω");
    }

    #[test]
    fn test_plain_bases() {
        assert_eq!(base_label(Complex64::new(16.0, 0.0)), "16");
        assert_eq!(base_label(Complex64::new(2.5, 0.0)), "2.5");
        assert_eq!(base_label(Complex64::new(0.0, 2.0)), "0+2i");
        assert_eq!(base_label(Complex64::new(3.0, -4.0)), "3-4i");
    }

    #[test]
    fn test_near_miss_is_not_named() {
        assert_eq!(base_label(Complex64::new(3.14, 0.0)), "3.14");
    }
}
