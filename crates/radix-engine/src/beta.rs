//! Generic beta expansion for bases with |β| > 1
//!
//! Greedy digit extraction: estimate the highest power of β needed, then
//! peel one digit per power down to β⁰, then one digit per requested
//! fractional position. Digit selection rounds the REAL part of the complex
//! quotient only, even for complex bases. That asymmetry is deliberate:
//! rounding both components would change every digit sequence produced for
//! exotic bases.

use num_complex::Complex64;
use radix_core::{reconstruct, Digit, ReconstructionResult, Representation};

/// Result of a beta expansion: the digits plus the measured approximation
#[derive(Clone, Debug)]
pub struct BetaExpansion {
    /// The extracted digit sequences
    pub representation: Representation,
    /// Reconstructed value, actual error and truncation bound
    pub result: ReconstructionResult,
}

/// Expand a value in a base with |β| > 1, carrying the fractional part to
/// `frac_digits` positions.
///
/// The theoretical bound is |β|^(−frac_digits), the truncation error of a
/// convergent expansion cut at that many fractional digits; it collapses to
/// zero when the representation is exact.
pub fn beta_expand(value: Complex64, base: Complex64, frac_digits: usize) -> BetaExpansion {
    let zero = Complex64::new(0.0, 0.0);
    let mut remainder = value;
    let mut integer = Vec::new();
    let mut fraction = Vec::with_capacity(frac_digits);

    // Highest power of β needed. Negative k leaves the integer part empty;
    // zero still runs the p = 0 step and emits its single zero digit.
    let k = if value == zero {
        0
    } else {
        (value.norm().ln() / base.norm().ln()).floor() as i32
    };

    for p in (0..=k).rev() {
        let d = (remainder / base.powi(p)).re.round() as Digit;
        integer.push(d);
        remainder -= base.powi(p) * d as f64;
    }

    for _ in 0..frac_digits {
        remainder *= base;
        let d = remainder.re.round() as Digit;
        fraction.push(d);
        remainder -= d as f64;
    }

    let approx = reconstruct(&integer, &fraction, base);
    let actual_error = (value - approx).norm();
    let bound = if actual_error == 0.0 {
        0.0
    } else {
        base.norm().powi(-(frac_digits as i32))
    };

    BetaExpansion {
        representation: Representation::new(integer, fraction, base),
        result: ReconstructionResult::measure(value, approx, bound),
    }
}
