//! Eisenstein-base extraction (β = −1+ω, ω a primitive cube root of unity)
//!
//! Same bounded loop shape as the Gaussian extractor, with a modulo-3 digit
//! rule giving the alphabet {−1, 0, 1}. The remainder is kept on integer
//! coordinates: dividing by the algebraic unit leaves floating residue on
//! both components, which each step cleans by rounding. Orbits under this
//! rule frequently never reach zero; the digit ceiling reports those as
//! [`Termination::CeilingReached`] rather than looping forever.

use num_complex::Complex64;
use radix_core::{eisenstein_base, Digit};

use crate::gaussian::snap;
use crate::{Extraction, Termination};

/// Extract base −1+ω digits from a value, returned most-significant-first.
///
/// Digit rule: (round(re) mod 3) − 1 ∈ {−1, 0, 1}. No fractional digits are
/// produced.
pub fn extract_eisenstein(value: Complex64, max_digits: usize) -> Extraction {
    let beta = eisenstein_base();
    let zero = Complex64::new(0.0, 0.0);
    let mut z = snap(value);
    let mut digits = Vec::new();

    while z != zero && digits.len() < max_digits {
        let d = (z.re.round() as Digit).rem_euclid(3) - 1;
        digits.push(d);
        z = snap((z - d as f64) / beta);
    }

    let termination = if z == zero {
        Termination::Zero
    } else {
        Termination::CeilingReached
    };
    digits.reverse();

    Extraction {
        digits,
        termination,
    }
}
