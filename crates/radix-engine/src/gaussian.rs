//! Gaussian-base extraction (β = −1+i)
//!
//! Digit selection runs on Gaussian integers: the remainder is snapped to
//! integer coordinates before every step, a parity digit is peeled off, and
//! the remainder is divided by β and re-snapped. The loop is bounded by a
//! hard digit ceiling; hitting it is a distinct outcome, not a truncated
//! success.

use num_complex::Complex64;
use radix_core::{gaussian_base, Digit};

/// Hard ceiling on Gaussian/Eisenstein digit counts. Reaching it signals a
/// non-terminating orbit, never a valid representation.
pub const MAX_COMPLEX_DIGITS: usize = 200;

/// Why an extraction loop stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Remainder reached exactly zero; the digits are a complete
    /// representation
    Zero,
    /// Digit ceiling reached with a nonzero remainder
    CeilingReached,
}

/// Digits produced by a bounded extraction loop, with its stop cause
#[derive(Clone, Debug)]
pub struct Extraction {
    /// Extracted digits, most-significant-first
    pub digits: Vec<Digit>,
    /// How the loop ended
    pub termination: Termination,
}

impl Extraction {
    /// True when the digits form a complete, exact representation
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Zero
    }
}

/// Snap a complex value to the nearest Gaussian integer. Division by a
/// complex unit leaves small floating residues on both components; every
/// loop step cleans them before the next digit is selected.
pub(crate) fn snap(z: Complex64) -> Complex64 {
    Complex64::new(z.re.round(), z.im.round())
}

/// Extract base −1+i digits from a value, least-significant-first
/// internally, returned most-significant-first.
///
/// The parity rule (re + im) mod 2 yields digits in {0, 1}. Balanced mode
/// additionally collapses a parity value of 2 to −1, keeping the alphabet in
/// {−1, 0, 1}; that value is only reachable through floating residue in the
/// parity computation, so for snapped inputs the two modes emit the same
/// sequences. No fractional digits are produced.
pub fn extract_gaussian(value: Complex64, balanced: bool, max_digits: usize) -> Extraction {
    let beta = gaussian_base();
    let zero = Complex64::new(0.0, 0.0);
    let mut z = snap(value);
    let mut digits = Vec::new();

    while z != zero && digits.len() < max_digits {
        let parity = (z.re + z.im).rem_euclid(2.0).round() as Digit;
        let d = if balanced && parity == 2 { -1 } else { parity };
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
