//! Reconstruction - evaluating digit sequences back into values
//!
//! [`reconstruct`] is the single source of truth for what a digit sequence
//! means. Every extractor's output is measured against it, both to produce
//! the reported approximation and to validate round trips in tests.

use num_complex::Complex64;

use crate::Digit;

/// Tolerance used when checking an actual error against its theoretical bound
pub const VERIFY_TOLERANCE: f64 = 1e-12;

/// Evaluate integer digits I (most-significant-first) and fraction digits F
/// against a base:
///
/// Σ I[n−1−k]·β^k  +  Σ F[k−1]·β^(−k)
///
/// Pure and total for any finite digit sequences and any β ≠ 0.
pub fn reconstruct(integer: &[Digit], fraction: &[Digit], base: Complex64) -> Complex64 {
    let mut v = Complex64::new(0.0, 0.0);
    for (i, &d) in integer.iter().rev().enumerate() {
        v += base.powi(i as i32) * d as f64;
    }
    for (i, &d) in fraction.iter().enumerate() {
        v += base.powi(-(i as i32 + 1)) * d as f64;
    }
    v
}

/// Outcome of measuring a reconstruction against the original value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReconstructionResult {
    /// The value the digit sequence evaluates to
    pub reconstructed: Complex64,
    /// |original − reconstructed|
    pub actual_error: f64,
    /// Theoretical worst-case error for the extraction method used
    pub bound: f64,
    /// actual_error ≤ bound + tolerance
    pub verified: bool,
}

impl ReconstructionResult {
    /// Measure a reconstructed value against the original, with the
    /// extraction method's theoretical bound.
    pub fn measure(original: Complex64, reconstructed: Complex64, bound: f64) -> Self {
        let actual_error = (original - reconstructed).norm();
        ReconstructionResult {
            reconstructed,
            actual_error,
            bound,
            verified: actual_error <= bound + VERIFY_TOLERANCE,
        }
    }
}
