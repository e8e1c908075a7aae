//! Reciprocal rewriting for bases with magnitude below one
//!
//! The greedy expansion only converges for |β| > 1. A base with |β| < 1 is
//! rewritten as its multiplicative inverse γ = 1/β; the digits are then read
//! as powers of γ⁻¹. The original base survives only for labeling.

use num_complex::Complex64;
use radix_core::Base;

/// A validated base, possibly rewritten through its reciprocal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedBase {
    /// The base extraction actually operates on (|base| > 1)
    pub base: Complex64,
    /// The base the caller asked for, retained for display only
    pub original: Complex64,
    /// True when the base was rewritten as 1/β
    pub reciprocal_used: bool,
}

impl ResolvedBase {
    /// Resolve a validated base into the form extraction runs on
    pub fn resolve(base: Base) -> Self {
        let beta = base.value();
        if base.magnitude() < 1.0 {
            ResolvedBase {
                base: Complex64::new(1.0, 0.0) / beta,
                original: beta,
                reciprocal_used: true,
            }
        } else {
            ResolvedBase {
                base: beta,
                original: beta,
                reciprocal_used: false,
            }
        }
    }
}
