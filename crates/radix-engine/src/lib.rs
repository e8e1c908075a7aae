//! RADIX Engine - Digit extraction over arbitrary complex bases
//!
//! This crate implements the numerical core:
//! - Generic beta expansion for any base with |β| > 1
//! - Gaussian-base (−1+i) extraction with balanced/unbalanced alphabets
//! - Eisenstein-base (−1+ω) extraction
//! - Reciprocal rewriting for bases with |β| < 1
//! - The conversion pipeline tying validation, dispatch and reconstruction
//!   together

pub mod beta;
pub mod convert;
pub mod eisenstein;
pub mod gaussian;
pub mod reciprocal;

pub use beta::*;
pub use convert::*;
pub use eisenstein::*;
pub use gaussian::*;
pub use reciprocal::*;
