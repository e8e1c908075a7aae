//! RADIX Format - Textual collaborators around the numeric core
//!
//! This crate implements everything cosmetic:
//! - Symbolic base labels (π, √2, φ, −1+i, −1+ω)
//! - Universal and hexadecimal rendering of representations
//! - Complex-literal parsing for user-supplied text
//!
//! Nothing here feeds back into the numeric core.

pub mod display;
pub mod label;
pub mod parse;

pub use display::*;
pub use label::*;
pub use parse::*;
