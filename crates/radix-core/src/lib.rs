//! RADIX Core - Fundamental types for positional numeral systems
//!
//! This crate defines the core types used throughout the RADIX engine:
//! - Bases (complex radices with |β| ≠ 1)
//! - Digits, digit strings and representations
//! - Reconstruction of values from digit sequences
//! - Error taxonomy

pub mod base;
pub mod digit;
pub mod error;
pub mod reconstruct;

pub use base::*;
pub use digit::*;
pub use error::*;
pub use reconstruct::*;
