//! Error types for RADIX conversions

use num_complex::Complex64;
use thiserror::Error;

/// Core RADIX errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RadixError {
    // Base errors
    #[error("Invalid base {0}: |base| = 1 does not define a numeral system")]
    InvalidBase(Complex64),

    // Input errors
    #[error("Invalid digit '{0}' in positional input string")]
    InvalidDigitString(char),

    #[error("Invalid complex literal: {0}")]
    InvalidComplexLiteral(String),

    // Extraction errors
    #[error("Extraction did not terminate within {emitted} digits")]
    NonTerminating { emitted: usize },
}

/// Result type for RADIX operations
pub type RadixResult<T> = Result<T, RadixError>;
