//! Conversion pipeline - validation, reciprocal resolution and dispatch
//!
//! Control flow: validate the base, rewrite |β| < 1 through its reciprocal,
//! then dispatch on the extraction mode and resolved base. Eisenstein mode
//! takes precedence over the base value; plain mode always falls through to
//! the generic beta expander, even for the Gaussian base.

use num_complex::Complex64;
use radix_core::{
    gaussian_base, eisenstein_base, reconstruct, Base, RadixError, RadixResult,
    ReconstructionResult, Representation,
};

use crate::{
    beta_expand, extract_eisenstein, extract_gaussian, Extraction, ResolvedBase, Termination,
    MAX_COMPLEX_DIGITS,
};

/// Digit-selection mode requested by the caller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Gaussian extraction with the balanced alphabet {−1, 0, 1} when the
    /// resolved base is −1+i; beta expansion otherwise
    #[default]
    Balanced,
    /// Gaussian extraction with the alphabet {0, 1} when the resolved base
    /// is −1+i; beta expansion otherwise
    Unbalanced,
    /// Always the generic beta expander
    Plain,
    /// Always the Eisenstein extractor, regardless of base
    Eisenstein,
}

impl ExtractionMode {
    /// Parse a mode selector. `"none"` selects [`ExtractionMode::Plain`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "balanced" => Some(ExtractionMode::Balanced),
            "unbalanced" => Some(ExtractionMode::Unbalanced),
            "none" => Some(ExtractionMode::Plain),
            "eisenstein" => Some(ExtractionMode::Eisenstein),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExtractionMode::Balanced => "balanced",
            ExtractionMode::Unbalanced => "unbalanced",
            ExtractionMode::Plain => "none",
            ExtractionMode::Eisenstein => "eisenstein",
        }
    }
}

/// Which extractor actually ran
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractionMethod {
    /// Generic beta expansion
    Beta,
    /// Gaussian base −1+i
    Gaussian { balanced: bool },
    /// Eisenstein base −1+ω
    Eisenstein,
}

/// Engine configuration
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Ceiling on Gaussian/Eisenstein digit counts; reaching it surfaces
    /// [`RadixError::NonTerminating`]
    pub max_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_digits: MAX_COMPLEX_DIGITS,
        }
    }
}

/// A completed conversion
#[derive(Clone, Debug)]
pub struct Conversion {
    /// The base, after validation and reciprocal resolution
    pub base: ResolvedBase,
    /// Which extractor produced the digits
    pub method: ExtractionMethod,
    /// The extracted digit sequences, tied to the base they are read in
    pub representation: Representation,
    /// Reconstructed value, actual error, theoretical bound
    pub result: ReconstructionResult,
}

/// The conversion engine. Stateless across calls; every conversion is an
/// independent, pure computation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Converter {
    config: EngineConfig,
}

impl Converter {
    /// Create a converter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Converter { config }
    }

    /// Convert a value into the given destination base.
    ///
    /// `frac_digits` only applies to the beta expander; the Gaussian and
    /// Eisenstein extractors emit integer digits only.
    pub fn convert(
        &self,
        value: Complex64,
        base: Complex64,
        mode: ExtractionMode,
        frac_digits: usize,
    ) -> RadixResult<Conversion> {
        let validated = Base::new(base)?;
        let resolved = ResolvedBase::resolve(validated);

        tracing::debug!(
            base = %resolved.base,
            reciprocal = resolved.reciprocal_used,
            mode = mode.name(),
            "dispatching conversion"
        );

        match mode {
            ExtractionMode::Eisenstein => {
                let extraction = extract_eisenstein(value, self.config.max_digits);
                self.integer_only(value, resolved, eisenstein_base(), extraction, ExtractionMethod::Eisenstein)
            }
            ExtractionMode::Balanced | ExtractionMode::Unbalanced
                if resolved.base == gaussian_base() =>
            {
                let balanced = mode == ExtractionMode::Balanced;
                let extraction = extract_gaussian(value, balanced, self.config.max_digits);
                self.integer_only(
                    value,
                    resolved,
                    gaussian_base(),
                    extraction,
                    ExtractionMethod::Gaussian { balanced },
                )
            }
            _ => {
                let expansion = beta_expand(value, resolved.base, frac_digits);
                Ok(Conversion {
                    base: resolved,
                    method: ExtractionMethod::Beta,
                    representation: expansion.representation,
                    result: expansion.result,
                })
            }
        }
    }

    /// Finish a Gaussian/Eisenstein extraction: reject ceiling hits, then
    /// measure the digits against the base they were extracted in.
    fn integer_only(
        &self,
        value: Complex64,
        resolved: ResolvedBase,
        digit_base: Complex64,
        extraction: Extraction,
        method: ExtractionMethod,
    ) -> RadixResult<Conversion> {
        if extraction.termination == Termination::CeilingReached {
            tracing::trace!(emitted = extraction.digits.len(), "extraction hit digit ceiling");
            return Err(RadixError::NonTerminating {
                emitted: extraction.digits.len(),
            });
        }

        let approx = reconstruct(&extraction.digits, &[], digit_base);
        let representation = Representation::new(extraction.digits, Vec::new(), digit_base);

        Ok(Conversion {
            base: resolved,
            method,
            representation,
            result: ReconstructionResult::measure(value, approx, 0.0),
        })
    }
}
