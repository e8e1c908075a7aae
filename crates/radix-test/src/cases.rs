//! Fixture inputs shared by the property suites and benchmarks

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A value/base pair with the fractional digit count to carry
#[derive(Clone, Copy, Debug)]
pub struct ConversionCase {
    pub value: Complex64,
    pub base: Complex64,
    pub frac_digits: usize,
    pub label: &'static str,
}

/// Representative conversions across standard, irrational, negative,
/// complex and sub-unit bases.
pub fn representative_cases() -> Vec<ConversionCase> {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    vec![
        ConversionCase {
            value: Complex64::new(13.0, 0.0),
            base: Complex64::new(16.0, 0.0),
            frac_digits: 0,
            label: "hex",
        },
        ConversionCase {
            value: Complex64::new(130.0, 0.0),
            base: Complex64::new(2.0, 0.0),
            frac_digits: 8,
            label: "binary",
        },
        ConversionCase {
            value: Complex64::new(7.25, 0.0),
            base: Complex64::new(phi, 0.0),
            frac_digits: 16,
            label: "golden-ratio",
        },
        ConversionCase {
            value: Complex64::new(42.0, 0.0),
            base: Complex64::new(-3.0, 0.0),
            frac_digits: 6,
            label: "negative",
        },
        ConversionCase {
            value: Complex64::new(3.0, 4.0),
            base: Complex64::new(0.0, 2.0),
            frac_digits: 12,
            label: "imaginary",
        },
        ConversionCase {
            value: Complex64::new(13.0, 0.0),
            base: Complex64::new(0.5, 0.0),
            frac_digits: 4,
            label: "reciprocal",
        },
    ]
}

/// Seeded Gaussian-integer inputs for the exotic extractors
pub fn random_gaussian_integers(count: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Complex64::new(
                rng.gen_range(-1000..=1000) as f64,
                rng.gen_range(-1000..=1000) as f64,
            )
        })
        .collect()
}

/// Seeded real values for expansion benchmarks
pub fn random_reals(count: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Complex64::new(rng.gen_range(-1e6..1e6), 0.0))
        .collect()
}
