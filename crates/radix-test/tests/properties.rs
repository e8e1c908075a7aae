//! Property suites over the conversion engine

use num_complex::Complex64;
use proptest::prelude::*;
use radix_core::{gaussian_base, reconstruct};
use radix_engine::{
    beta_expand, extract_eisenstein, extract_gaussian, Converter, ExtractionMode,
    MAX_COMPLEX_DIGITS,
};

fn real_base() -> impl Strategy<Value = f64> {
    // comfortably away from the |β| = 1 wall, where digit counts stay sane
    1.1f64..16.0
}

fn gaussian_integer() -> impl Strategy<Value = Complex64> {
    (-1000i64..=1000, -1000i64..=1000)
        .prop_map(|(re, im)| Complex64::new(re as f64, im as f64))
}

proptest! {
    #[test]
    fn roundtrip_matches_reported_reconstruction(
        value in -1e6f64..1e6,
        base in real_base(),
        frac in 0usize..10,
    ) {
        let e = beta_expand(Complex64::new(value, 0.0), Complex64::new(base, 0.0), frac);
        // the representation must evaluate to exactly the reported value
        prop_assert_eq!(e.representation.evaluate(), e.result.reconstructed);
    }

    #[test]
    fn expansion_is_deterministic(
        value in -1e6f64..1e6,
        base in real_base(),
        frac in 0usize..10,
    ) {
        let v = Complex64::new(value, 0.0);
        let b = Complex64::new(base, 0.0);
        let a = beta_expand(v, b, frac);
        let c = beta_expand(v, b, frac);
        prop_assert_eq!(a.representation, c.representation);
        prop_assert_eq!(a.result, c.result);
    }

    #[test]
    fn error_stays_under_bound(
        value in -1e6f64..1e6,
        base in real_base(),
        frac in 0usize..10,
    ) {
        let e = beta_expand(Complex64::new(value, 0.0), Complex64::new(base, 0.0), frac);
        // slack scales with the value: long expansions accumulate float
        // noise proportional to the magnitudes involved
        let slack = 1e-9 * (1.0 + value.abs());
        prop_assert!(e.result.actual_error <= e.result.bound + slack);
    }

    #[test]
    fn reciprocal_base_produces_identical_digits(
        value in -1e4f64..1e4,
        base in 0.1f64..0.9,
        frac in 0usize..8,
    ) {
        let v = Complex64::new(value, 0.0);
        let converter = Converter::new();
        let small = converter
            .convert(v, Complex64::new(base, 0.0), ExtractionMode::Plain, frac)
            .unwrap();
        prop_assert!(small.base.reciprocal_used);

        // re-run directly in the rewritten base: same digits, different label
        let direct = converter
            .convert(v, small.base.base, ExtractionMode::Plain, frac)
            .unwrap();
        prop_assert!(!direct.base.reciprocal_used);
        prop_assert_eq!(&small.representation.integer, &direct.representation.integer);
        prop_assert_eq!(&small.representation.fraction, &direct.representation.fraction);
    }

    #[test]
    fn gaussian_balanced_alphabet_and_roundtrip(z in gaussian_integer()) {
        let e = extract_gaussian(z, true, MAX_COMPLEX_DIGITS);
        prop_assert!(e.is_complete());
        prop_assert!(e.digits.iter().all(|&d| (-1..=1).contains(&d)));
        prop_assert_eq!(reconstruct(&e.digits, &[], gaussian_base()), z);
    }

    #[test]
    fn gaussian_unbalanced_alphabet_and_roundtrip(z in gaussian_integer()) {
        let e = extract_gaussian(z, false, MAX_COMPLEX_DIGITS);
        prop_assert!(e.is_complete());
        prop_assert!(e.digits.iter().all(|&d| d == 0 || d == 1));
        prop_assert_eq!(reconstruct(&e.digits, &[], gaussian_base()), z);
    }

    #[test]
    fn eisenstein_alphabet(z in gaussian_integer()) {
        let e = extract_eisenstein(z, MAX_COMPLEX_DIGITS);
        prop_assert!(e.digits.len() <= MAX_COMPLEX_DIGITS);
        prop_assert!(e.digits.iter().all(|&d| (-1..=1).contains(&d)));
    }

    #[test]
    fn zero_value_is_exact_in_any_base(base in real_base(), frac in 0usize..10) {
        let e = beta_expand(Complex64::new(0.0, 0.0), Complex64::new(base, 0.0), frac);
        prop_assert!(e.representation.fraction_is_zero());
        prop_assert_eq!(e.result.actual_error, 0.0);
        prop_assert_eq!(e.result.bound, 0.0);
        prop_assert!(e.result.verified);
    }
}
