//! Benchmarks for the RADIX conversion engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use num_complex::Complex64;
use radix_core::reconstruct;
use radix_engine::{beta_expand, extract_gaussian, Converter, ExtractionMode, MAX_COMPLEX_DIGITS};
use radix_test::{random_gaussian_integers, random_reals, representative_cases};

fn bench_beta_expand(c: &mut Criterion) {
    let values = random_reals(64, 7);

    c.bench_function("beta_expand_base2_frac16", |b| {
        let base = Complex64::new(2.0, 0.0);
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % values.len();
            black_box(beta_expand(black_box(values[i]), base, 16))
        })
    });
}

fn bench_gaussian_extract(c: &mut Criterion) {
    let values = random_gaussian_integers(64, 11);

    c.bench_function("gaussian_extract_balanced", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % values.len();
            black_box(extract_gaussian(
                black_box(values[i]),
                true,
                MAX_COMPLEX_DIGITS,
            ))
        })
    });
}

fn bench_reconstruct(c: &mut Criterion) {
    let base = Complex64::new(2.0, 0.0);
    let e = beta_expand(Complex64::new(123456.789, 0.0), base, 32);
    let integer = e.representation.integer;
    let fraction = e.representation.fraction;

    c.bench_function("reconstruct_base2", |b| {
        b.iter(|| black_box(reconstruct(black_box(&integer), &fraction, base)))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let converter = Converter::new();
    let cases = representative_cases();

    c.bench_function("convert_representative_set", |b| {
        b.iter(|| {
            for case in &cases {
                let _ = black_box(converter.convert(
                    black_box(case.value),
                    case.base,
                    ExtractionMode::Balanced,
                    case.frac_digits,
                ));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_beta_expand,
    bench_gaussian_extract,
    bench_reconstruct,
    bench_full_pipeline
);
criterion_main!(benches);
