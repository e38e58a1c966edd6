//! Micro-benchmarks for unit conversion and size formatting.
//!
//!   $ cargo bench --bench conversion_benchmark

use byte_units::{BinaryByteUnit, BitUnit, DecimalByteUnit, DecimalFormat};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, rng};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

const SAMPLE_COUNT: usize = 4_096;

fn sample_counts() -> Vec<i64> {
    let mut rng = rng();
    (0..SAMPLE_COUNT).map(|_| rng.random::<i64>()).collect()
}

// ---------------------------------------------------------------------------
// Conversions (every pair of a family per iteration)
// ---------------------------------------------------------------------------

fn conversion_bench(c: &mut Criterion) {
    let counts = sample_counts();
    let mut group = c.benchmark_group("convert_all_pairs");

    group.bench_function("binary_byte_unit", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for &count in &counts {
                for source in BinaryByteUnit::ALL {
                    for target in BinaryByteUnit::ALL {
                        acc ^= target.convert(black_box(count), source);
                    }
                }
            }
            acc
        });
    });

    group.bench_function("decimal_byte_unit", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for &count in &counts {
                for source in DecimalByteUnit::ALL {
                    for target in DecimalByteUnit::ALL {
                        acc ^= target.convert(black_box(count), source);
                    }
                }
            }
            acc
        });
    });

    group.bench_function("bit_unit_to_bytes", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for &count in &counts {
                for unit in BitUnit::ALL {
                    acc ^= unit.to_bytes(black_box(count));
                }
            }
            acc
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

fn format_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let custom = DecimalFormat::new("0.00").expect("valid pattern");

    for bytes in [512i64, 1_234_567, i64::MAX] {
        group.bench_with_input(BenchmarkId::new("default", bytes), &bytes, |b, &bytes| {
            b.iter(|| BinaryByteUnit::format(black_box(bytes)));
        });

        group.bench_with_input(BenchmarkId::new("pattern", bytes), &bytes, |b, &bytes| {
            b.iter(|| BinaryByteUnit::format_with(black_box(bytes), &custom));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, conversion_bench, format_bench);
criterion_main!(benches);
