//! Benchmarks for the calculator kernel.
//! Run: cargo bench -p exactnum-calc --bench kernel

use criterion::{criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration};
use exactnum_calc::{Calculator, NativeCalculator, PortableCalculator};
use rand::prelude::*;

const SEED: u64 = 1;

fn random_digits(digits: usize, rng: &mut impl Rng) -> String {
    let mut s = String::with_capacity(digits);
    s.push((b'1' + rng.gen_range(0..9)) as char);
    for _ in 1..digits {
        s.push((b'0' + rng.gen_range(0..10)) as char);
    }
    s
}

macro_rules! add_binop_benchmark {
    ($name:ident, $method:ident, $max_log_digits:literal) => {
        fn $name(criterion: &mut Criterion) {
            let native = NativeCalculator::new();
            let portable = PortableCalculator;
            let mut rng = StdRng::seed_from_u64(SEED);
            let mut group = criterion.benchmark_group(stringify!($name));
            group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

            for log_digits in 1..=$max_log_digits {
                let digits = 10usize.pow(log_digits);
                let a = random_digits(digits, &mut rng);
                let b = random_digits(digits, &mut rng);
                group.bench_with_input(
                    BenchmarkId::new("native", digits),
                    &(a.clone(), b.clone()),
                    |bencher, (a, b)| bencher.iter(|| native.$method(a, b)),
                );
                group.bench_with_input(
                    BenchmarkId::new("portable", digits),
                    &(a, b),
                    |bencher, (a, b)| bencher.iter(|| portable.$method(a, b)),
                );
            }

            group.finish();
        }
    };
}

add_binop_benchmark!(add, add, 4);
add_binop_benchmark!(mul, mul, 4);
add_binop_benchmark!(gcd, gcd, 3);

fn sqrt(criterion: &mut Criterion) {
    let native = NativeCalculator::new();
    let portable = PortableCalculator;
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = criterion.benchmark_group("sqrt");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    for log_digits in 1..=4u32 {
        let digits = 10usize.pow(log_digits);
        let n = random_digits(digits, &mut rng);
        group.bench_with_input(BenchmarkId::new("native", digits), &n, |bencher, n| {
            bencher.iter(|| native.sqrt(n))
        });
        group.bench_with_input(BenchmarkId::new("portable", digits), &n, |bencher, n| {
            bencher.iter(|| portable.sqrt(n))
        });
    }
    group.finish();
}

criterion_group!(benches, add, mul, gcd, sqrt);
criterion_main!(benches);
