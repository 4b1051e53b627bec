//! Benchmarks for truth table construction, parsing and comparison
//!
//! Table sizes grow as 2^n, so every group is parameterized by variable count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logic_tool::formula::{evaluate, to_rpn, tokenize};
use logic_tool::{compare, BooleanFunction};
use std::collections::HashMap;

/// Parity of `n` variables, `x1 ^ x2 ^ ... ^ xn`
fn parity_formula(n: u32) -> String {
    (1..=n)
        .map(|i| format!("x{}", i))
        .collect::<Vec<_>>()
        .join(" ^ ")
}

/// A function number with alternating parity bits, cut to `n` variables
fn function_number(n: u32) -> u64 {
    let pattern = 0x6996_9669_9669_6996u64;
    match 1u32 << n {
        rows if rows < 64 => pattern & ((1 << rows) - 1),
        _ => pattern,
    }
}

/// Benchmark: build a function from its number
fn bench_from_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_number");

    for n in [2u32, 4, 6, 8, 10] {
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let number = black_box(function_number(n));
                let f = BooleanFunction::from_number(black_box(n), number).unwrap();
                black_box(f);
            });
        });
    }

    group.finish();
}

/// Benchmark: build a function from a formula
fn bench_from_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_formula");

    for n in [2u32, 4, 8, 12] {
        let formula = parity_formula(n);
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::new("parity", n), &formula, |b, formula| {
            b.iter(|| {
                let f = BooleanFunction::from_formula(black_box(formula)).unwrap();
                black_box(f);
            });
        });
    }

    group.finish();
}

/// Benchmark: tokenize, convert to RPN and evaluate once
fn bench_parse_and_evaluate(c: &mut Criterion) {
    let formula = "(x1 -> x2) & !(x3 xor x4) | (x5 = x6)";
    let assignment: HashMap<String, bool> = (1..=6)
        .map(|i| (format!("x{}", i), i % 2 == 0))
        .collect();

    c.bench_function("parse_and_evaluate", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(formula)).unwrap();
            let rpn = to_rpn(&tokens).unwrap();
            black_box(evaluate(&rpn, &assignment).unwrap());
        });
    });
}

/// Benchmark: compare a number-origin function with its DNF
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for n in [2u32, 4, 6, 8] {
        let by_number = BooleanFunction::from_number(n, function_number(n)).unwrap();
        let by_formula = BooleanFunction::from_formula(by_number.dnf()).unwrap();

        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(
            BenchmarkId::new("number_vs_dnf", n),
            &(by_number, by_formula),
            |b, (f1, f2)| {
                b.iter(|| black_box(compare(f1, f2)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_from_number,
    bench_from_formula,
    bench_parse_and_evaluate,
    bench_compare
);
criterion_main!(benches);
