//! Benchmarks for parsing, truth-table sweeps and Karnaugh map layout
//!
//! Equations are generated per variable count so the sweep cost can be compared as
//! the truth table doubles.

use binary_algebra::bits::gray_code;
use binary_algebra::{KarnaughMap, ParsedEquation, TruthTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Alternating sum of products over the first `vars` letters, e.g. `A'B + C^D'`
fn generated_equation(vars: usize) -> String {
    let letters: Vec<char> = (b'A'..b'Z' + 1).map(char::from).take(vars).collect();
    letters
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let op = if i % 2 == 0 { "" } else { "^" };
            match pair {
                [a, b] => format!("{}'{}{}", a, op, b),
                [a] => format!("({})'", a),
                _ => unreachable!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for vars in [2, 6, 12, 20] {
        let text = generated_equation(vars);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(vars), &text, |b, text| {
            b.iter(|| ParsedEquation::parse(black_box(text)))
        });
    }
    group.finish();
}

fn bench_truth_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("truth_table");
    for vars in [2, 4, 8, 12] {
        let eq = match ParsedEquation::parse(&generated_equation(vars)) {
            Ok(eq) => eq,
            Err(e) => panic!("generated equation failed to parse: {}", e),
        };
        group.throughput(Throughput::Elements(eq.max_inputs() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(vars), &eq, |b, eq| {
            b.iter(|| TruthTable::full(black_box(eq)))
        });
    }
    group.finish();
}

fn bench_karnaugh_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("karnaugh_grid");
    for (columns, rows) in [("AB", "CD"), ("ABC", "DE"), ("ABC", "DEF")] {
        let vars = columns.len() + rows.len();
        let eq = match ParsedEquation::parse(&generated_equation(vars)) {
            Ok(eq) => eq,
            Err(e) => panic!("generated equation failed to parse: {}", e),
        };
        let terms = match TruthTable::full(&eq) {
            Ok(table) => table.classify([]),
            Err(e) => panic!("generated equation failed to evaluate: {}", e),
        };
        let mut map = KarnaughMap::from_equation(&eq, terms);
        if let Err(e) = map.set_column_vars(columns).and_then(|_| map.set_row_vars(rows)) {
            panic!("invalid axes {}/{}: {}", columns, rows, e);
        }
        group.bench_with_input(BenchmarkId::from_parameter(vars), &map, |b, map| {
            b.iter(|| black_box(map).grid())
        });
    }
    group.finish();
}

fn bench_gray_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("gray_code");
    for bits in [2, 4, 8, 12] {
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| gray_code(black_box(bits)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_truth_table,
    bench_karnaugh_grid,
    bench_gray_code
);
criterion_main!(benches);
