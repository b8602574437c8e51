use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use querykit::StatementBuilder;

/// Build a SELECT with `n` columns and `n` keyed conditions:
/// SELECT col0, col1, ... FROM t WHERE col0 = ? AND col1 = ? ...
fn select_builder(n: usize) -> StatementBuilder {
    let mut qb = StatementBuilder::new("t");
    for i in 0..n {
        qb.select(&format!("col{i}"));
    }
    for i in 0..n {
        qb.where_eq(&format!("col{i}"), i as i64);
    }
    qb.order_by_desc("col0").limit(50).offset(100);
    qb
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/build");

    for n in [1, 5, 10, 50, 100] {
        let qb = select_builder(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            let mut qb = qb.clone();
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

fn bench_accumulate_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/accumulate_and_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut qb = select_builder(n);
                black_box(qb.build())
            });
        });
    }

    group.finish();
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/to_sql");

    for n in [1, 10, 100] {
        let mut qb = StatementBuilder::new("t");
        qb.update();
        for i in 0..n {
            qb.set(&format!("col{i}"), format!("value '{i}'"));
        }
        qb.where_eq("id", 1);

        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            let mut qb = qb.clone();
            b.iter(|| black_box(qb.to_sql()));
        });
    }

    group.finish();
}

fn bench_where_overwrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/where_overwrite");

    for n in [5, 20, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut qb = StatementBuilder::new("t");
                qb.select_all();
                for round in 0..2 {
                    for i in 0..n {
                        qb.where_eq(&format!("col{i}"), (round * n + i) as i64);
                    }
                }
                black_box(qb.build())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_accumulate_and_build,
    bench_to_sql,
    bench_where_overwrite
);
criterion_main!(benches);
