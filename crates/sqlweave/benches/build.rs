use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlweave::{Postgres, Statement, identifier, keyed, list, sql};

/// SELECT col0, col1, ... FROM t WHERE col0 = v AND col1 = v ... AND id IN (...)
fn build_select(n: usize) -> Statement {
    let cols = list((0..n).map(|i| identifier(format!("col{i}"))));
    let filters = keyed((0..n).map(|i| (format!("col{i}"), i as i64)));
    let ids = list((0..n as i64).collect::<Vec<_>>());
    sql!("SELECT {cols} FROM t WHERE {filters} AND id IN ( {ids} )")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build/positional");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_build_postgres(c: &mut Criterion) {
    let mut group = c.benchmark_group("build/postgres");
    let pg = Postgres::new();

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.build_with(&pg).unwrap()));
        });
    }

    group.finish();
}

fn bench_compose_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build/compose_and_build");

    for n in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).build().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_build_postgres, bench_compose_and_build);
criterion_main!(benches);
