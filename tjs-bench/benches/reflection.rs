//! Reflective access benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tjs_bench::documents::gdas;
use tjs_core::{Observed, Reflective, Value};
use tjs_schema::{GDASType, KType, RowType1, RowsetType1, VType, factory};

fn benchmark_feature_get(c: &mut Criterion) {
    let gdas = gdas(1);
    let object: &dyn Reflective = &gdas;

    c.bench_function("typed_get", |b| b.iter(|| black_box(black_box(&gdas).lang())));

    c.bench_function("e_get", |b| {
        b.iter(|| black_box(object.e_get(black_box(GDASType::LANG))))
    });

    c.bench_function("e_get_by_name", |b| {
        b.iter(|| black_box(object.e_get_by_name(black_box("lang"))))
    });
}

fn benchmark_feature_set(c: &mut Criterion) {
    c.bench_function("typed_set", |b| {
        let mut cell = VType::default();
        b.iter(|| cell.set_value(black_box("1024")))
    });

    c.bench_function("e_set", |b| {
        let mut cell = VType::default();
        b.iter(|| cell.e_set(VType::VALUE, Value::from(black_box("1024"))))
    });

    c.bench_function("observed_set", |b| {
        let mut cell = Observed::new(VType::default());
        cell.add_observer(|notification: &tjs_core::Notification| {
            black_box(notification);
        });
        b.iter(|| cell.set(VType::VALUE, Value::from(black_box("1024"))))
    });
}

fn benchmark_observed_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("observed_add");
    for rows in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(rows));
        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, &rows| {
            b.iter(|| {
                let mut rowset = Observed::new(RowsetType1::default());
                rowset.add_observer(|notification: &tjs_core::Notification| {
                    black_box(notification);
                });
                for i in 0..rows {
                    let row = RowType1::default()
                        .with_k(KType::new(i.to_string()))
                        .with_v(VType::new("1"));
                    let _ = rowset.add(RowsetType1::ROW, Value::object(row));
                }
                black_box(rowset.into_inner())
            })
        });
    }
    group.finish();
}

fn benchmark_tree_walk(c: &mut Criterion) {
    let gdas = gdas(1_000);

    c.bench_function("visit_children_1000_rows", |b| {
        b.iter(|| {
            let mut count = 0usize;
            walk(&gdas, &mut count);
            black_box(count)
        })
    });

    c.bench_function("clone_boxed_1000_rows", |b| {
        b.iter(|| black_box(gdas.clone_boxed()))
    });
}

fn benchmark_factory(c: &mut Criterion) {
    c.bench_function("factory_create", |b| {
        b.iter(|| black_box(factory::create(black_box("ColumnType1"))))
    });
}

fn walk(object: &dyn Reflective, count: &mut usize) {
    *count += 1;
    object.visit_children(&mut |_, child| walk(child, count));
}

criterion_group!(
    benches,
    benchmark_feature_get,
    benchmark_feature_set,
    benchmark_observed_append,
    benchmark_tree_walk,
    benchmark_factory,
);
criterion_main!(benches);
