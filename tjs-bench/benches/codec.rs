//! XML codec benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tjs_bench::documents::{gdas, gdas_xml};
use tjs_bench::timing::{benchmark_decode, benchmark_encode};
use tjs_core::{DecodeOptions, EncodeOptions};
use tjs_schema::{Document, GetDataType};

const ROW_COUNTS: [usize; 4] = [10, 100, 1_000, 10_000];

fn benchmark_request_round_trip(c: &mut Criterion) {
    let request = Document::from(GetDataType::new(
        "http://example.org/frameworks/counties",
        "http://example.org/datasets/households",
    ));
    let xml = request.to_xml().expect("Failed to encode");

    let mut group = c.benchmark_group("get_data");
    group.throughput(Throughput::Elements(1));

    group.bench_function("encode", |b| b.iter(|| black_box(request.to_xml())));
    group.bench_function("decode", |b| {
        b.iter(|| black_box(Document::from_xml(black_box(&xml))))
    });

    group.finish();
}

fn benchmark_gdas_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("gdas");
    let lenient = DecodeOptions::default();
    let strict = DecodeOptions::new().with_strict(true);

    for rows in ROW_COUNTS {
        let xml = gdas_xml(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("decode", rows), &xml, |b, xml| {
            b.iter_custom(|iters| benchmark_decode(iters, xml, &lenient))
        });
        group.bench_with_input(BenchmarkId::new("decode_strict", rows), &xml, |b, xml| {
            b.iter_custom(|iters| benchmark_decode(iters, xml, &strict))
        });
    }

    group.finish();
}

fn benchmark_gdas_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("gdas");
    let pretty = EncodeOptions::default();
    let compact = EncodeOptions::new().with_indent(None);

    for rows in ROW_COUNTS {
        let document = Document::from(gdas(rows));
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("encode", rows), &document, |b, document| {
            b.iter_custom(|iters| benchmark_encode(iters, document, &pretty))
        });
        group.bench_with_input(
            BenchmarkId::new("encode_compact", rows),
            &document,
            |b, document| b.iter_custom(|iters| benchmark_encode(iters, document, &compact)),
        );
    }

    group.finish();
}

fn benchmark_gdas_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gdas");

    for rows in [100, 10_000] {
        let document = Document::from(gdas(rows));
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("validate", rows), &document, |b, document| {
            b.iter(|| black_box(document.validate()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_request_round_trip,
    benchmark_gdas_decode,
    benchmark_gdas_encode,
    benchmark_gdas_validate,
);
criterion_main!(benches);
