//! Benchmarks pour la réconciliation et la conversion GeoJSON → adresse

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geocoder::{map_geojson_to_address, reconcile, FieldDescriptor, FieldType};

fn bench_reconcile(c: &mut Criterion) {
    let field = FieldDescriptor::new("Adresse", FieldType::String, Some(255));

    let mut group = c.benchmark_group("reconcile");
    for size in [64usize, 1024, 16 * 1024] {
        let utf8 = "é".repeat(size / 2);
        let latin1 = vec![0xe9u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("utf8", size), &utf8, |b, input| {
            b.iter(|| black_box(reconcile(black_box(input.as_bytes()), &field)))
        });
        group.bench_with_input(BenchmarkId::new("latin1", size), &latin1, |b, input| {
            b.iter(|| black_box(reconcile(black_box(input), &field)))
        });
    }
    group.finish();
}

fn bench_map_geojson(c: &mut Criterion) {
    let geojson = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[5.7245,45.1885]},"properties":{"streetNumber":"12","streetName":"Rue Félix Poulat","postalCode":"38000","locality":"Grenoble","countryCode":"FRA"}}"#;

    c.bench_function("map_geojson_to_address", |b| {
        b.iter(|| black_box(map_geojson_to_address(black_box(geojson)).unwrap()))
    });
}

criterion_group!(benches, bench_reconcile, bench_map_geojson);
criterion_main!(benches);
