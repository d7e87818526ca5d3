//! Benchmarks for distance calculation and label formatting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use restroom_geo::{distance_label, haversine_distance, Coordinate};

fn create_test_points(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            // Grid of points around Irvine, CA
            let lat = 33.6 + (i as f64 * 0.001) % 0.2;
            let lng = -117.9 + (i as f64 * 0.001) % 0.2;
            Coordinate::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let user = Coordinate::new(33.6846, -117.8265);
    let restroom = Coordinate::new(33.6405, -117.8443);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&user), black_box(&restroom)))
    });

    c.bench_function("distance_label_single", |b| {
        b.iter(|| distance_label(black_box(&user), black_box(&restroom)))
    });
}

fn bench_result_page_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("result_page_labels");
    let user = Coordinate::new(33.6846, -117.8265);

    for size in [10, 100, 1000].iter() {
        let points = create_test_points(*size);

        group.bench_with_input(BenchmarkId::new("labels", size), size, |b, _| {
            b.iter(|| {
                points
                    .iter()
                    .map(|p| distance_label(black_box(&user), p))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_result_page_labels);
criterion_main!(benches);
