#[macro_use]
extern crate criterion;

extern crate carpool;

use criterion::Criterion;
use carpool::GeoPoint;
use carpool::euclidean::euclidean_distance;
use carpool::flat::FlatDistance;
use carpool::haversine::haversine_distance;
use carpool::Distance;

fn criterion_benchmark(c: &mut Criterion) {
    let point1 = GeoPoint::new(59.9386, 30.3141);
    let point2 = GeoPoint::new(60.0026, 30.2954);
    let flat = FlatDistance::for_points(&[point1, point2]).unwrap();

    c.bench_function("haversine", |b| b.iter(|| haversine_distance(&point1, &point2)));
    c.bench_function("euclidean", |b| b.iter(|| euclidean_distance(&point1, &point2)));
    c.bench_function("flat", |b| b.iter(|| flat.distance(&point1, &point2)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
