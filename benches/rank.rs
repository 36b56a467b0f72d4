#[macro_use]
extern crate criterion;

extern crate carpool;

use criterion::Criterion;
use uuid::Uuid;

use carpool::{DistancePolicy, GeoPoint, Participants, Person};
use carpool::rank::suggest_all;

fn people(n: usize, offset: f32) -> Vec<Person> {
    (0..n)
        .map(|i| {
            let step = (i as f32 * 0.618 + offset).fract();
            Person::new(Uuid::from_u128(i as u128), GeoPoint::new(59.8 + step * 0.25, 30.1 + step * 0.45))
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let participants = Participants {
        passengers: people(100, 0.),
        drivers: people(1000, 0.5),
    };
    let points = participants.drivers.iter().map(|d| d.finish_point).collect::<Vec<_>>();

    for &policy in &[DistancePolicy::Haversine, DistancePolicy::Flat] {
        let strategy = policy.strategy(&points);
        c.bench_function(&format!("suggest_all {}", policy), |b| {
            b.iter(|| suggest_all(&participants, strategy.as_ref()))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
