use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hifitime::{Duration, Epoch};
use nalgebra::Vector3;

use iss_tracker::{
    epoch_matcher::find_closest, oem::StateVector, speed::average_speed, time::format_epoch,
};

/// Fifteen days of samples at the ISS feed cadence (one every 4 minutes).
fn fifteen_days() -> Vec<StateVector> {
    let start = Epoch::from_gregorian_utc_at_midnight(2024, 3, 1);
    (0..15 * 24 * 15)
        .map(|i| {
            let epoch = start + Duration::from_seconds(240.0 * i as f64);
            let phase = i as f64 * 0.27;
            StateVector::new(
                format_epoch(epoch),
                Vector3::new(6790.0 * phase.cos(), 6790.0 * phase.sin(), 0.0),
                Vector3::new(-7.66 * phase.sin(), 7.66 * phase.cos(), 0.0),
            )
        })
        .collect()
}

fn bench_find_closest(c: &mut Criterion) {
    let entries = fifteen_days();
    let reference = Epoch::from_gregorian_utc(2024, 3, 8, 13, 37, 0, 0);

    c.bench_function("find_closest_15_days", |b| {
        b.iter(|| find_closest(black_box(&entries), black_box(reference)))
    });
}

fn bench_average_speed(c: &mut Criterion) {
    let entries = fifteen_days();

    c.bench_function("average_speed_15_days", |b| {
        b.iter(|| average_speed(black_box(&entries)))
    });
}

criterion_group!(benches, bench_find_closest, bench_average_speed);
criterion_main!(benches);
