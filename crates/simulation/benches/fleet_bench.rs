use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simulation::fleet::fixtures::default_routes;
use simulation::fleet::{advance_fleet, Bus, FleetState};
use simulation::sim_rng::SimRng;

/// Clone the three fixture buses out to the requested fleet size,
/// spreading them across the fixture routes.
fn fleet_of(size: usize) -> Vec<Bus> {
    let seed = FleetState::seeded().buses;
    (0..size)
        .map(|i| {
            let mut bus = seed[i % seed.len()].clone();
            bus.id = i as u32 + 1;
            bus
        })
        .collect()
}

fn bench_advance_fleet(c: &mut Criterion) {
    let routes = default_routes();

    let mut group = c.benchmark_group("advance_fleet");
    for size in [3usize, 300] {
        let buses = fleet_of(size);
        group.bench_function(format!("{size}_buses"), |b| {
            let mut rng = SimRng::from_seed_u64(1);
            b.iter(|| {
                let next = advance_fleet(black_box(&buses), &routes, &mut rng.0, 3.0);
                black_box(next)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance_fleet);
criterion_main!(benches);
