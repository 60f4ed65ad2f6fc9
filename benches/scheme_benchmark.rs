//! Stepping scheme benchmarks
//!
//! Compares per-step cost of Euler and velocity Verlet, and the cost of a full
//! controller tick including period detection and trace recording.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pendulum_sim::solvers::{Euler, StepScheme, VelocityVerlet};
use pendulum_sim::{PendulumState, PhysicalParameters, SimulationConfig, SimulationController};

/// Benchmark a single step of each scheme
fn bench_single_step(c: &mut Criterion) {
    let params = PhysicalParameters::default();
    let state = PendulumState::at_rest(params.initial_angle);

    let mut group = c.benchmark_group("Single Step");
    let schemes: [(&str, &dyn StepScheme); 2] = [("euler", &Euler), ("verlet", &VelocityVerlet)];

    for (name, scheme) in schemes {
        group.bench_function(name, |b| {
            b.iter(|| scheme.step(black_box(&state), black_box(&params), black_box(params.dt)));
        });
    }

    group.finish();
}

/// Benchmark 1000 controller ticks for several history capacities
fn bench_controller_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Controller 1000 ticks");

    for capacity in [100, 2000, 20_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("history_capacity", capacity),
            capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut sim = SimulationController::from_config(SimulationConfig {
                        history_capacity: capacity,
                        ..Default::default()
                    });
                    sim.play();
                    for _ in 0..1000 {
                        sim.tick(black_box(0.01666));
                    }
                    black_box(sim.state().angle);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_step, bench_controller_ticks);
criterion_main!(benches);
