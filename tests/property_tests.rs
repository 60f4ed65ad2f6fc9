//! Property tests for the ring buffer, the integrators and the period formulas

use pendulum_sim::period::{complete_elliptic_k, exact_period, huygens_period};
use pendulum_sim::solvers::{Euler, StepScheme, VelocityVerlet};
use pendulum_sim::{
    IntegrationScheme, PendulumState, PhysicalParameters, RingBuffer, SimulationController,
};
use proptest::prelude::*;

// =============================================================================
// Ring buffer properties
// =============================================================================

proptest! {
    #[test]
    fn ring_buffer_keeps_latest_in_order(
        capacity in 1usize..64,
        values in prop::collection::vec(any::<i32>(), 0..256),
    ) {
        let mut buffer = RingBuffer::new(capacity);
        for v in &values {
            buffer.push(*v);
        }

        let keep = values.len().min(capacity);
        let expected = &values[values.len() - keep..];
        prop_assert_eq!(buffer.len(), keep);
        prop_assert_eq!(buffer.to_vec(), expected.to_vec());
        prop_assert_eq!(buffer.last(), values.last());
    }

    #[test]
    fn ring_buffer_clear_resets(
        capacity in 1usize..32,
        before in 0usize..100,
        after in 0usize..32,
    ) {
        let mut buffer = RingBuffer::new(capacity);
        for i in 0..before {
            buffer.push(i);
        }
        buffer.clear();
        for i in 0..after {
            buffer.push(i);
        }

        let keep = after.min(capacity);
        prop_assert_eq!(buffer.len(), keep);
        prop_assert_eq!(buffer.to_vec(), ((after - keep)..after).collect::<Vec<_>>());
    }
}

// =============================================================================
// Integrator properties
// =============================================================================

proptest! {
    #[test]
    fn schemes_stay_finite_in_ui_ranges(
        gravity in 0.0f64..30.0,
        length in 0.1f64..5.0,
        damping in 0.0f64..3.0,
        dt in 0.001f64..0.5,
        initial_angle in 0.0f64..std::f64::consts::TAU,
        use_verlet in any::<bool>(),
    ) {
        let params = PhysicalParameters { gravity, length, damping, dt, initial_angle };
        let scheme: &dyn StepScheme = if use_verlet { &VelocityVerlet } else { &Euler };
        let mut state = PendulumState::at_rest(initial_angle);

        for _ in 0..200 {
            state = scheme.step(&state, &params, dt);
            prop_assert!(state.angle.is_finite());
            prop_assert!(state.angular_velocity.is_finite());
        }

        prop_assert!((state.elapsed_time - 200.0 * dt).abs() < 1e-9 * (1.0 + 200.0 * dt));
    }

    #[test]
    fn verlet_undamped_energy_bounded(
        length in 0.2f64..5.0,
        initial_angle in 0.05f64..3.0,
    ) {
        let params = PhysicalParameters {
            gravity: 9.81,
            length,
            damping: 0.0,
            dt: 0.005,
            initial_angle,
        };
        let mut state = PendulumState::at_rest(initial_angle);
        let e0 = state.energy(&params);

        for _ in 0..2000 {
            state = VelocityVerlet.step(&state, &params, params.dt);
        }

        let drift = ((state.energy(&params) - e0) / e0).abs();
        prop_assert!(drift < 1e-2, "drift {} at l={}, θ₀={}", drift, length, initial_angle);
    }

    #[test]
    fn controller_trace_lengths_match(
        ticks in 0usize..300,
        capacity in 1usize..128,
        euler in any::<bool>(),
    ) {
        let mut sim = SimulationController::from_config(pendulum_sim::SimulationConfig {
            history_capacity: capacity,
            ..Default::default()
        });
        if euler {
            sim.set_scheme(IntegrationScheme::Euler);
        }
        sim.play();
        for _ in 0..ticks {
            sim.tick(0.01);
        }

        let traces = sim.traces();
        let expected = ticks.min(capacity);
        prop_assert_eq!(traces.angle.len(), expected);
        prop_assert_eq!(traces.velocity.len(), expected);
        prop_assert_eq!(traces.acceleration.len(), expected);
        prop_assert_eq!(traces.phase.len(), expected);
    }
}

// =============================================================================
// Period formula properties
// =============================================================================

proptest! {
    #[test]
    fn elliptic_k_at_least_half_pi(k in -0.999f64..0.999) {
        let value = complete_elliptic_k(k).unwrap();
        prop_assert!(value.is_finite());
        prop_assert!(value >= std::f64::consts::FRAC_PI_2 - 1e-8);
    }

    #[test]
    fn exact_period_never_below_huygens(
        gravity in 0.5f64..30.0,
        length in 0.1f64..5.0,
        initial_angle in 0.0f64..3.1,
    ) {
        let params = PhysicalParameters {
            gravity,
            length,
            damping: 0.0,
            initial_angle,
            ..Default::default()
        };
        let huygens = huygens_period(length, gravity);
        let exact = exact_period(&params).value().unwrap();
        prop_assert!(exact >= huygens * (1.0 - 1e-8));
    }

    #[test]
    fn damping_always_suppresses_exact_period(
        damping in 1e-4f64..3.0,
        initial_angle in 0.0f64..6.28,
    ) {
        let params = PhysicalParameters { damping, initial_angle, ..Default::default() };
        prop_assert!(exact_period(&params).value().is_none());
    }
}
