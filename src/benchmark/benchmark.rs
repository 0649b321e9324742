use std::time::Instant;

use tracing::info;

use crate::simulation::elements::OrbitalElements;
use crate::simulation::forces::CentralGravity;
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Camera, Color, NVec2, Planet, SimulationState};
use crate::simulation::trajectory::TrajectoryPredictor;

/// Deterministic ring of planets on slightly different orbits
fn bench_state(n: usize, mu: f64) -> SimulationState {
    let planets = (0..n)
        .filter_map(|i| {
            let i_f = i as f64;
            let el = OrbitalElements::new(
                (i_f * 0.37).sin().abs() * 0.5,
                5.0 + (i_f * 0.13).cos() * 2.0,
                i_f * 0.07,
                (i_f * 0.11).fract(),
            );
            let sv = el.to_state_vector(mu).ok()?;
            Some(Planet::new(sv.pos, sv.vel, 0.1, Color::default()))
        })
        .collect();

    SimulationState::new(
        Camera::new(NVec2::zeros(), 30.0, 16.0 / 9.0),
        Body::new(NVec2::zeros(), 1.5, Color::rgb(255, 198, 28)),
        planets,
    )
}

/// Time one integrator step for growing planet counts
pub fn bench_step() {
    let params = Parameters::default();
    let gravity = CentralGravity { mu: params.mu };
    let steps = 1000;

    for n in [1, 10, 100, 1000, 10000] {
        let mut state = bench_state(n, params.mu);

        // Warm up
        let _ = symplectic_euler(&mut state, &gravity, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            if symplectic_euler(&mut state, &gravity, &params).is_err() {
                break;
            }
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        info!("N = {n:5}, step = {:10.3} us", per_step * 1e6);
    }
}

/// Time the path preview for growing horizons
pub fn bench_trajectory() {
    let mut params = Parameters::default();
    let gravity = CentralGravity { mu: params.mu };
    let state = bench_state(1, params.mu);
    let mut predictor = TrajectoryPredictor::new();

    for horizon in [500, 1000, 5000, 10000, 50000] {
        params.trajectory_horizon = horizon;

        // Warm up
        predictor.predict(&state, &gravity, &params);

        let t0 = Instant::now();
        let segments = predictor.predict(&state, &gravity, &params).len();
        let elapsed = t0.elapsed().as_secs_f64();

        info!("horizon = {horizon:6}, segments = {segments:6}, predict = {:8.3} ms", elapsed * 1e3);
    }
}
