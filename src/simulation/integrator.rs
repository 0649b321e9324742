//! Fixed-step time integrator for the two-body system
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked with the current
//! acceleration first, then the position drifts with the new velocity.
//! Swapping the two updates turns it into explicit Euler, whose orbits spiral
//! outward over long runs.

use super::forces::{planet_accels, Acceleration};
use super::params::Parameters;
use super::states::{NVec2, SimulationState};
use crate::error::SimResult;

/// Advance every planet of `state` by one step of `params.dt`
///
/// Accelerations for all planets are evaluated before anything is written, so
/// a degenerate planet leaves the whole state untouched.
pub fn symplectic_euler<A>(state: &mut SimulationState, gravity: &A, params: &Parameters) -> SimResult<()>
where
    A: Acceleration + ?Sized,
{
    let n = state.planets.len();
    if n == 0 { // no planets, return
        return Ok(());
    }

    let dt = params.dt;

    // a_n for each planet at the current positions
    let mut accels: Vec<NVec2> = Vec::with_capacity(n);
    planet_accels(gravity, &state.attractor, &state.planets, &mut accels)?;

    for (p, a) in state.planets.iter_mut().zip(accels.iter()) {
        // telemetry for the debug overlay, not read by the next step
        p.acc = *a;

        // Kick: v_n+1 = v_n + dt * a_n
        p.vel += dt * *a;

        // Drift: x_n+1 = x_n + dt * v_n+1
        p.body.pos += dt * p.vel;
    }

    Ok(())
}
