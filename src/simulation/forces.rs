//! Acceleration sources for the two-body engine
//!
//! Only the attractor pulls on planets; planets never pull on each other
//! or on the attractor.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, NVec2, Planet};

/// Trait for acceleration sources acting on a single planet
pub trait Acceleration {
    /// Acceleration felt by a body at `pos` due to `attractor`
    /// Returns `None` when the separation is zero or not finite
    fn acceleration(&self, attractor: &Body, pos: NVec2) -> Option<NVec2>;
}

/// Inverse-square attraction toward a fixed attractor
#[derive(Debug, Clone, Copy)]
pub struct CentralGravity {
    pub mu: f64, // gravitational parameter of the attractor
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, attractor: &Body, pos: NVec2) -> Option<NVec2> {
        // displacement from the planet toward the attractor
        let r = attractor.pos - pos;
        let dist = r.norm();
        if dist == 0.0 || !dist.is_finite() {
            return None;
        }

        // a = mu * r_hat / |r|^2
        Some(self.mu * (r / dist) / (dist * dist))
    }
}

/// Accelerations for every planet, or the index of the first degenerate one
pub fn planet_accels<A: Acceleration + ?Sized>(gravity: &A, attractor: &Body, planets: &[Planet], out: &mut Vec<NVec2>) -> SimResult<()> {
    out.clear();
    for (i, planet) in planets.iter().enumerate() {
        let a = gravity
            .acceleration(attractor, planet.pos())
            .ok_or(SimError::DegenerateState { planet: i })?;
        out.push(a);
    }
    Ok(())
}

/// Specific orbital energy `v^2/2 - mu/r` of a planet around the attractor
pub fn specific_orbital_energy(attractor: &Body, planet: &Planet, mu: f64) -> f64 {
    let r = (planet.pos() - attractor.pos).norm();
    0.5 * planet.vel.norm_squared() - mu / r
}

/// Specific angular momentum (z component of r x v) relative to the attractor
pub fn specific_angular_momentum(attractor: &Body, planet: &Planet) -> f64 {
    let r = planet.pos() - attractor.pos;
    r.x * planet.vel.y - r.y * planet.vel.x
}
