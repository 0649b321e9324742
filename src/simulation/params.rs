//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime tunables:
//! - fixed integration step `dt` and the wall-clock `time_scale`,
//! - the per-frame clamp `max_frame_time` (in scaled seconds),
//! - the gravitational parameter `mu` of the attractor,
//! - the number of steps the trajectory preview runs ahead

use crate::error::{SimError, SimResult};

pub const DEFAULT_DT: f64 = 0.01;
pub const DEFAULT_TIME_SCALE: f64 = 50.0;
pub const DEFAULT_MAX_FRAME_TIME: f64 = 0.25;
pub const DEFAULT_MU: f64 = 1.0;
pub const DEFAULT_TRAJECTORY_HORIZON: usize = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // fixed step size in simulated time units
    pub time_scale: f64, // simulated seconds per real second
    pub max_frame_time: f64, // clamp on scaled frame time
    pub mu: f64, // gravitational parameter of the attractor
    pub trajectory_horizon: usize, // steps simulated by the path preview
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            time_scale: DEFAULT_TIME_SCALE,
            max_frame_time: DEFAULT_MAX_FRAME_TIME,
            mu: DEFAULT_MU,
            trajectory_horizon: DEFAULT_TRAJECTORY_HORIZON,
        }
    }
}

impl Parameters {
    /// Reject tunables the scheduler cannot run with
    pub fn validate(&self) -> SimResult<()> {
        positive("dt", self.dt)?;
        positive("time_scale", self.time_scale)?;
        positive("max_frame_time", self.max_frame_time)?;
        positive("mu", self.mu)?;
        Ok(())
    }

    /// Upper bound on fixed steps a single tick can run
    pub fn max_steps_per_tick(&self) -> usize {
        (self.max_frame_time / self.dt).ceil() as usize
    }
}

fn positive(name: &str, value: f64) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!("{name} must be finite and > 0, got {value}")))
    }
}
