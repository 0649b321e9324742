//! Forward path preview for the first planet
//!
//! Runs the integrator ahead of the authoritative state for a fixed number of
//! steps and records the segment covered by each one. The path is rebuilt
//! from scratch on every call into a buffer the predictor owns.

use tracing::debug;

use super::forces::Acceleration;
use super::integrator::symplectic_euler;
use super::params::Parameters;
use super::states::{Line, SimulationState};

#[derive(Debug, Default)]
pub struct TrajectoryPredictor {
    lines: Vec<Line>,
}

impl TrajectoryPredictor {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Segments from the last call to [`predict`](Self::predict)
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Predict `params.trajectory_horizon` steps of the first planet
    ///
    /// The path stops early if the planet reaches the attractor.
    pub fn predict<A>(&mut self, current: &SimulationState, gravity: &A, params: &Parameters) -> &[Line]
    where
        A: Acceleration + ?Sized,
    {
        self.lines.clear();
        if current.planets.is_empty() {
            return &self.lines;
        }

        let mut state = current.clone();
        let mut trailing = current.clone();
        if let Err(e) = symplectic_euler(&mut state, gravity, params) {
            debug!(error = %e, "trajectory preview stopped");
            return &self.lines;
        }

        self.lines.reserve(params.trajectory_horizon);
        for _ in 0..params.trajectory_horizon {
            self.lines.push(Line::new(trailing.planets[0].pos(), state.planets[0].pos()));
            trailing.copy_from(&state);
            if let Err(e) = symplectic_euler(&mut state, gravity, params) {
                debug!(error = %e, segments = self.lines.len(), "trajectory preview stopped");
                break;
            }
        }

        &self.lines
    }
}
