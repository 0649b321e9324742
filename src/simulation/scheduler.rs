//! Fixed-timestep scheduler
//!
//! Decouples the simulation rate from the display rate. Each call to
//! [`FixedStepScheduler::tick`] turns elapsed wall-clock time into a whole
//! number of fixed integration steps and leaves the remainder in an
//! accumulator. The two most recent states are kept so the renderer can be
//! handed a blend of them at the fraction of a step already elapsed.

use tracing::{debug, error, info, warn};

use super::elements::OrbitalElements;
use super::forces::CentralGravity;
use super::integrator::symplectic_euler;
use super::params::Parameters;
use super::states::SimulationState;
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Paused,
    Running,
    /// A planet reached the attractor; integration has stopped
    Faulted,
}

/// Events produced by the input side
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserInput {
    SetElements { planet: usize, elements: OrbitalElements },
    ToggleRunning,
    Start,
    Stop,
}

/// Outcome of one rendered frame
#[derive(Debug)]
pub struct Tick<'a> {
    pub steps: usize, // fixed steps integrated this frame
    pub alpha: f64, // interpolation factor
    pub state: &'a SimulationState, // blended, read-only render state
}

pub struct FixedStepScheduler {
    params: Parameters,
    gravity: CentralGravity,
    previous: SimulationState,
    current: SimulationState,
    blended: SimulationState,
    accumulator: f64,
    sim_time: f64,
    status: RunStatus,
}

impl FixedStepScheduler {
    /// Build a paused scheduler; both buffers start as copies of `initial`
    pub fn new(params: Parameters, initial: SimulationState) -> SimResult<Self> {
        params.validate()?;
        let gravity = CentralGravity { mu: params.mu };

        Ok(Self {
            params,
            gravity,
            previous: initial.clone(),
            blended: initial.clone(),
            current: initial,
            accumulator: 0.0,
            sim_time: 0.0,
            status: RunStatus::Paused,
        })
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn gravity(&self) -> &CentralGravity {
        &self.gravity
    }

    /// Authoritative state after the most recent step
    pub fn current(&self) -> &SimulationState {
        &self.current
    }

    /// State before the most recent step
    pub fn previous(&self) -> &SimulationState {
        &self.previous
    }

    /// Render state written by the last successful tick
    pub fn blended(&self) -> &SimulationState {
        &self.blended
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Simulated time actually integrated
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn start(&mut self) {
        match self.status {
            RunStatus::Faulted => warn!("start ignored: simulation faulted, reset the orbit first"),
            RunStatus::Running => {}
            RunStatus::Paused => {
                info!("simulation started");
                self.status = RunStatus::Running;
            }
        }
    }

    pub fn stop(&mut self) {
        if self.status == RunStatus::Running {
            info!(sim_time = self.sim_time, "simulation stopped");
            self.status = RunStatus::Paused;
        }
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn apply_input(&mut self, input: UserInput) -> SimResult<()> {
        match input {
            UserInput::SetElements { planet, elements } => self.set_planet_elements(planet, elements),
            UserInput::ToggleRunning => {
                self.toggle();
                Ok(())
            }
            UserInput::Start => {
                self.start();
                Ok(())
            }
            UserInput::Stop => {
                self.stop();
                Ok(())
            }
        }
    }

    /// Recompute planet `index` from orbital elements, relative to the attractor
    ///
    /// Position and velocity are written into both buffers so an edit made
    /// while paused does not produce an interpolation jump. A faulted
    /// simulation goes back to paused.
    pub fn set_planet_elements(&mut self, index: usize, elements: OrbitalElements) -> SimResult<()> {
        if index >= self.current.planets.len() {
            return Err(SimError::NoSuchPlanet(index));
        }
        let sv = elements.to_state_vector(self.params.mu)?;

        for state in [&mut self.current, &mut self.previous, &mut self.blended] {
            let origin = state.attractor.pos;
            let p = &mut state.planets[index];
            p.body.pos = origin + sv.pos;
            p.vel = sv.vel;
        }

        if self.status == RunStatus::Faulted {
            info!("orbit reset, leaving faulted state");
            self.status = RunStatus::Paused;
        }
        debug!(planet = index, x = sv.pos.x, y = sv.pos.y, vx = sv.vel.x, vy = sv.vel.y, "planet elements applied");
        Ok(())
    }

    /// Advance by `elapsed_real_seconds` of wall-clock time
    ///
    /// Returns the number of steps run and the blended render state. When a
    /// planet hits the attractor the scheduler faults and the error is
    /// returned once; later ticks keep draining time without integrating.
    pub fn tick(&mut self, elapsed_real_seconds: f64) -> SimResult<Tick<'_>> {
        // a clock running backwards counts as no time
        let scaled = elapsed_real_seconds.max(0.0) * self.params.time_scale;
        let frame_time = scaled.min(self.params.max_frame_time);
        self.accumulator += frame_time;

        let dt = self.params.dt;
        let mut steps = 0;
        let mut fault = None;

        while self.accumulator > dt {
            if self.status == RunStatus::Running {
                self.previous.copy_from(&self.current);
                match symplectic_euler(&mut self.current, &self.gravity, &self.params) {
                    Ok(()) => {
                        steps += 1;
                        self.sim_time += dt;
                    }
                    Err(e) => {
                        error!(error = %e, sim_time = self.sim_time, "integration halted");
                        self.status = RunStatus::Faulted;
                        fault = Some(e);
                    }
                }
            }
            // drained even while paused: time is dropped, not banked
            self.accumulator -= dt;
        }

        if let Some(e) = fault {
            return Err(e);
        }

        let alpha = self.accumulator / dt;
        self.blended.blend_from(&self.previous, &self.current, alpha);

        debug!(frame_time, steps, alpha, "tick");
        Ok(Tick { steps, alpha, state: &self.blended })
    }
}
