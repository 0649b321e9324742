//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces:
//! - `Scenario`: runtime parameters, the initial state and the elements each
//!   planet was built from
//! - `Simulation`: the scheduler, the trajectory predictor and the editable
//!   elements, bundled as the Bevy resource the viewer systems work on

use bevy::prelude::Resource;
use tracing::{info, warn};

use crate::configuration::config::{PlanetConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::elements::{OrbitalElements, SliderValues};
use crate::simulation::params::Parameters;
use crate::simulation::scheduler::{FixedStepScheduler, RunStatus, UserInput};
use crate::simulation::states::{Body, Camera, Color, Line, NVec2, Planet, SimulationState};
use crate::simulation::trajectory::TrajectoryPredictor;

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub initial: SimulationState,
    pub elements: Vec<OrbitalElements>,
}

impl Scenario {
    /// `window_aspect` is used unless the config pins an aspect ratio
    pub fn build_scenario(cfg: ScenarioConfig, window_aspect: f64) -> SimResult<Self> {
        // Parameters (runtime) from EngineConfig + ParametersConfig
        let parameters = Parameters {
            dt: cfg.engine.dt,
            time_scale: cfg.engine.time_scale,
            max_frame_time: cfg.engine.max_frame_time,
            mu: cfg.parameters.mu,
            trajectory_horizon: cfg.engine.trajectory_horizon,
        };
        parameters.validate()?;

        if cfg.planets.is_empty() {
            return Err(SimError::InvalidConfig("scenario needs at least one planet".into()));
        }

        let aspect_ratio = cfg.camera.aspect_ratio.unwrap_or(window_aspect);
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(SimError::InvalidConfig(format!("aspect ratio must be > 0, got {aspect_ratio}")));
        }
        let camera = Camera::new(to_vec(cfg.camera.x), cfg.camera.view_height, aspect_ratio);

        let sun_color = to_color(cfg.sun.color);
        let attractor = Body::new(to_vec(cfg.sun.x), cfg.sun.radius, sun_color);

        // Planets: elements -> state vector, offset by the sun position
        let mut elements = Vec::with_capacity(cfg.planets.len());
        let mut planets = Vec::with_capacity(cfg.planets.len());
        for pc in &cfg.planets {
            let el = planet_elements(pc);
            let sv = el.to_state_vector(parameters.mu)?;
            planets.push(Planet::new(attractor.pos + sv.pos, sv.vel, pc.radius, to_color(pc.color)));
            elements.push(el);
        }

        Ok(Self {
            parameters,
            initial: SimulationState::new(camera, attractor, planets),
            elements,
        })
    }
}

fn planet_elements(pc: &PlanetConfig) -> OrbitalElements {
    OrbitalElements::from_slider_values(SliderValues {
        semi_major_axis: pc.semi_major_axis,
        eccentricity: pc.eccentricity,
        argument_of_periapsis_deg: pc.argument_of_periapsis,
        true_anomaly_deg: pc.true_anomaly,
    })
}

fn to_vec(x: [f64; 2]) -> NVec2 {
    NVec2::new(x[0], x[1])
}

fn to_color(c: [u8; 3]) -> Color {
    Color::rgb(c[0], c[1], c[2])
}

/// What the host draws for one frame
#[derive(Debug)]
pub struct Frame<'a> {
    pub steps: usize,
    pub alpha: f64,
    pub state: &'a SimulationState, // blended render state
    pub trajectory: &'a [Line], // preview of the first planet
    pub trajectory_camera: &'a Camera, // authoritative camera the preview is drawn with
}

/// Bevy resource holding the live simulation
#[derive(Resource)]
pub struct Simulation {
    pub scheduler: FixedStepScheduler,
    pub predictor: TrajectoryPredictor,
    elements: Vec<OrbitalElements>,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> SimResult<Self> {
        info!(planets = scenario.initial.planets.len(), dt = scenario.parameters.dt, "building simulation");
        Ok(Self {
            scheduler: FixedStepScheduler::new(scenario.parameters, scenario.initial)?,
            predictor: TrajectoryPredictor::new(),
            elements: scenario.elements,
        })
    }

    /// Elements planet `index` was last set from
    pub fn elements(&self, index: usize) -> Option<&OrbitalElements> {
        self.elements.get(index)
    }

    pub fn status(&self) -> RunStatus {
        self.scheduler.status()
    }

    /// Apply an input event, keeping the stored elements in sync
    pub fn apply_input(&mut self, input: UserInput) -> SimResult<()> {
        self.scheduler.apply_input(input)?;
        if let UserInput::SetElements { planet, elements } = input {
            self.elements[planet] = elements;
        }
        Ok(())
    }

    /// Edit the UI values of planet `index` and apply them
    ///
    /// Rejected values leave both the elements and the state unchanged.
    pub fn edit_elements(&mut self, index: usize, edit: impl FnOnce(&mut SliderValues)) -> SimResult<()> {
        let current = *self.elements.get(index).ok_or(SimError::NoSuchPlanet(index))?;
        let mut values = current.to_slider_values();
        edit(&mut values);

        let elements = OrbitalElements::from_slider_values(values);
        let result = self.apply_input(UserInput::SetElements { planet: index, elements });
        if let Err(e) = &result {
            warn!(error = %e, "element edit rejected");
        }
        result
    }

    /// Run one rendered frame: fixed steps, blend, then the path preview
    pub fn advance(&mut self, elapsed_real_seconds: f64) -> SimResult<Frame<'_>> {
        let Simulation { scheduler, predictor, .. } = self;

        let (steps, alpha) = {
            let tick = scheduler.tick(elapsed_real_seconds)?;
            (tick.steps, tick.alpha)
        };
        predictor.predict(scheduler.current(), scheduler.gravity(), scheduler.params());

        Ok(Frame {
            steps,
            alpha,
            state: scheduler.blended(),
            trajectory: predictor.lines(),
            trajectory_camera: &scheduler.current().camera,
        })
    }
}
