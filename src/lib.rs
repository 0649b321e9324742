pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, Planet, Camera, Color, Line, Drawable, SimulationState, NVec2};
pub use simulation::elements::{OrbitalElements, SliderValues, StateVector, calc_orbit};
pub use simulation::forces::{Acceleration, CentralGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::params::Parameters;
pub use simulation::scheduler::{FixedStepScheduler, RunStatus, Tick, UserInput};
pub use simulation::trajectory::TrajectoryPredictor;
pub use simulation::scenario::{Scenario, Simulation, Frame};

pub use configuration::config::{EngineConfig, ParametersConfig, CameraConfig, SunConfig, PlanetConfig, ScenarioConfig};

pub use visualization::render::{Renderer, RenderStyle, render_frame};
pub use visualization::orbit_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_trajectory};
