//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – fixed step, time scale, frame clamp, preview horizon
//! - [`ParametersConfig`] – physical constants
//! - [`CameraConfig`]     – initial view
//! - [`SunConfig`]        – the attractor
//! - [`PlanetConfig`]     – orbital elements and looks of each planet
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every engine and parameter field may be omitted and falls back to the
//! defaults in [`crate::simulation::params`].
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   dt: 0.01                  # fixed step in simulated time units
//!   time_scale: 50.0          # simulated seconds per real second
//!   max_frame_time: 0.25      # clamp on scaled frame time
//!   trajectory_horizon: 5000  # preview length in steps
//!
//! parameters:
//!   mu: 1.0                   # gravitational parameter of the sun
//!
//! camera:
//!   x: [0.0, 0.0]
//!   view_height: 30.0
//!
//! sun:
//!   x: [0.0, 0.0]
//!   radius: 1.5
//!   color: [255, 198, 28]
//!
//! planets:
//!   - semi_major_axis: 10.0
//!     eccentricity: 0.3
//!     argument_of_periapsis: 45.0   # degrees
//!     true_anomaly: 0.0             # degrees
//!     radius: 1.0
//!     color: [0, 127, 220]
//! ```

use serde::Deserialize;

use crate::simulation::params::{
    DEFAULT_DT, DEFAULT_MAX_FRAME_TIME, DEFAULT_MU, DEFAULT_TIME_SCALE, DEFAULT_TRAJECTORY_HORIZON,
};

/// Scheduler and preview settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub dt: f64, // fixed integration step
    pub time_scale: f64, // wall-clock multiplier
    pub max_frame_time: f64, // per-frame clamp, scaled seconds
    pub trajectory_horizon: usize, // steps in the path preview
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            time_scale: DEFAULT_TIME_SCALE,
            max_frame_time: DEFAULT_MAX_FRAME_TIME,
            trajectory_horizon: DEFAULT_TRAJECTORY_HORIZON,
        }
    }
}

/// Physical constants
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub mu: f64, // gravitational parameter of the attractor
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self { mu: DEFAULT_MU }
    }
}

/// Initial camera; the aspect ratio comes from the window at runtime
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub x: [f64; 2], // view center
    pub view_height: f64, // visible world height
    pub aspect_ratio: Option<f64>, // overrides the window aspect when set
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            x: [0.0, 0.0],
            view_height: 30.0,
            aspect_ratio: None,
        }
    }
}

/// The attractor
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SunConfig {
    pub x: [f64; 2],
    pub radius: f64,
    pub color: [u8; 3],
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            x: [0.0, 0.0],
            radius: 1.5,
            color: [255, 198, 28],
        }
    }
}

/// A planet described by its orbital elements
/// Angles are in degrees, the way the UI exposes them
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PlanetConfig {
    pub semi_major_axis: f64,
    #[serde(default)]
    pub eccentricity: f64,
    #[serde(default)]
    pub argument_of_periapsis: f64,
    #[serde(default)]
    pub true_anomaly: f64,
    #[serde(default = "default_planet_radius")]
    pub radius: f64,
    #[serde(default = "default_planet_color")]
    pub color: [u8; 3],
}

fn default_planet_radius() -> f64 {
    1.0
}

fn default_planet_color() -> [u8; 3] {
    [0, 127, 220]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub sun: SunConfig,
    pub planets: Vec<PlanetConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
