//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors surfaced by the converter, integrator, scheduler and scenario loader
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid orbital elements: {reason}")]
    InvalidElements { reason: String },

    #[error("planet {planet} collided with the attractor (zero separation)")]
    DegenerateState { planet: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no planet with index {0}")]
    NoSuchPlanet(usize),
}

impl SimError {
    pub(crate) fn invalid_elements(reason: impl Into<String>) -> Self {
        Self::InvalidElements { reason: reason.into() }
    }
}
