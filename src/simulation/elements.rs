//! Classical orbital elements and their planar state vector
//!
//! Only closed (elliptical) orbits are accepted: eccentricity in [0, 1)
//! and a positive semi-major axis.

use std::f64::consts::TAU;

use super::states::NVec2;
use crate::error::{SimError, SimResult};

/// Classical planar orbital elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Eccentricity, 0 = circular
    pub eccentricity: f64,
    /// Semi-major axis (world units)
    pub semi_major_axis: f64,
    /// Argument of periapsis (radians)
    pub argument_of_periapsis: f64,
    /// True anomaly as a fraction of a full turn, in [0, 1)
    pub true_anomaly_fraction: f64,
}

/// Raw values as they come out of the UI controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderValues {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub argument_of_periapsis_deg: f64,
    pub true_anomaly_deg: f64,
}

/// Position and velocity of a body relative to the attractor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub pos: NVec2,
    pub vel: NVec2,
}

impl OrbitalElements {
    pub fn new(eccentricity: f64, semi_major_axis: f64, argument_of_periapsis: f64, true_anomaly_fraction: f64) -> Self {
        Self { eccentricity, semi_major_axis, argument_of_periapsis, true_anomaly_fraction }
    }

    /// Periapsis in degrees, true anomaly in degrees (a full turn is 360)
    pub fn from_slider_values(s: SliderValues) -> Self {
        Self {
            eccentricity: s.eccentricity,
            semi_major_axis: s.semi_major_axis,
            argument_of_periapsis: s.argument_of_periapsis_deg.to_radians(),
            true_anomaly_fraction: s.true_anomaly_deg / 360.0,
        }
    }

    pub fn to_slider_values(&self) -> SliderValues {
        SliderValues {
            semi_major_axis: self.semi_major_axis,
            eccentricity: self.eccentricity,
            argument_of_periapsis_deg: self.argument_of_periapsis.to_degrees(),
            true_anomaly_deg: self.true_anomaly_fraction * 360.0,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        let e = self.eccentricity;
        let a = self.semi_major_axis;
        if !(e.is_finite() && (0.0..1.0).contains(&e)) {
            return Err(SimError::invalid_elements(format!("eccentricity must be in [0, 1), got {e}")));
        }
        if !(a.is_finite() && a > 0.0) {
            return Err(SimError::invalid_elements(format!("semi-major axis must be > 0, got {a}")));
        }
        if !self.argument_of_periapsis.is_finite() || !self.true_anomaly_fraction.is_finite() {
            return Err(SimError::invalid_elements("angles must be finite"));
        }
        Ok(())
    }

    /// Orbital period around an attractor with gravitational parameter `mu`
    pub fn period(&self, mu: f64) -> f64 {
        TAU * (self.semi_major_axis.powi(3) / mu).sqrt()
    }

    /// Planar position and velocity for these elements
    pub fn to_state_vector(&self, mu: f64) -> SimResult<StateVector> {
        self.validate()?;
        if !(mu.is_finite() && mu > 0.0) {
            return Err(SimError::invalid_elements(format!("gravitational parameter must be > 0, got {mu}")));
        }

        let e = self.eccentricity;
        let w = self.argument_of_periapsis;
        let nu = self.true_anomaly_fraction * TAU;

        let p = self.semi_major_axis * (1.0 - e * e); // semi-latus rectum
        let r = p / (1.0 + e * nu.cos());
        let (sin_wv, cos_wv) = (w + nu).sin_cos();

        let pos = NVec2::new(r * cos_wv, r * sin_wv);

        // Radial term along the position vector plus transverse term
        let h = (p * mu).sqrt();
        let radial = h * e * nu.sin() / (r * p);
        let vel = NVec2::new(
            pos.x * radial - h / r * sin_wv,
            pos.y * radial + h / r * cos_wv,
        );

        Ok(StateVector { pos, vel })
    }
}

/// Convert `(e, a, ω, ν_fraction)` into a planar state vector
pub fn calc_orbit(e: f64, a: f64, w: f64, v: f64, mu: f64) -> SimResult<StateVector> {
    OrbitalElements::new(e, a, w, v).to_state_vector(mu)
}
