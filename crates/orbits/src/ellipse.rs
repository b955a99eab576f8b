//! Keplerian ellipse geometry in polar form, measured from the focus.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position of a body in its orbital plane (scene units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub z: f64,
}

impl Position2D {
    /// Distance from the focus.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.z)
    }
}

/// Errors raised when an orbit is configured with impossible parameters.
#[derive(Debug, Error, PartialEq)]
pub enum OrbitError {
    #[error(
        "invalid orbit configuration: semi-major axis {semi_major_axis} and eccentricity {eccentricity} do not describe an ellipse"
    )]
    InvalidOrbitConfiguration {
        semi_major_axis: f64,
        eccentricity: f64,
    },
}

/// Shape of a closed orbit: semi-major axis and eccentricity in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EllipseParams {
    semi_major_axis: f64,
    eccentricity: f64,
}

impl EllipseParams {
    /// Earth's orbit around the Sun in scene units.
    pub const EARTH: EllipseParams = EllipseParams {
        semi_major_axis: 18.0,
        eccentricity: 0.0167,
    };

    /// Moon's orbit around the Earth in scene units.
    pub const MOON: EllipseParams = EllipseParams {
        semi_major_axis: 4.0,
        eccentricity: 0.0549,
    };

    /// Validate and build an ellipse.
    pub fn new(semi_major_axis: f64, eccentricity: f64) -> Result<Self, OrbitError> {
        let axis_ok = semi_major_axis.is_finite() && semi_major_axis > 0.0;
        let ecc_ok = eccentricity.is_finite() && (0.0..1.0).contains(&eccentricity);
        if !axis_ok || !ecc_ok {
            return Err(OrbitError::InvalidOrbitConfiguration {
                semi_major_axis,
                eccentricity,
            });
        }
        Ok(Self {
            semi_major_axis,
            eccentricity,
        })
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Closest approach to the focus, `a(1 - e)`.
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus, `a(1 + e)`.
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Position on this ellipse at the given angle.
    pub fn position(&self, angle: f64) -> Position2D {
        ellipse_position(self.semi_major_axis, self.eccentricity, angle)
    }
}

/// Polar ellipse equation `r = a(1-e²)/(1+e·cos θ)`.
///
/// The caller guarantees `eccentricity` lies in `[0, 1)`; use
/// [`EllipseParams::new`] to check that up front.
pub fn ellipse_position(semi_major_axis: f64, eccentricity: f64, angle: f64) -> Position2D {
    let r = semi_major_axis * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * angle.cos());
    Position2D {
        x: r * angle.cos(),
        z: r * angle.sin(),
    }
}

/// Sample a closed orbit with `segments + 1` points; the last point repeats the first.
pub fn orbit_path(params: &EllipseParams, segments: usize) -> Vec<Position2D> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| params.position(i as f64 / segments as f64 * TAU))
        .collect()
}
