//! Per-frame placement of the Sun, Earth, and Moon in a 3D scene.
//!
//! The Sun sits at the origin and the orbital plane is `y = 0`. Renderers
//! call [`SceneFrame::at`] once per frame and copy the resulting transforms.

use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use serde::Serialize;
use skyview_core::units::deg_to_rad;
use skyview_core::vector::{self, Vector3};

use crate::angles::{OrbitalAngles, compute_angles};
use crate::ellipse::{EllipseParams, OrbitError, Position2D};

/// Rotation applied to the Earth's spin so texture longitude 0 faces Greenwich.
pub const EARTH_TEXTURE_OFFSET: f64 = 3.0 * PI / 2.0;

/// Earth's obliquity in degrees, applied as a fixed tilt of the globe.
pub const EARTH_AXIAL_TILT_DEG: f64 = 23.44;

/// Interpolation factor applied per frame when the camera chases its target.
pub const CAMERA_SMOOTHING: f64 = 0.05;

/// Orbit shapes for the Earth (around the Sun) and the Moon (around the Earth).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitSystem {
    pub earth: EllipseParams,
    pub moon: EllipseParams,
}

impl Default for OrbitSystem {
    fn default() -> Self {
        Self {
            earth: EllipseParams::EARTH,
            moon: EllipseParams::MOON,
        }
    }
}

impl OrbitSystem {
    /// Build from raw `(semi_major_axis, eccentricity)` pairs, failing fast on bad shapes.
    pub fn new(earth: (f64, f64), moon: (f64, f64)) -> Result<Self, OrbitError> {
        Ok(Self {
            earth: EllipseParams::new(earth.0, earth.1)?,
            moon: EllipseParams::new(moon.0, moon.1)?,
        })
    }
}

/// Everything a renderer needs to place the bodies for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneFrame {
    pub angles: OrbitalAngles,
    /// Earth centre relative to the Sun.
    pub earth_position: Vector3,
    /// Moon centre relative to the Earth.
    pub moon_offset: Vector3,
    /// Moon centre relative to the Sun.
    pub moon_position: Vector3,
    /// Spin of the Earth mesh about its own axis (radians).
    pub earth_spin: f64,
    /// Fixed tilt of the Earth mesh (radians).
    pub earth_tilt: f64,
}

impl SceneFrame {
    /// Compute the frame for `instant`.
    pub fn at(instant: DateTime<Utc>, system: &OrbitSystem) -> Self {
        Self::from_angles(compute_angles(instant), system)
    }

    /// Place the bodies for an already computed angle triple.
    pub fn from_angles(angles: OrbitalAngles, system: &OrbitSystem) -> Self {
        let earth_position = lift(system.earth.position(angles.earth));
        let moon_offset = lift(system.moon.position(angles.moon));
        Self {
            angles,
            earth_position,
            moon_offset,
            moon_position: vector::add(&earth_position, &moon_offset),
            earth_spin: angles.earth_rotation + EARTH_TEXTURE_OFFSET,
            earth_tilt: deg_to_rad(EARTH_AXIAL_TILT_DEG),
        }
    }
}

fn lift(p: Position2D) -> Vector3 {
    [p.x, 0.0, p.z]
}

/// What the camera is framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Sun,
    Earth,
}

impl FocusTarget {
    /// Point the camera looks at.
    pub fn target(self, frame: &SceneFrame) -> Vector3 {
        match self {
            Self::Sun => [0.0, 0.0, 0.0],
            Self::Earth => frame.earth_position,
        }
    }

    /// Camera offset from the target.
    pub fn offset(self) -> Vector3 {
        match self {
            Self::Sun => [0.0, 20.0, 35.0],
            Self::Earth => [0.0, 5.0, 12.0],
        }
    }
}

/// Advance the camera a fraction `smoothing` of the way towards its desired position.
///
/// Returns the new camera position; the look-at point is `focus.target(frame)`.
pub fn camera_step(current: Vector3, frame: &SceneFrame, focus: FocusTarget, smoothing: f64) -> Vector3 {
    let desired = vector::add(&focus.target(frame), &focus.offset());
    vector::lerp(&current, &desired, smoothing)
}
