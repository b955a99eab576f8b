//! Astronomical position model driving the decorative sun/earth/moon view.
//!
//! Everything here is a pure function of time: angles are recomputed from
//! scratch for every frame and nothing is cached. The formulas are the usual
//! low-precision almanac approximations and are only good enough for
//! visualization.

pub mod angles;
pub mod ellipse;
pub mod scene;

pub use angles::{OrbitalAngles, compute_angles, compute_angles_at_millis, normalize_angle, to_julian_date};
pub use ellipse::{EllipseParams, OrbitError, Position2D, ellipse_position, orbit_path};
pub use scene::{FocusTarget, OrbitSystem, SceneFrame, camera_step};
