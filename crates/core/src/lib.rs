//! Core constants, unit conversions, and shared primitives for the Skyview workspace.

/// Astronomical and calendar constants.
pub mod constants {
    /// Milliseconds per day.
    pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
    /// Julian date of the Unix epoch (1970-01-01T00:00:00Z).
    pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
    /// Julian date of the J2000.0 epoch (2000-01-01T12:00:00 TT).
    pub const J2000_JD: f64 = 2_451_545.0;
    /// Full turn in degrees.
    pub const DEGREES_PER_TURN: f64 = 360.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * std::f64::consts::PI / 180.0
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v * 180.0 / std::f64::consts::PI
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Round to a fixed number of decimal places.
    #[inline]
    pub fn round_to(v: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (v * factor).round() / factor
    }
}

/// Julian-date helpers shared across crates.
pub mod time {
    use super::constants::{J2000_JD, MILLIS_PER_DAY, UNIX_EPOCH_JD};

    /// Convert Unix epoch milliseconds to a Julian date.
    #[inline]
    pub fn julian_date_from_millis(epoch_millis: i64) -> f64 {
        epoch_millis as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
    }

    /// Days elapsed since J2000.0 for the given Julian date.
    #[inline]
    pub fn days_since_j2000(julian_date: f64) -> f64 {
        julian_date - J2000_JD
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in scene units.
    pub type Vector3 = [f64; 3];

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Move `from` a fraction `t` of the way towards `to`.
    #[inline]
    pub fn lerp(from: &Vector3, to: &Vector3, t: f64) -> Vector3 {
        add(from, &scale(&sub(to, from), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_maps_to_its_julian_date() {
        assert_eq!(time::julian_date_from_millis(0), constants::UNIX_EPOCH_JD);
    }

    #[test]
    fn j2000_noon_is_day_zero() {
        // 2000-01-01T12:00:00Z
        let jd = time::julian_date_from_millis(946_728_000_000);
        assert!((time::days_since_j2000(jd)).abs() < 1e-9);
    }

    #[test]
    fn lerp_moves_partway() {
        let p = vector::lerp(&[0.0, 0.0, 0.0], &[10.0, -20.0, 5.0], 0.5);
        assert_eq!(p, [5.0, -10.0, 2.5]);
    }

    #[test]
    fn degree_radian_round_trip_for_right_angle() {
        assert!((units::deg_to_rad(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((units::rad_to_deg(std::f64::consts::PI) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn round_to_one_decimal() {
        assert_eq!(units::round_to(0.96, 1), 1.0);
        assert_eq!(units::round_to(4.94, 1), 4.9);
    }
}
