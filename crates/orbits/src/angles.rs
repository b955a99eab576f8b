//! Solar and lunar ecliptic longitudes plus Greenwich mean sidereal time.

use std::f64::consts::TAU;

use chrono::{DateTime, Utc};
use serde::Serialize;
use skyview_core::constants::DEGREES_PER_TURN;
use skyview_core::time::{days_since_j2000, julian_date_from_millis};
use skyview_core::units::deg_to_rad;

/// Earth, Moon, and Earth-spin angles in radians, each in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalAngles {
    /// Heliocentric ecliptic longitude of the Earth.
    pub earth: f64,
    /// Geocentric ecliptic longitude of the Moon.
    pub moon: f64,
    /// Sidereal rotation phase of the Earth (GMST).
    pub earth_rotation: f64,
}

/// Julian date for an instant.
pub fn to_julian_date(instant: DateTime<Utc>) -> f64 {
    julian_date_from_millis(instant.timestamp_millis())
}

/// Reduce any angle in radians to `[0, 2π)`.
///
/// Uses `floor` rather than the remainder operator so negative inputs wrap
/// onto the positive range instead of staying negative.
pub fn normalize_angle(radians: f64) -> f64 {
    let wrapped = radians - TAU * (radians / TAU).floor();
    // floor() can leave exactly 2π for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Solar mean anomaly in degrees (remainder keeps the sign of `d`).
pub fn solar_mean_anomaly_deg(days: f64) -> f64 {
    (357.529 + 0.985_600_28 * days) % DEGREES_PER_TURN
}

/// Solar mean longitude in degrees.
pub fn solar_mean_longitude_deg(days: f64) -> f64 {
    (280.459 + 0.985_647_36 * days) % DEGREES_PER_TURN
}

/// Apparent solar ecliptic longitude in degrees, not normalized.
pub fn solar_ecliptic_longitude_deg(days: f64) -> f64 {
    let g = deg_to_rad(solar_mean_anomaly_deg(days));
    solar_mean_longitude_deg(days) + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()
}

/// Lunar ecliptic longitude in degrees, not normalized.
pub fn lunar_ecliptic_longitude_deg(days: f64) -> f64 {
    let mean_longitude = (218.316 + 13.176_396 * days) % DEGREES_PER_TURN;
    let mean_anomaly = (134.963 + 13.064_993 * days) % DEGREES_PER_TURN;
    mean_longitude + 6.289 * deg_to_rad(mean_anomaly).sin()
}

/// Greenwich mean sidereal time in degrees, in `[0, 360)`.
pub fn greenwich_mean_sidereal_time_deg(days: f64) -> f64 {
    let gmst = (280.460_618_37 + 360.985_647_366_29 * days) % DEGREES_PER_TURN;
    if gmst < 0.0 { gmst + DEGREES_PER_TURN } else { gmst }
}

/// Compute the angle triple for an instant.
pub fn compute_angles(instant: DateTime<Utc>) -> OrbitalAngles {
    compute_angles_at_millis(instant.timestamp_millis())
}

/// Compute the angle triple for Unix epoch milliseconds.
pub fn compute_angles_at_millis(epoch_millis: i64) -> OrbitalAngles {
    let d = days_since_j2000(julian_date_from_millis(epoch_millis));

    // The Earth sits opposite the apparent direction of the Sun.
    let earth = normalize_angle(deg_to_rad(solar_ecliptic_longitude_deg(d) + 180.0));
    let moon = normalize_angle(deg_to_rad(lunar_ecliptic_longitude_deg(d)));
    let earth_rotation = normalize_angle(deg_to_rad(greenwich_mean_sidereal_time_deg(d)));

    OrbitalAngles {
        earth,
        moon,
        earth_rotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn j2000_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn normalize_stays_in_range_for_extreme_inputs() {
        for x in [
            -1.0e9, -12_345.678, -TAU, -1e-18, 0.0, 1e-18, 3.0, TAU, 7.5 * TAU, 9.9e8,
        ] {
            let n = normalize_angle(x);
            assert!((0.0..TAU).contains(&n), "normalize({x}) = {n}");
        }
    }

    #[test]
    fn normalize_is_periodic() {
        let x = 1.234_5;
        for k in [-50i32, -3, -1, 1, 2, 40] {
            let shifted = normalize_angle(x + TAU * k as f64);
            assert!((shifted - normalize_angle(x)).abs() < 1e-9, "k = {k}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for x in [-100.0, -0.5, 0.25, 6.5, 1_000.0] {
            let once = normalize_angle(x);
            assert_eq!(normalize_angle(once), once);
        }
    }

    #[test]
    fn negative_angle_wraps_forward() {
        let n = normalize_angle(-std::f64::consts::FRAC_PI_2);
        assert!((n - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn julian_date_of_j2000_noon() {
        assert_eq!(to_julian_date(j2000_noon()), 2_451_545.0);
    }

    #[test]
    fn formula_constants_at_epoch() {
        assert!((solar_mean_anomaly_deg(0.0) - 357.529).abs() < 1e-12);
        assert!((solar_mean_longitude_deg(0.0) - 280.459).abs() < 1e-12);
    }

    #[test]
    fn gmst_is_non_negative_before_epoch() {
        let gmst = greenwich_mean_sidereal_time_deg(-10_000.3);
        assert!((0.0..360.0).contains(&gmst));
    }

    #[test]
    fn earth_rotation_at_j2000_noon_matches_gmst_constant() {
        let angles = compute_angles(j2000_noon());
        let expected = normalize_angle(deg_to_rad(280.460_618_37));
        assert!((angles.earth_rotation - expected).abs() < 1e-12);
    }

    #[test]
    fn angles_are_deterministic() {
        let t = Utc.with_ymd_and_hms(2024, 6, 21, 8, 30, 15).unwrap();
        let a = compute_angles(t);
        let b = compute_angles(t);
        assert_eq!(a.earth.to_bits(), b.earth.to_bits());
        assert_eq!(a.moon.to_bits(), b.moon.to_bits());
        assert_eq!(a.earth_rotation.to_bits(), b.earth_rotation.to_bits());
    }

    #[test]
    fn all_angles_normalized_across_decades() {
        for year in [1950, 1999, 2000, 2025, 2100] {
            let t = Utc.with_ymd_and_hms(year, 3, 14, 1, 59, 26).unwrap();
            let a = compute_angles(t);
            for v in [a.earth, a.moon, a.earth_rotation] {
                assert!((0.0..TAU).contains(&v), "{year}: {v}");
            }
        }
    }

    #[test]
    fn earth_longitude_near_march_equinox_is_opposite_the_sun() {
        // Around the March equinox the Sun's longitude is ~0°, so the Earth sits near 180°.
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
        let earth = compute_angles(t).earth;
        assert!((earth - std::f64::consts::PI).abs() < deg_to_rad(1.5));
    }
}
