//! Threshold tables for UV, air quality, pressure, and visibility widgets.

use std::fmt;

use serde::Serialize;
use skyview_core::units::{m_to_km, round_to};

/// Gauge fill as a percentage of `full_scale`, clamped to 100.
pub fn gauge_percent(value: f64, full_scale: f64) -> f64 {
    (value / full_scale * 100.0).min(100.0)
}

/// UV index exposure band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UvBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvBand {
    /// UV index treated as a full gauge.
    pub const FULL_SCALE: f64 = 11.0;

    pub fn classify(uv: f64) -> Self {
        if uv <= 2.0 {
            Self::Low
        } else if uv <= 5.0 {
            Self::Moderate
        } else if uv <= 7.0 {
            Self::High
        } else if uv <= 10.0 {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

/// US AQI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    Hazardous,
}

impl AqiBand {
    /// AQI treated as a full gauge.
    pub const FULL_SCALE: f64 = 300.0;

    pub fn classify(aqi: f64) -> Self {
        if aqi <= 50.0 {
            Self::Good
        } else if aqi <= 100.0 {
            Self::Moderate
        } else if aqi <= 150.0 {
            Self::UnhealthyForSensitiveGroups
        } else if aqi <= 200.0 {
            Self::Unhealthy
        } else {
            Self::Hazardous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Groups",
            Self::Unhealthy => "Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Gauge colour as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            Self::Good => "#00e676",
            Self::Moderate => "#ffd600",
            Self::UnhealthyForSensitiveGroups => "#ff9100",
            Self::Unhealthy => "#ff3d00",
            Self::Hazardous => "#d50000",
        }
    }
}

/// Sea-level pressure tendency relative to the 1010–1015 hPa steady band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureTrend {
    High,
    Steady,
    Low,
}

impl PressureTrend {
    pub fn classify(hpa: f64) -> Self {
        if hpa > 1015.0 {
            Self::High
        } else if hpa < 1010.0 {
            Self::Low
        } else {
            Self::Steady
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::High => "↑",
            Self::Steady => "→",
            Self::Low => "↓",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Pressure",
            Self::Steady => "Steady",
            Self::Low => "Low Pressure",
        }
    }
}

/// Visibility description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisibilityStatus {
    Foggy,
    Haze,
    Clear,
    Excellent,
}

impl VisibilityStatus {
    /// Visibility in kilometres, rounded to one decimal as displayed.
    pub fn display_km(metres: f64) -> f64 {
        round_to(m_to_km(metres), 1)
    }

    /// Classify the displayed (rounded) kilometre value.
    pub fn classify_km(km: f64) -> Self {
        if km < 1.0 {
            Self::Foggy
        } else if km < 5.0 {
            Self::Haze
        } else if km > 10.0 {
            Self::Excellent
        } else {
            Self::Clear
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Foggy => "Foggy",
            Self::Haze => "Haze",
            Self::Clear => "Clear",
            Self::Excellent => "Excellent",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(UvBand, AqiBand, PressureTrend, VisibilityStatus);
