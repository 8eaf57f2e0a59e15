use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::angles::day_of_year;

/// A WGS-84 geographic coordinate in decimal degrees.
///
/// Longitude is expected in [-180, 180] and latitude in [-90, 90]. The
/// library does not validate these on every call; out-of-range values
/// propagate through the trig math and may wrap or produce NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoCoordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Both components converted to radians, as `(lon, lat)`.
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.longitude.to_radians(), self.latitude.to_radians())
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.longitude, self.latitude)
    }
}

/// The sun's apparent position in the local sky.
///
/// Elevation is degrees above the horizon (negative below); azimuth is
/// compass degrees in [0, 360), 0° = north, 90° = east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarObservation {
    pub elevation: f64,
    pub azimuth: f64,
}

/// Civil time inputs for the solar position model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeContext {
    /// Fractional local clock hour in [0, 24), including sub-second precision.
    pub local_hour: f64,
    /// Ordinal day of the year, 1..=366.
    pub day_of_year: i32,
    /// Observer's UTC offset in hours (e.g. -6.0 for CST).
    pub utc_offset_hours: f64,
}

impl TimeContext {
    pub fn new(local_hour: f64, day_of_year: i32, utc_offset_hours: f64) -> Self {
        Self {
            local_hour,
            day_of_year,
            utc_offset_hours,
        }
    }

    /// Builds a context from any timezone-aware instant.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        let local_hour = dt.hour() as f64
            + dt.minute() as f64 / 60.0
            + dt.second() as f64 / 3600.0
            + dt.nanosecond() as f64 / 3.6e12;
        Self {
            local_hour,
            day_of_year: day_of_year(dt.year(), dt.month(), dt.day()),
            utc_offset_hours: dt.offset().fix().local_minus_utc() as f64 / 3600.0,
        }
    }
}

/// Estimated sunrise and sunset as fractional local solar hours.
///
/// Saturates to an empty window (both 12.0) during polar night and to the
/// full day (0.0 / 24.0) during polar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunWindow {
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
}
