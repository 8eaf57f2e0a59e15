//! Approximate solar position from civil time and location.
//!
//! This is the equation-of-time model (seasonal angle → equation of time →
//! time correction → solar time → hour angle → declination →
//! elevation/azimuth), good to a degree or so — sufficient for lighting and
//! visualization, not astronomical-grade ephemeris work.

use crate::angles::{deg_to_rad, normalize_degrees, rad_to_deg};
use crate::types::{GeoCoordinate, SolarObservation, SunWindow, TimeContext};

/// Earth's axial tilt used by the declination approximation.
pub const AXIAL_TILT_DEGREES: f64 = 23.5;

/// Apparent angular speed of the sun across the sky.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Below this elevation cosine the azimuth denominator is degenerate (sun at
/// the zenith) and the two-solution disambiguation no longer applies.
const ZENITH_EPSILON: f64 = 1e-9;

/// Seasonal angle `B` in radians for a day of the year, zero at the March
/// equinox (day 81).
pub fn seasonal_angle(day_of_year: i32) -> f64 {
    (2.0 * std::f64::consts::PI / 365.0) * (day_of_year - 81) as f64
}

/// Equation of time in minutes: the discrepancy between mean and apparent
/// solar time caused by orbital eccentricity and axial tilt.
pub fn equation_of_time_minutes(day_of_year: i32) -> f64 {
    let b = seasonal_angle(day_of_year);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Minutes to add to local clock time to get solar time, combining the
/// observer's displacement from the timezone's standard meridian with the
/// equation of time.
pub fn time_correction_minutes(longitude_degrees: f64, utc_offset_hours: f64, day_of_year: i32) -> f64 {
    let standard_meridian_degrees = DEGREES_PER_HOUR * utc_offset_hours;
    4.0 * (longitude_degrees - standard_meridian_degrees) + equation_of_time_minutes(day_of_year)
}

/// Apparent (sundial) solar time in fractional hours.
pub fn solar_time_hours(time: &TimeContext, longitude_degrees: f64) -> f64 {
    let correction =
        time_correction_minutes(longitude_degrees, time.utc_offset_hours, time.day_of_year);
    time.local_hour + correction / 60.0
}

/// Hour angle in degrees: zero at solar noon, negative in the morning.
pub fn hour_angle_degrees(solar_time_hours: f64) -> f64 {
    DEGREES_PER_HOUR * (solar_time_hours - 12.0)
}

/// Solar declination in radians for a day of the year.
pub fn declination_radians(day_of_year: i32) -> f64 {
    deg_to_rad(AXIAL_TILT_DEGREES) * seasonal_angle(day_of_year).sin()
}

/// The sun's elevation and azimuth for an observer at `coordinate`.
///
/// Azimuth is compass degrees in [0, 360); the post-noon branch resolves the
/// `acos` two-solution ambiguity. Trig arguments are clamped to [-1, 1] so
/// rounding overshoot at polar latitudes cannot produce NaN; with the sun at
/// the zenith the azimuth is reported as 180° by convention.
pub fn solar_position(time: &TimeContext, coordinate: GeoCoordinate) -> SolarObservation {
    let lat = coordinate.latitude.to_radians();
    let solar_time = solar_time_hours(time, coordinate.longitude);
    let hour_angle = deg_to_rad(hour_angle_degrees(solar_time));
    let declination = declination_radians(time.day_of_year);

    let sin_elevation = declination.sin() * lat.sin()
        + declination.cos() * lat.cos() * hour_angle.cos();
    let elevation = sin_elevation.clamp(-1.0, 1.0).asin();

    let azimuth = if elevation.cos().abs() < ZENITH_EPSILON {
        180.0
    } else {
        let cos_azimuth = (declination.sin() * lat.cos()
            - declination.cos() * lat.sin() * hour_angle.cos())
            / elevation.cos();
        let azimuth = rad_to_deg(cos_azimuth.clamp(-1.0, 1.0).acos());
        if solar_time > 12.0 {
            360.0 - azimuth
        } else {
            azimuth
        }
    };

    SolarObservation {
        elevation: rad_to_deg(elevation),
        azimuth: normalize_degrees(azimuth),
    }
}

/// Hour-angle estimate of sunrise and sunset in local solar time.
///
/// Saturates when the sun never crosses the horizon: an empty noon window
/// during polar night, the full 0–24 h day during polar day.
pub fn sun_window(latitude_degrees: f64, day_of_year: i32) -> SunWindow {
    let lat = deg_to_rad(latitude_degrees);
    let declination = declination_radians(day_of_year);
    let cos_half_day = -lat.tan() * declination.tan();

    if cos_half_day >= 1.0 {
        SunWindow {
            sunrise_hour: 12.0,
            sunset_hour: 12.0,
        }
    } else if cos_half_day <= -1.0 {
        SunWindow {
            sunrise_hour: 0.0,
            sunset_hour: 24.0,
        }
    } else {
        let half_day_hours = rad_to_deg(cos_half_day.acos()) / DEGREES_PER_HOUR;
        SunWindow {
            sunrise_hour: 12.0 - half_day_hours,
            sunset_hour: 12.0 + half_day_hours,
        }
    }
}
