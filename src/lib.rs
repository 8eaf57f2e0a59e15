pub mod angles;
pub mod geodesy;
pub mod solar;
pub mod types;

pub use angles::{
    day_of_year, deg_to_rad, days_in_months, leap_year, normalize_degrees, rad_to_deg, remap,
};

pub use geodesy::{
    arc_points, distance_meters, initial_bearing, initial_bearing_offset, intermediate_point,
    EARTH_RADIUS_METERS, FORWARD_AXIS_OFFSET,
};

pub use solar::{
    declination_radians, equation_of_time_minutes, hour_angle_degrees, seasonal_angle,
    solar_position, solar_time_hours, sun_window, time_correction_minutes, AXIAL_TILT_DEGREES,
    DEGREES_PER_HOUR,
};

pub use types::{GeoCoordinate, SolarObservation, SunWindow, TimeContext};
