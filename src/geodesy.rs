//! Great-circle navigation math over [`GeoCoordinate`].
//!
//! Formulas follow the standard spherical model
//! (<https://www.movable-type.co.uk/scripts/latlong.html>) on a sphere of
//! radius [`EARTH_RADIUS_METERS`]. All functions are pure and total over
//! in-range coordinates; numeric degeneracies (coincident points, rounding
//! overshoot into `asin`/`sqrt`) are handled locally instead of propagating
//! as NaN.

use crate::angles::normalize_degrees;
use crate::types::GeoCoordinate;

/// Equatorial Earth radius in meters, matching the source data this library
/// was built against. Note this is not the 6,371 km mean radius, so
/// distances carry a systematic bias of up to ~0.3 %.
pub const EARTH_RADIUS_METERS: f64 = 6_378_100.0;

/// Rotation offset that re-expresses a true-north bearing relative to a
/// scene's forward (+Z) axis, for engines that put 0° at east.
pub const FORWARD_AXIS_OFFSET: f64 = 90.0;

/// Angular distances below this (radians) are treated as coincident points.
const COINCIDENT_EPSILON: f64 = 1e-12;

/// Haversine great-circle distance in meters.
///
/// Identical coordinates return exactly 0; antipodal points return the
/// maximum `π · R`. The `sqrt` argument is clamped to [0, 1] so rounding
/// overshoot near antipodes cannot produce NaN.
pub fn distance_meters(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let (lon1, lat1) = from.to_radians();
    let (lon2, lat2) = to.to_radians();

    let sin_dlat = ((lat2 - lat1) / 2.0).sin();
    let sin_dlon = ((lon2 - lon1) / 2.0).sin();
    let a = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;

    2.0 * EARTH_RADIUS_METERS * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Initial compass bearing from `from` toward `to`, degrees in [0, 360),
/// 0° = geographic north.
///
/// Bearing is undefined at zero distance; `atan2(0, 0)` makes this return
/// 0 by convention.
pub fn initial_bearing(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    initial_bearing_offset(from, to, 0.0)
}

/// [`initial_bearing`] with a post-rotation applied before normalization.
///
/// The offset is a rendering convention, not geodesy: pass
/// [`FORWARD_AXIS_OFFSET`] to get bearings relative to an engine's forward
/// axis instead of true north.
pub fn initial_bearing_offset(
    from: GeoCoordinate,
    to: GeoCoordinate,
    rotation_offset_degrees: f64,
) -> f64 {
    let (lon1, lat1) = from.to_radians();
    let (lon2, lat2) = to.to_radians();
    let dlon = lon2 - lon1;

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_degrees(x.atan2(y).to_degrees() + rotation_offset_degrees)
}

/// Point on the great-circle arc from `from` to `to` at fraction `t`.
///
/// `t = 0` returns `from` and `t = 1` returns `to` (within floating-point
/// tolerance); intermediate values progress monotonically along the arc.
/// Coincident endpoints would divide by `sin(0)`, so they short-circuit to
/// `from` regardless of `t`.
pub fn intermediate_point(from: GeoCoordinate, to: GeoCoordinate, t: f64) -> GeoCoordinate {
    let (lon1, lat1) = from.to_radians();
    let (lon2, lat2) = to.to_radians();

    let angular_distance = distance_meters(from, to) / EARTH_RADIUS_METERS;
    if angular_distance < COINCIDENT_EPSILON {
        return from;
    }

    let a = ((1.0 - t) * angular_distance).sin() / angular_distance.sin();
    let b = (t * angular_distance).sin() / angular_distance.sin();

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    GeoCoordinate {
        longitude: y.atan2(x).to_degrees(),
        latitude: z.atan2((x * x + y * y).sqrt()).to_degrees(),
    }
}

/// Samples the great circle from `from` to `to` roughly every
/// `segment_meters`, endpoints included.
///
/// The returned polyline always has at least two points (the endpoints), so
/// coincident inputs or an oversized segment length degrade to a straight
/// two-point path rather than an empty one.
pub fn arc_points(
    from: GeoCoordinate,
    to: GeoCoordinate,
    segment_meters: f64,
) -> Vec<GeoCoordinate> {
    let segments = ((distance_meters(from, to) / segment_meters) as usize).max(1);

    (0..=segments)
        .map(|i| intermediate_point(from, to, i as f64 / segments as f64))
        .collect()
}
