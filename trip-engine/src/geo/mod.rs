//! Great-circle geodesy over WGS84-ish coordinates.
//!
//! Everything here treats the Earth as a sphere of mean radius, which
//! is accurate to well under 1% at city walking scale. Distances are
//! in metres, bearings in degrees clockwise from true north.

use crate::domain::GeoPoint;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Assumed walking speed in metres per minute (4.8 km/h).
pub const WALKING_SPEED_METERS_PER_MINUTE: f64 = 80.0;

/// Great-circle distance between two points, in metres.
///
/// # Examples
///
/// ```
/// use trip_engine::domain::GeoPoint;
/// use trip_engine::geo::distance_meters;
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(1.0, 0.0);
/// // one degree of latitude is roughly 111 km
/// assert!((distance_meters(a, b) - 111_195.0).abs() < 10.0);
/// ```
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_METERS * c
}

/// Initial great-circle bearing from `a` towards `b`, in degrees
/// clockwise from north, normalised into `[0, 360)`.
///
/// Coincident points have no defined bearing; 0.0 is returned.
pub fn initial_bearing_degrees(a: GeoPoint, b: GeoPoint) -> f64 {
    if a == b {
        return 0.0;
    }
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Signed turn from `heading_degrees` to `target_degrees`, in
/// `(-180, 180]`. Positive means turn clockwise (right).
///
/// # Examples
///
/// ```
/// use trip_engine::geo::relative_angle_degrees;
///
/// // facing almost north, target just east of north: small right turn
/// assert_eq!(relative_angle_degrees(10.0, 350.0), 20.0);
/// // and the mirror image is a left turn
/// assert_eq!(relative_angle_degrees(350.0, 10.0), -20.0);
/// ```
pub fn relative_angle_degrees(target_degrees: f64, heading_degrees: f64) -> f64 {
    let diff = (target_degrees - heading_degrees).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}

/// Estimated walking time for a distance at the default speed, in
/// whole minutes, rounded up. Any positive distance costs at least
/// one minute; zero or negative distances cost zero.
pub fn estimated_walk_minutes(distance_meters: f64) -> i64 {
    estimated_walk_minutes_at(distance_meters, WALKING_SPEED_METERS_PER_MINUTE)
}

/// Estimated walking time at an explicit speed in metres per minute.
/// The speed must be positive.
pub fn estimated_walk_minutes_at(distance_meters: f64, speed_meters_per_minute: f64) -> i64 {
    if distance_meters <= 0.0 {
        return 0;
    }
    (distance_meters / speed_meters_per_minute).ceil() as i64
}
