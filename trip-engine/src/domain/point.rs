//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees (WGS84-ish).
///
/// At city scale no datum correction is needed, so this is a plain
/// latitude/longitude pair. It is an immutable value: cheap to copy,
/// safe to share across threads.
///
/// # Examples
///
/// ```
/// use trip_engine::domain::GeoPoint;
///
/// let colosseum = GeoPoint::new(41.8902, 12.4922);
/// assert_eq!(colosseum.latitude, 41.8902);
/// assert_eq!(colosseum.longitude, 12.4922);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}
