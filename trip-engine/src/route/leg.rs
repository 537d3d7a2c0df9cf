//! The navigation leg handed to the caller each time it polls.

use serde::Serialize;

use crate::domain::{CandidatePlace, GeoPoint};

/// Where a leg is measured from.
///
/// A leg starts either at the traveller's live position or, when no
/// fix is available, at the previous place on the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegOrigin {
    /// The traveller's reported position.
    Traveler(GeoPoint),
    /// The place resolved immediately before the current step.
    Place(CandidatePlace),
}

impl LegOrigin {
    /// The coordinate the leg is measured from.
    pub fn position(&self) -> GeoPoint {
        match self {
            LegOrigin::Traveler(point) => *point,
            LegOrigin::Place(place) => place.position,
        }
    }
}

/// Live guidance towards the current step of a route.
///
/// Distance and bearing are straight-line values; walk minutes come
/// from the shared walking-speed constant. With no origin at all
/// (first step, no fix) the geometry degenerates to zeroes and the
/// caller should show the destination without an arrow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    /// Where the leg is measured from, if anywhere.
    pub origin: Option<LegOrigin>,

    /// The place being walked towards.
    pub to: CandidatePlace,

    /// Straight-line distance in metres. Zero without an origin.
    pub distance_meters: f64,

    /// Initial bearing in degrees `[0, 360)`. Zero without an origin.
    pub bearing_degrees: f64,

    /// Estimated walking minutes. Zero without an origin.
    pub walk_minutes: i64,

    /// The destination's hint text, when it has one.
    pub hint: Option<String>,

    /// True when this leg ends the route.
    pub is_last_step: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CostRange, DurationRange, PlaceId};

    fn place(id: &str, lat: f64, lon: f64) -> CandidatePlace {
        CandidatePlace {
            id: PlaceId::parse(id).unwrap(),
            name: id.to_owned(),
            position: GeoPoint::new(lat, lon),
            visit: DurationRange::new(20, 40).unwrap(),
            cost: CostRange::zero(),
            tags: Default::default(),
            hint: None,
        }
    }

    #[test]
    fn origin_position_for_traveler() {
        let here = GeoPoint::new(48.85, 2.35);
        assert_eq!(LegOrigin::Traveler(here).position(), here);
    }

    #[test]
    fn origin_position_for_place() {
        let cafe = place("cafe", 48.86, 2.36);
        let origin = LegOrigin::Place(cafe.clone());
        assert_eq!(origin.position(), cafe.position);
    }
}
