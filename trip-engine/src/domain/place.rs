//! Place identifier and catalog place record.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::{CostRange, DurationRange, GeoPoint, Interest};

/// Error returned when parsing an invalid place id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid place id: {reason}")]
pub struct InvalidPlaceId {
    reason: &'static str,
}

/// A validated place identifier.
///
/// Place ids come from the content catalog and are used to cross-reference
/// plan stops and itinerary entries back to their full records. This type
/// guarantees the id is non-empty and contains no whitespace or control
/// characters.
///
/// # Examples
///
/// ```
/// use trip_engine::domain::PlaceId;
///
/// let id = PlaceId::parse("trevi-fountain").unwrap();
/// assert_eq!(id.as_str(), "trevi-fountain");
///
/// // Empty and whitespace-bearing ids are rejected
/// assert!(PlaceId::parse("").is_err());
/// assert!(PlaceId::parse("trevi fountain").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlaceId(String);

impl PlaceId {
    /// Parse a place id from a string.
    ///
    /// The input must be non-empty and free of whitespace and control
    /// characters.
    pub fn parse(s: &str) -> Result<Self, InvalidPlaceId> {
        if s.is_empty() {
            return Err(InvalidPlaceId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidPlaceId {
                reason: "must not contain whitespace or control characters",
            });
        }

        Ok(PlaceId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A place offered to the plan and route engines.
///
/// Candidate places are sourced read-only from the content catalog; the
/// engines never mutate them. The visit-duration and cost ranges carry
/// their own min ≤ max invariants from construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidatePlace {
    /// Unique catalog identifier.
    pub id: PlaceId,
    /// Display name.
    pub name: String,
    /// Geographic position.
    pub position: GeoPoint,
    /// How long a visit typically takes, in minutes.
    pub visit: DurationRange,
    /// Expected spend, in whole currency units.
    pub cost: CostRange,
    /// Interest categories this place belongs to.
    pub tags: BTreeSet<Interest>,
    /// Optional short hint shown while navigating to the place.
    pub hint: Option<String>,
}

impl CandidatePlace {
    /// Number of tags shared with the given interest set.
    pub fn interest_overlap(&self, interests: &BTreeSet<Interest>) -> usize {
        self.tags.intersection(interests).count()
    }
}
