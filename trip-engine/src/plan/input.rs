//! The request shape handed to plan generation.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::domain::{BudgetTier, CandidatePlace, GeoPoint, Interest, Pace, PlaceId};

/// Everything plan generation needs to know about the traveller and
/// the day: the time window, tastes, and the candidate pool to draw
/// from. Plain data; the engine never mutates it.
#[derive(Debug, Clone)]
pub struct PlanInput {
    /// Length of the free window, in minutes.
    pub available_minutes: i64,

    /// Where the traveller starts, if known. Without it the first
    /// stop is chosen purely on score and costs no travel time.
    pub start_point: Option<GeoPoint>,

    /// The interests to plan around. An empty set cannot be planned
    /// for and yields an empty plan with a warning.
    pub interests: BTreeSet<Interest>,

    /// How densely to pack the day.
    pub pace: Pace,

    /// Spending appetite, used to deprioritise costly places.
    pub budget: BudgetTier,

    /// Local wall-clock time the window opens; stop arrival times
    /// are offsets from this instant.
    pub reference_time: NaiveDateTime,

    /// The pool of places the plan may draw from.
    pub candidates: Vec<CandidatePlace>,

    /// Places visited recently. Excluded from selection unless that
    /// would leave nothing to suggest.
    pub recent_place_ids: BTreeSet<PlaceId>,
}

impl PlanInput {
    /// Build an input with no start point and no recent places.
    pub fn new(
        available_minutes: i64,
        interests: BTreeSet<Interest>,
        pace: Pace,
        budget: BudgetTier,
        reference_time: NaiveDateTime,
        candidates: Vec<CandidatePlace>,
    ) -> Self {
        Self {
            available_minutes,
            start_point: None,
            interests,
            pace,
            budget,
            reference_time,
            candidates,
            recent_place_ids: BTreeSet::new(),
        }
    }
}
