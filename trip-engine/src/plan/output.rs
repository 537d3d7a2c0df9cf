//! The generated day plan and its advisory warnings.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{CostRange, PlaceId};

/// One scheduled stop in a generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStop {
    /// The place to visit.
    pub place_id: PlaceId,

    /// When the traveller arrives, derived from the reference time.
    pub arrival: NaiveDateTime,

    /// Minutes allotted to the visit itself.
    pub visit_minutes: i64,

    /// Walking minutes from the previous stop (or the start point).
    /// Zero for a first stop with no start point.
    pub travel_minutes: i64,
}

/// Advisory conditions attached to a plan.
///
/// Warnings never make a plan invalid; they tell the host why the
/// plan is emptier or shorter than the traveller might expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanWarning {
    /// The available window was zero or negative.
    NoTimeAvailable,
    /// The interest set was empty.
    NoInterestsSelected,
    /// No candidate shares a tag with the requested interests.
    NoMatchingPlaces,
    /// Matching candidates existed but none fit the window.
    NothingFits,
    /// The plan fills less of the window than expected.
    UnderusedTime {
        planned_minutes: i64,
        available_minutes: i64,
    },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::NoTimeAvailable => write!(f, "no time available to plan"),
            PlanWarning::NoInterestsSelected => write!(f, "no interests selected"),
            PlanWarning::NoMatchingPlaces => write!(f, "no places match your interests"),
            PlanWarning::NothingFits => write!(f, "not enough time for even one stop"),
            PlanWarning::UnderusedTime {
                planned_minutes,
                available_minutes,
            } => write!(
                f,
                "planned {planned_minutes} of {available_minutes} available minutes"
            ),
        }
    }
}

/// A complete generated plan: the ordered stops plus totals and any
/// warnings raised along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOutput {
    /// Stops in visit order.
    pub stops: Vec<PlanStop>,

    /// Total committed minutes: travel plus visits.
    pub total_minutes: i64,

    /// Summed expected spend across all stops.
    pub estimated_cost: CostRange,

    /// Advisory warnings, in the order they were raised.
    pub warnings: Vec<PlanWarning>,
}

impl PlanOutput {
    /// A plan with no stops and the given warnings.
    pub fn empty(warnings: Vec<PlanWarning>) -> Self {
        Self {
            stops: Vec::new(),
            total_minutes: 0,
            estimated_cost: CostRange::zero(),
            warnings,
        }
    }

    /// True when the plan schedules nothing.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The warnings rendered as display strings, for hosts that just
    /// want text.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}
