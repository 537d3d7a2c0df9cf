//! Tuning parameters for day-plan generation.

use crate::domain::{BudgetTier, Pace};
use crate::geo::WALKING_SPEED_METERS_PER_MINUTE;

/// Configuration parameters for plan generation.
///
/// The defaults are the production values; tests override individual
/// fields to probe specific behaviours.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Score contribution per matching interest tag.
    pub interest_weight: i64,

    /// Score contribution when a place fits the budget ceiling.
    pub budget_fit_weight: i64,

    /// Per-place cost ceiling for the budget tier (whole units).
    pub budget_ceiling: u32,

    /// Per-place cost ceiling for the mid tier (whole units).
    pub mid_ceiling: u32,

    /// Stops allowed per hour at a relaxed pace.
    pub relaxed_stops_per_hour: f64,

    /// Stops allowed per hour at a standard pace.
    pub standard_stops_per_hour: f64,

    /// Stops allowed per hour at an active pace.
    pub active_stops_per_hour: f64,

    /// Walking speed used to turn distances into travel minutes.
    pub walking_speed_meters_per_minute: f64,

    /// A plan using less than this fraction of the available time
    /// gets an underused-time warning.
    pub underuse_warning_fraction: f64,
}

impl PlanConfig {
    /// Stops-per-hour cap for a pace.
    pub fn stops_per_hour(&self, pace: Pace) -> f64 {
        match pace {
            Pace::Relaxed => self.relaxed_stops_per_hour,
            Pace::Standard => self.standard_stops_per_hour,
            Pace::Active => self.active_stops_per_hour,
        }
    }

    /// Per-place cost ceiling for a budget tier. Splurge has none.
    pub fn budget_ceiling(&self, tier: BudgetTier) -> Option<u32> {
        match tier {
            BudgetTier::Budget => Some(self.budget_ceiling),
            BudgetTier::Mid => Some(self.mid_ceiling),
            BudgetTier::Splurge => None,
        }
    }

    /// Maximum number of stops for a window at a pace. Always at
    /// least one, so a short window still yields a plan.
    pub fn max_stops(&self, available_minutes: i64, pace: Pace) -> usize {
        let hours = available_minutes as f64 / 60.0;
        let cap = (hours * self.stops_per_hour(pace)).floor() as i64;
        cap.max(1) as usize
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            interest_weight: 10,
            budget_fit_weight: 3,
            budget_ceiling: 25,
            mid_ceiling: 90,
            relaxed_stops_per_hour: 0.5,
            standard_stops_per_hour: 1.0,
            active_stops_per_hour: 1.5,
            walking_speed_meters_per_minute: WALKING_SPEED_METERS_PER_MINUTE,
            underuse_warning_fraction: 0.5,
        }
    }
}
