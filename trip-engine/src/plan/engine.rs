//! Day-plan generation.
//!
//! This module implements the core planning algorithm that answers:
//! "I have this much free time and these tastes - what should I do?"
//!
//! The algorithm is a bounded greedy pass rather than an optimal
//! subset search. Plans have to be predictable and regenerable, so
//! every choice point is deterministic: candidates are scored with
//! whole numbers, and every ordering falls back to place id.

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, trace};

use crate::domain::{CandidatePlace, GeoPoint};
use crate::geo;
use crate::plan::config::PlanConfig;
use crate::plan::input::PlanInput;
use crate::plan::output::{PlanOutput, PlanStop, PlanWarning};
use crate::plan::score::{ScoredPlace, rank_for_selection, score_candidate};

/// Generates day plans from traveller constraints.
///
/// The engine is pure and re-entrant: `generate` never caches, never
/// touches the clock, and holds no state beyond its configuration, so
/// one engine can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct PlanEngine {
    config: PlanConfig,
}

/// A selected stop before arrival instants are assigned.
struct DraftStop {
    place: CandidatePlace,
    travel_minutes: i64,
    visit_minutes: i64,
}

impl DraftStop {
    fn committed_minutes(&self) -> i64 {
        self.travel_minutes + self.visit_minutes
    }
}

impl PlanEngine {
    /// Create an engine with explicit configuration.
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Generate a day plan.
    ///
    /// The pass runs in four phases:
    /// 1. Filter candidates to those sharing an interest tag, setting
    ///    aside recently-shown places unless that empties the pool.
    /// 2. Score what remains (interest overlap plus budget fit).
    /// 3. Greedily select stops best-first: the highest-scoring
    ///    candidate whose travel plus minimum visit still fits, with
    ///    ties going to the nearest candidate, then lowest id. The
    ///    pace cap bounds how many stops a window may hold.
    /// 4. Spend leftover minutes lengthening visits, earliest stop
    ///    first, up to each place's maximum.
    ///
    /// Identical input always yields an identical plan. Degenerate
    /// input (no time, no interests, nothing matching) yields an
    /// empty plan carrying a warning, never an error.
    pub fn generate(&self, input: &PlanInput) -> PlanOutput {
        if input.available_minutes <= 0 {
            return PlanOutput::empty(vec![PlanWarning::NoTimeAvailable]);
        }
        if input.interests.is_empty() {
            return PlanOutput::empty(vec![PlanWarning::NoInterestsSelected]);
        }

        let pool = self.eligible_pool(input);
        if pool.is_empty() {
            debug!(
                candidates = input.candidates.len(),
                "no candidates match the requested interests"
            );
            return PlanOutput::empty(vec![PlanWarning::NoMatchingPlaces]);
        }

        let mut drafts = self.select_stops(input, pool);
        if drafts.is_empty() {
            debug!(
                available_minutes = input.available_minutes,
                "no candidate fits the window"
            );
            return PlanOutput::empty(vec![PlanWarning::NothingFits]);
        }

        self.extend_visits(input.available_minutes, &mut drafts);

        let total_minutes: i64 = drafts.iter().map(DraftStop::committed_minutes).sum();
        let estimated_cost = drafts.iter().map(|draft| draft.place.cost).sum();

        let mut warnings = Vec::new();
        let underuse_floor =
            input.available_minutes as f64 * self.config.underuse_warning_fraction;
        if (total_minutes as f64) < underuse_floor {
            warnings.push(PlanWarning::UnderusedTime {
                planned_minutes: total_minutes,
                available_minutes: input.available_minutes,
            });
        }

        let stops = schedule(input.reference_time, &drafts);

        debug!(
            stops = stops.len(),
            total_minutes,
            available_minutes = input.available_minutes,
            warnings = warnings.len(),
            "plan generated"
        );

        PlanOutput {
            stops,
            total_minutes,
            estimated_cost,
            warnings,
        }
    }

    /// Filter and score the candidate pool.
    ///
    /// Recently-shown places sit the round out, unless excluding them
    /// would leave nothing to suggest; then they return unpenalised.
    /// The result is sorted by id so later tie-breaks are stable no
    /// matter how the caller ordered the candidates.
    fn eligible_pool(&self, input: &PlanInput) -> Vec<ScoredPlace> {
        let ceiling = self.config.budget_ceiling(input.budget);

        let matching: Vec<&CandidatePlace> = input
            .candidates
            .iter()
            .filter(|place| place.interest_overlap(&input.interests) > 0)
            .collect();

        let fresh: Vec<&CandidatePlace> = matching
            .iter()
            .copied()
            .filter(|place| !input.recent_place_ids.contains(&place.id))
            .collect();
        let pool = if fresh.is_empty() { matching } else { fresh };

        let mut scored: Vec<ScoredPlace> = pool
            .into_iter()
            .map(|place| ScoredPlace {
                score: score_candidate(place, &input.interests, ceiling, &self.config),
                place: place.clone(),
            })
            .collect();

        scored.sort_by(|a, b| a.place.id.cmp(&b.place.id));
        scored
    }

    /// Greedy selection loop.
    ///
    /// Each round re-ranks the remaining pool from the current
    /// position and takes the best candidate that still fits; the
    /// chosen place becomes the anchor for the next round. With no
    /// start point the first stop costs no travel time.
    fn select_stops(&self, input: &PlanInput, mut pool: Vec<ScoredPlace>) -> Vec<DraftStop> {
        let max_stops = self.config.max_stops(input.available_minutes, input.pace);
        let mut drafts: Vec<DraftStop> = Vec::new();
        let mut anchor = input.start_point;
        let mut remaining = input.available_minutes;

        while drafts.len() < max_stops && !pool.is_empty() {
            rank_for_selection(&mut pool, anchor);

            let fitting = pool.iter().position(|candidate| {
                let travel = self.travel_minutes(anchor, &candidate.place);
                travel + candidate.place.visit.min_minutes() <= remaining
            });
            let Some(index) = fitting else {
                break;
            };

            let chosen = pool.remove(index);
            let travel = self.travel_minutes(anchor, &chosen.place);
            let visit = chosen.place.visit.min_minutes();

            trace!(
                place = %chosen.place.id,
                score = chosen.score,
                travel_minutes = travel,
                remaining_minutes = remaining - travel - visit,
                "stop selected"
            );

            remaining -= travel + visit;
            anchor = Some(chosen.place.position);
            drafts.push(DraftStop {
                place: chosen.place,
                travel_minutes: travel,
                visit_minutes: visit,
            });
        }

        drafts
    }

    /// Walking minutes from the anchor to a place; zero with no anchor.
    fn travel_minutes(&self, anchor: Option<GeoPoint>, to: &CandidatePlace) -> i64 {
        match anchor {
            Some(from) => geo::estimated_walk_minutes_at(
                geo::distance_meters(from, to.position),
                self.config.walking_speed_meters_per_minute,
            ),
            None => 0,
        }
    }

    /// Spend leftover minutes lengthening visits, earliest stop first.
    fn extend_visits(&self, available_minutes: i64, drafts: &mut [DraftStop]) {
        let committed: i64 = drafts.iter().map(DraftStop::committed_minutes).sum();
        let mut leftover = available_minutes - committed;

        for draft in drafts.iter_mut() {
            if leftover <= 0 {
                break;
            }
            let headroom = draft.place.visit.max_minutes() - draft.visit_minutes;
            let extra = headroom.min(leftover);
            draft.visit_minutes += extra;
            leftover -= extra;
        }
    }
}

/// Turn drafts into stops with concrete arrival instants, offset from
/// the reference time.
fn schedule(reference_time: NaiveDateTime, drafts: &[DraftStop]) -> Vec<PlanStop> {
    let mut clock = reference_time;
    drafts
        .iter()
        .map(|draft| {
            clock = clock + Duration::minutes(draft.travel_minutes);
            let arrival = clock;
            clock = clock + Duration::minutes(draft.visit_minutes);
            PlanStop {
                place_id: draft.place.id.clone(),
                arrival,
                visit_minutes: draft.visit_minutes,
                travel_minutes: draft.travel_minutes,
            }
        })
        .collect()
}
