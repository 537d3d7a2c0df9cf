//! The route-execution state machine.
//!
//! A `RouteProgress` tracks a traveller walking an ordered list of
//! places. It is a value type: every operation returns an updated
//! copy, so a host can keep old snapshots, replay taps, or render
//! from stale state without the engine caring. Nothing here blocks,
//! allocates long-lived resources, or talks to sensors; the caller
//! feeds in location fixes per call.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CandidatePlace, GeoPoint};
use crate::geo;
use crate::route::leg::{LegOrigin, RouteLeg};

/// Lifecycle of a route.
///
/// `NotStarted → InProgress → {Completed, Exited}`. The two end
/// states are terminal: operations on a finished route return the
/// value unchanged rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStatus {
    NotStarted,
    InProgress,
    Completed,
    Exited,
}

/// Where the ordered place list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKind {
    /// Built by the plan engine for this traveller.
    Generated,
    /// A pre-authored itinerary from the catalog.
    Curated,
}

/// Progress through an ordered list of places.
///
/// Fields are private so the bookkeeping invariants hold for every
/// reachable value: the completed and skipped sets stay disjoint,
/// and together they account for exactly the steps behind the
/// current index. The place list never changes for the life of the
/// value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteProgress {
    route_id: String,
    kind: RouteKind,
    places: Vec<CandidatePlace>,
    current_step: usize,
    completed: BTreeSet<usize>,
    skipped: BTreeSet<usize>,
    status: RouteStatus,
}

impl RouteProgress {
    /// Start walking a route. Returns `None` when `places` is empty;
    /// otherwise progress sits at step 0, in progress.
    pub fn start(
        route_id: impl Into<String>,
        kind: RouteKind,
        places: Vec<CandidatePlace>,
    ) -> Option<Self> {
        let progress = Self::preview(route_id, kind, places)?;
        Some(progress.begin())
    }

    /// Build a route without starting it, for hosts that show an
    /// overview screen first. Returns `None` when `places` is empty.
    /// `begin` moves it to in-progress.
    pub fn preview(
        route_id: impl Into<String>,
        kind: RouteKind,
        places: Vec<CandidatePlace>,
    ) -> Option<Self> {
        if places.is_empty() {
            return None;
        }
        Some(Self {
            route_id: route_id.into(),
            kind,
            places,
            current_step: 0,
            completed: BTreeSet::new(),
            skipped: BTreeSet::new(),
            status: RouteStatus::NotStarted,
        })
    }

    /// Move a previewed route to in-progress. Any other status is
    /// returned unchanged.
    pub fn begin(&self) -> Self {
        if self.status != RouteStatus::NotStarted {
            return self.clone();
        }
        debug!(route_id = %self.route_id, steps = self.places.len(), "route started");
        let mut next = self.clone();
        next.status = RouteStatus::InProgress;
        next
    }

    /// Mark the current step visited and advance. Finishing the last
    /// step completes the route. A route that is not in progress is
    /// returned unchanged, so stray taps never double-count.
    pub fn complete_current_step(&self) -> Self {
        self.advance(StepOutcome::Completed)
    }

    /// Pass over the current step and advance. Symmetric to
    /// `complete_current_step`, recording into the skipped set.
    pub fn skip_current_step(&self) -> Self {
        self.advance(StepOutcome::Skipped)
    }

    /// Abandon the route. The step index and both sets keep their
    /// values for any post-mortem display. Only an in-progress route
    /// can be exited; any other status is returned unchanged.
    pub fn exit(&self) -> Self {
        if self.status != RouteStatus::InProgress {
            return self.clone();
        }
        debug!(
            route_id = %self.route_id,
            step = self.current_step,
            "route exited"
        );
        let mut next = self.clone();
        next.status = RouteStatus::Exited;
        next
    }

    fn advance(&self, outcome: StepOutcome) -> Self {
        if self.status != RouteStatus::InProgress {
            return self.clone();
        }

        let mut next = self.clone();
        match outcome {
            StepOutcome::Completed => next.completed.insert(self.current_step),
            StepOutcome::Skipped => next.skipped.insert(self.current_step),
        };
        next.current_step += 1;
        if next.current_step == next.places.len() {
            next.status = RouteStatus::Completed;
            debug!(
                route_id = %next.route_id,
                completed = next.completed.len(),
                skipped = next.skipped.len(),
                "route completed"
            );
        }
        next
    }

    /// Guidance towards the current step, or `None` when the route is
    /// not in progress.
    ///
    /// The leg is measured from the traveller's position when one is
    /// supplied, else from the previous place on the route. A first
    /// step with no fix has no origin and degenerate geometry (zero
    /// distance, bearing, and walk time).
    pub fn current_leg(&self, current_location: Option<GeoPoint>) -> Option<RouteLeg> {
        if self.status != RouteStatus::InProgress || self.current_step >= self.places.len() {
            return None;
        }

        let to = self.places[self.current_step].clone();
        let origin = match current_location {
            Some(point) => Some(LegOrigin::Traveler(point)),
            None if self.current_step > 0 => {
                Some(LegOrigin::Place(self.places[self.current_step - 1].clone()))
            }
            None => None,
        };

        let (distance_meters, bearing_degrees, walk_minutes) = match &origin {
            Some(origin) => {
                let from = origin.position();
                let distance = geo::distance_meters(from, to.position);
                (
                    distance,
                    geo::initial_bearing_degrees(from, to.position),
                    geo::estimated_walk_minutes(distance),
                )
            }
            None => (0.0, 0.0, 0),
        };

        Some(RouteLeg {
            origin,
            hint: to.hint.clone(),
            is_last_step: self.current_step == self.places.len() - 1,
            to,
            distance_meters,
            bearing_degrees,
            walk_minutes,
        })
    }

    /// True once every step has been resolved. An exited route is
    /// never complete.
    pub fn is_complete(&self) -> bool {
        self.status == RouteStatus::Completed
    }

    /// Fraction of steps resolved so far, in `[0, 1]`.
    pub fn fraction_complete(&self) -> f64 {
        if self.places.is_empty() {
            return 0.0;
        }
        (self.completed.len() + self.skipped.len()) as f64 / self.places.len() as f64
    }

    /// The identifier given at start.
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    /// Whether the route was generated or curated.
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// The ordered places being traversed.
    pub fn places(&self) -> &[CandidatePlace] {
        &self.places
    }

    /// The 0-based current step; equals `places().len()` once done.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Indices of steps marked visited.
    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    /// Indices of steps passed over.
    pub fn skipped(&self) -> &BTreeSet<usize> {
        &self.skipped
    }

    /// The lifecycle status.
    pub fn status(&self) -> RouteStatus {
        self.status
    }
}

enum StepOutcome {
    Completed,
    Skipped,
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
            hint: Some(format!("hint for {id}")),
        }
    }

    fn three_places() -> Vec<CandidatePlace> {
        vec![
            place("one", 48.8500, 2.3500),
            place("two", 48.8600, 2.3500),
            place("three", 48.8700, 2.3500),
        ]
    }

    #[test]
    fn start_rejects_an_empty_route() {
        assert!(RouteProgress::start("r1", RouteKind::Generated, vec![]).is_none());
    }

    #[test]
    fn start_sits_at_the_first_step() {
        let route = RouteProgress::start("r1", RouteKind::Generated, three_places()).unwrap();

        assert_eq!(route.status(), RouteStatus::InProgress);
        assert_eq!(route.current_step(), 0);
        assert!(route.completed().is_empty());
        assert!(route.skipped().is_empty());
        assert_eq!(route.route_id(), "r1");
        assert_eq!(route.kind(), RouteKind::Generated);
    }

    #[test]
    fn completing_every_step_finishes_the_route() {
        let route = RouteProgress::start("r1", RouteKind::Generated, three_places()).unwrap();

        let done = route
            .complete_current_step()
            .complete_current_step()
            .complete_current_step();

        assert_eq!(done.status(), RouteStatus::Completed);
        assert!(done.is_complete());
        assert_eq!(done.completed(), &[0, 1, 2].into());
        assert!(done.skipped().is_empty());
        assert_eq!(done.current_step(), 3);
        assert!(done.current_leg(None).is_none());
    }

    #[test]
    fn skip_then_complete_twice() {
        let route = RouteProgress::start("r1", RouteKind::Curated, three_places()).unwrap();

        let done = route
            .skip_current_step()
            .complete_current_step()
            .complete_current_step();

        assert_eq!(done.status(), RouteStatus::Completed);
        assert_eq!(done.skipped(), &[0].into());
        assert_eq!(done.completed(), &[1, 2].into());
    }

    #[test]
    fn operations_on_a_completed_route_are_no_ops() {
        let route = RouteProgress::start("r1", RouteKind::Generated, three_places()).unwrap();
        let done = route
            .complete_current_step()
            .complete_current_step()
            .complete_current_step();

        assert_eq!(done.complete_current_step(), done);
        assert_eq!(done.skip_current_step(), done);
        assert_eq!(done.exit(), done);
    }

    #[test]
    fn operations_on_an_exited_route_are_no_ops() {
        let route = RouteProgress::start("r1", RouteKind::Generated, three_places()).unwrap();
        let abandoned = route.complete_current_step().exit();

        assert_eq!(abandoned.status(), RouteStatus::Exited);
        assert_eq!(abandoned.complete_current_step(), abandoned);
        assert_eq!(abandoned.skip_current_step(), abandoned);
    }

    #[test]
    fn exit_keeps_the_bookkeeping() {
        let route = RouteProgress::start("r1", RouteKind::Generated, three_places()).unwrap();
        let abandoned = route.complete_current_step().skip_current_step().exit();

        assert_eq!(abandoned.current_step(), 2);
        assert_eq!(abandoned.completed(), &[0].into());
        assert_eq!(abandoned.skipped(), &[1].into());
        assert!(!abandoned.is_complete());
        assert!(abandoned.current_leg(None).is_none());
    }

    #[test]
    fn preview_waits_for_begin() {
        let preview = RouteProgress::preview("r1", RouteKind::Curated, three_places()).unwrap();

        assert_eq!(preview.status(), RouteStatus::NotStarted);
        assert!(preview.current_leg(None).is_none());
        // taps before the route starts change nothing
        assert_eq!(preview.complete_current_step(), preview);
        assert_eq!(preview.skip_current_step(), preview);
        assert_eq!(preview.exit(), preview);

        let started = preview.begin();
        assert_eq!(started.status(), RouteStatus::InProgress);
        assert_eq!(started.current_step(), 0);
        // begin is idempotent
        assert_eq!(started.begin(), started);
    }

    #[test]
    fn leg_from_the_travellers_position() {
        let places = three_places();
        let here = GeoPoint::new(48.8450, 2.3500);
        let route = RouteProgress::start("r1", RouteKind::Generated, places.clone()).unwrap();

        let leg = route.current_leg(Some(here)).unwrap();

        assert_eq!(leg.origin, Some(LegOrigin::Traveler(here)));
        assert_eq!(leg.to, places[0]);
        let expected = geo::distance_meters(here, places[0].position);
        assert_eq!(leg.distance_meters, expected);
        assert_eq!(
            leg.bearing_degrees,
            geo::initial_bearing_degrees(here, places[0].position)
        );
        assert_eq!(leg.walk_minutes, geo::estimated_walk_minutes(expected));
        assert_eq!(leg.hint.as_deref(), Some("hint for one"));
        assert!(!leg.is_last_step);
    }

    #[test]
    fn first_leg_without_a_fix_has_no_origin() {
        let route = RouteProgress::start("r1", RouteKind::Generated, three_places()).unwrap();

        let leg = route.current_leg(None).unwrap();

        assert_eq!(leg.origin, None);
        assert_eq!(leg.distance_meters, 0.0);
        assert_eq!(leg.bearing_degrees, 0.0);
        assert_eq!(leg.walk_minutes, 0);
    }

    #[test]
    fn later_legs_fall_back_to_the_previous_place() {
        let places = three_places();
        let route = RouteProgress::start("r1", RouteKind::Generated, places.clone()).unwrap();
        let after_one = route.complete_current_step();

        let leg = after_one.current_leg(None).unwrap();

        assert_eq!(leg.origin, Some(LegOrigin::Place(places[0].clone())));
        assert_eq!(leg.to, places[1]);
        assert_eq!(
            leg.distance_meters,
            geo::distance_meters(places[0].position, places[1].position)
        );
    }

    #[test]
    fn the_final_leg_is_marked_last() {
        let route = RouteProgress::start("r1", RouteKind::Generated, three_places()).unwrap();
        let at_last = route.complete_current_step().complete_current_step();

        let leg = at_last.current_leg(None).unwrap();
        assert!(leg.is_last_step);
        assert_eq!(leg.to.id.as_str(), "three");
    }

    #[test]
    fn coincident_origin_and_destination_degenerate_cleanly() {
        let places = three_places();
        let route = RouteProgress::start("r1", RouteKind::Generated, places.clone()).unwrap();

        let leg = route.current_leg(Some(places[0].position)).unwrap();

        assert_eq!(leg.distance_meters, 0.0);
        assert_eq!(leg.bearing_degrees, 0.0);
        assert_eq!(leg.walk_minutes, 0);
    }

    #[test]
    fn fraction_complete_steps_up() {
        let route = RouteProgress::start("r1", RouteKind::Generated, three_places()).unwrap();
        assert_eq!(route.fraction_complete(), 0.0);

        let one = route.complete_current_step();
        assert!((one.fraction_complete() - 1.0 / 3.0).abs() < 1e-12);

        let two = one.skip_current_step();
        assert!((two.fraction_complete() - 2.0 / 3.0).abs() < 1e-12);

        let three = two.complete_current_step();
        assert_eq!(three.fraction_complete(), 1.0);
    }

    #[test]
    fn single_place_route() {
        let route =
            RouteProgress::start("r1", RouteKind::Generated, vec![place("only", 48.85, 2.35)])
                .unwrap();

        let leg = route.current_leg(None).unwrap();
        assert!(leg.is_last_step);

        let done = route.complete_current_step();
        assert!(done.is_complete());
        assert_eq!(done.fraction_complete(), 1.0);
    }

    #[test]
    fn a_generated_plan_walks_end_to_end() {
        use crate::catalog::Catalog;
        use crate::domain::{BudgetTier, Interest, Pace};
        use crate::plan::{PlanEngine, PlanInput};
        use chrono::NaiveDate;

        let mut abbey = place("abbey", 48.8530, 2.3499);
        abbey.tags = [Interest::History].into();
        let mut bastion = place("bastion", 48.8606, 2.3376);
        bastion.tags = [Interest::History].into();
        let catalog = Catalog::new(vec![abbey, bastion]).unwrap();

        let input = PlanInput::new(
            300,
            [Interest::History].into(),
            Pace::Standard,
            BudgetTier::Mid,
            NaiveDate::from_ymd_opt(2026, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            catalog.matching_interests(&[Interest::History].into()),
        );
        let plan = PlanEngine::default().generate(&input);
        assert_eq!(plan.stops.len(), 2);

        let stop_ids: Vec<_> = plan.stops.iter().map(|s| s.place_id.clone()).collect();
        let places = catalog.resolve(&stop_ids).unwrap();
        let mut route = RouteProgress::start("day-plan", RouteKind::Generated, places).unwrap();

        let mut walked = 0;
        while let Some(leg) = route.current_leg(None) {
            assert_eq!(leg.to.id, plan.stops[route.current_step()].place_id);
            route = route.complete_current_step();
            walked += 1;
        }

        assert_eq!(walked, 2);
        assert!(route.is_complete());
        assert_eq!(route.fraction_complete(), 1.0);
    }
}
