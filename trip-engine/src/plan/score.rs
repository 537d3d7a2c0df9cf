//! Candidate scoring and selection order.

use std::collections::BTreeSet;

use crate::domain::{CandidatePlace, GeoPoint, Interest};
use crate::geo;
use crate::plan::config::PlanConfig;

/// A candidate paired with its computed score.
#[derive(Debug, Clone)]
pub struct ScoredPlace {
    pub place: CandidatePlace,
    pub score: i64,
}

/// True if a place's worst-case cost sits under the tier ceiling.
/// No ceiling means everything fits.
pub fn fits_budget(place: &CandidatePlace, ceiling: Option<u32>) -> bool {
    match ceiling {
        Some(limit) => place.cost.fits_under(limit),
        None => true,
    }
}

/// Score a candidate for the given tastes.
///
/// The score is a whole number: each matching interest tag earns the
/// interest weight, and fitting under the budget ceiling earns the
/// budget-fit weight on top. Places over the ceiling lose the bonus
/// but stay eligible.
pub fn score_candidate(
    place: &CandidatePlace,
    interests: &BTreeSet<Interest>,
    ceiling: Option<u32>,
    config: &PlanConfig,
) -> i64 {
    let overlap = place.interest_overlap(interests) as i64;
    let mut score = overlap * config.interest_weight;
    if fits_budget(place, ceiling) {
        score += config.budget_fit_weight;
    }
    score
}

/// Order scored places best-first for selection from `anchor`.
///
/// Places are ranked by:
/// 1. Score (higher is better)
/// 2. Walking distance from the anchor (nearer is better)
/// 3. Place id (stable order when all else ties)
///
/// With no anchor, distance is ignored and ties fall through to id.
pub fn rank_for_selection(pool: &mut [ScoredPlace], anchor: Option<GeoPoint>) {
    pool.sort_by(|a, b| {
        // Primary: score, descending
        let score_cmp = b.score.cmp(&a.score);
        if score_cmp != std::cmp::Ordering::Equal {
            return score_cmp;
        }

        // Secondary: nearer to the anchor
        if let Some(from) = anchor {
            let dist_a = geo::distance_meters(from, a.place.position);
            let dist_b = geo::distance_meters(from, b.place.position);
            let dist_cmp = dist_a.total_cmp(&dist_b);
            if dist_cmp != std::cmp::Ordering::Equal {
                return dist_cmp;
            }
        }

        // Tertiary: place id
        a.place.id.cmp(&b.place.id)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CostRange, DurationRange, PlaceId};

    fn place(id: &str, lat: f64, lon: f64, cost_max: u32, tags: &[Interest]) -> CandidatePlace {
        CandidatePlace {
            id: PlaceId::parse(id).unwrap(),
            name: id.to_owned(),
            position: GeoPoint::new(lat, lon),
            visit: DurationRange::new(30, 60).unwrap(),
            cost: CostRange::new(0, cost_max).unwrap(),
            tags: tags.iter().copied().collect(),
            hint: None,
        }
    }

    fn interests(tags: &[Interest]) -> BTreeSet<Interest> {
        tags.iter().copied().collect()
    }

    #[test]
    fn score_counts_overlapping_tags() {
        let config = PlanConfig::default();
        let museum = place(
            "museum",
            0.0,
            0.0,
            10,
            &[Interest::History, Interest::Art, Interest::Architecture],
        );
        let wants = interests(&[Interest::History, Interest::Art, Interest::Food]);

        // two overlapping tags at weight 10, plus the budget bonus
        let score = score_candidate(&museum, &wants, Some(25), &config);
        assert_eq!(score, 2 * 10 + 3);
    }

    #[test]
    fn over_ceiling_loses_bonus_only() {
        let config = PlanConfig::default();
        let pricey = place("gallery", 0.0, 0.0, 60, &[Interest::Art]);
        let wants = interests(&[Interest::Art]);

        let capped = score_candidate(&pricey, &wants, Some(25), &config);
        let uncapped = score_candidate(&pricey, &wants, None, &config);

        assert_eq!(capped, 10);
        assert_eq!(uncapped, 13);
    }

    #[test]
    fn no_overlap_scores_only_the_bonus() {
        let config = PlanConfig::default();
        let park = place("park", 0.0, 0.0, 0, &[Interest::Nature]);
        let wants = interests(&[Interest::Nightlife]);

        assert_eq!(score_candidate(&park, &wants, Some(25), &config), 3);
    }

    #[test]
    fn fits_budget_without_ceiling() {
        let pricey = place("opera", 0.0, 0.0, 500, &[Interest::Art]);
        assert!(fits_budget(&pricey, None));
        assert!(!fits_budget(&pricey, Some(100)));
    }

    #[test]
    fn ranks_by_score_first() {
        let a = ScoredPlace {
            place: place("a", 0.0, 0.0, 0, &[Interest::Art]),
            score: 13,
        };
        let b = ScoredPlace {
            place: place("b", 5.0, 5.0, 0, &[Interest::Art]),
            score: 23,
        };

        let mut pool = vec![a, b];
        rank_for_selection(&mut pool, Some(GeoPoint::new(0.0, 0.0)));

        // b wins on score despite being much further away
        assert_eq!(pool[0].place.id.as_str(), "b");
    }

    #[test]
    fn breaks_score_ties_by_distance() {
        let near = ScoredPlace {
            place: place("near", 0.01, 0.0, 0, &[Interest::Art]),
            score: 13,
        };
        let far = ScoredPlace {
            place: place("far", 0.5, 0.0, 0, &[Interest::Art]),
            score: 13,
        };

        let mut pool = vec![far, near];
        rank_for_selection(&mut pool, Some(GeoPoint::new(0.0, 0.0)));

        assert_eq!(pool[0].place.id.as_str(), "near");
        assert_eq!(pool[1].place.id.as_str(), "far");
    }

    #[test]
    fn breaks_remaining_ties_by_id() {
        let zebra = ScoredPlace {
            place: place("zebra", 0.0, 0.0, 0, &[]),
            score: 5,
        };
        let aardvark = ScoredPlace {
            place: place("aardvark", 0.0, 0.0, 0, &[]),
            score: 5,
        };

        // no anchor: distance never enters into it
        let mut pool = vec![zebra, aardvark];
        rank_for_selection(&mut pool, None);

        assert_eq!(pool[0].place.id.as_str(), "aardvark");
    }
}
