//! Route execution.
//!
//! This module tracks a traveller walking an ordered list of places
//! (a generated plan or a curated itinerary) and computes the live
//! leg towards the next stop: distance, bearing, and walking time
//! from wherever the traveller is now.

mod leg;
mod progress;

pub use leg::{LegOrigin, RouteLeg};
pub use progress::{RouteKind, RouteProgress, RouteStatus};
