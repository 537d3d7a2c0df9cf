//! Domain types for the trip engine.
//!
//! This module contains the core domain model types shared by plan
//! generation, route execution, and the catalog. Invariant-carrying
//! types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod budget;
mod error;
mod interest;
mod pace;
mod place;
mod point;
mod range;

pub use budget::BudgetTier;
pub use error::DomainError;
pub use interest::{Interest, UnknownInterest};
pub use pace::Pace;
pub use place::{CandidatePlace, InvalidPlaceId, PlaceId};
pub use point::GeoPoint;
pub use range::{CostRange, DurationRange};
