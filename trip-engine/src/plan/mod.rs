//! Day-plan generation.
//!
//! This module turns a traveller's constraints (time window, tastes,
//! pace, budget) and a pool of candidate places into an ordered day
//! plan. Selection is a deterministic greedy pass: explainable and
//! regenerable rather than combinatorially optimal.

mod config;
mod engine;
mod input;
mod output;
mod score;

pub use config::PlanConfig;
pub use engine::PlanEngine;
pub use input::PlanInput;
pub use output::{PlanOutput, PlanStop, PlanWarning};
