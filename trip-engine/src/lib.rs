//! Travel companion core.
//!
//! A library that answers two questions: "I have an afternoon free
//! and these tastes - what should I do?" and "I'm walking the plan -
//! which way now, and how far?"

pub mod catalog;
pub mod domain;
pub mod format;
pub mod geo;
pub mod plan;
pub mod route;
