//! Domain error types.
//!
//! These errors represent validation failures at construction time. Once a
//! domain value exists, code that receives it can trust its invariants.

/// Domain-level validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Visit-duration range with min > max or a negative bound.
    #[error("invalid duration range: {0}")]
    InvalidDurationRange(&'static str),

    /// Cost range with min > max.
    #[error("invalid cost range: {0}")]
    InvalidCostRange(&'static str),
}
