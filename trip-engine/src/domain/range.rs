//! Validated min/max ranges for visit durations and costs.

use serde::Serialize;

use super::DomainError;

/// A visit-duration range in minutes, with `min <= max` guaranteed.
///
/// # Examples
///
/// ```
/// use trip_engine::domain::DurationRange;
///
/// let range = DurationRange::new(30, 60).unwrap();
/// assert_eq!(range.min_minutes(), 30);
/// assert_eq!(range.max_minutes(), 60);
///
/// // min > max is rejected
/// assert!(DurationRange::new(60, 30).is_err());
/// // negative bounds are rejected
/// assert!(DurationRange::new(-5, 30).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationRange {
    min_minutes: i64,
    max_minutes: i64,
}

impl DurationRange {
    /// Construct a range, validating `0 <= min <= max`.
    pub fn new(min_minutes: i64, max_minutes: i64) -> Result<Self, DomainError> {
        if min_minutes < 0 {
            return Err(DomainError::InvalidDurationRange(
                "bounds must be non-negative",
            ));
        }
        if min_minutes > max_minutes {
            return Err(DomainError::InvalidDurationRange("min must not exceed max"));
        }
        Ok(Self {
            min_minutes,
            max_minutes,
        })
    }

    /// Shortest reasonable visit, in minutes.
    pub fn min_minutes(&self) -> i64 {
        self.min_minutes
    }

    /// Longest reasonable visit, in minutes.
    pub fn max_minutes(&self) -> i64 {
        self.max_minutes
    }

    /// Headroom between the two bounds, in minutes.
    pub fn span_minutes(&self) -> i64 {
        self.max_minutes - self.min_minutes
    }

    /// Clamp a minute count into this range.
    pub fn clamp(&self, minutes: i64) -> i64 {
        minutes.clamp(self.min_minutes, self.max_minutes)
    }

    /// True if `minutes` lies within the range, inclusive.
    pub fn contains(&self, minutes: i64) -> bool {
        minutes >= self.min_minutes && minutes <= self.max_minutes
    }
}

/// An expected-spend range in whole currency units, with `min <= max`.
///
/// Ranges add together when totalling a plan; addition saturates rather
/// than overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostRange {
    min: u32,
    max: u32,
}

impl CostRange {
    /// Construct a range, validating `min <= max`.
    pub fn new(min: u32, max: u32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidCostRange("min must not exceed max"));
        }
        Ok(Self { min, max })
    }

    /// The zero range, identity for addition.
    pub fn zero() -> Self {
        Self { min: 0, max: 0 }
    }

    /// Lower bound in whole currency units.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound in whole currency units.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// True if the upper bound is at or below `ceiling`.
    pub fn fits_under(&self, ceiling: u32) -> bool {
        self.max <= ceiling
    }
}

impl std::ops::Add for CostRange {
    type Output = CostRange;

    fn add(self, other: CostRange) -> CostRange {
        CostRange {
            min: self.min.saturating_add(other.min),
            max: self.max.saturating_add(other.max),
        }
    }
}

impl std::iter::Sum for CostRange {
    fn sum<I: Iterator<Item = CostRange>>(iter: I) -> Self {
        iter.fold(CostRange::zero(), |acc, r| acc + r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_range_valid() {
        let r = DurationRange::new(30, 60).unwrap();
        assert_eq!(r.min_minutes(), 30);
        assert_eq!(r.max_minutes(), 60);
        assert_eq!(r.span_minutes(), 30);
    }

    #[test]
    fn duration_range_degenerate() {
        let r = DurationRange::new(45, 45).unwrap();
        assert_eq!(r.span_minutes(), 0);
        assert!(r.contains(45));
        assert!(!r.contains(44));
    }

    #[test]
    fn duration_range_rejects_inverted() {
        assert!(DurationRange::new(60, 30).is_err());
    }

    #[test]
    fn duration_range_rejects_negative() {
        assert!(DurationRange::new(-1, 30).is_err());
        assert!(DurationRange::new(-10, -5).is_err());
    }

    #[test]
    fn duration_range_clamp() {
        let r = DurationRange::new(30, 60).unwrap();
        assert_eq!(r.clamp(10), 30);
        assert_eq!(r.clamp(45), 45);
        assert_eq!(r.clamp(90), 60);
    }

    #[test]
    fn cost_range_valid() {
        let r = CostRange::new(10, 25).unwrap();
        assert_eq!(r.min(), 10);
        assert_eq!(r.max(), 25);
    }

    #[test]
    fn cost_range_rejects_inverted() {
        assert!(CostRange::new(25, 10).is_err());
    }

    #[test]
    fn cost_range_free_entry() {
        let r = CostRange::new(0, 0).unwrap();
        assert_eq!(r, CostRange::zero());
    }

    #[test]
    fn cost_range_addition() {
        let a = CostRange::new(10, 20).unwrap();
        let b = CostRange::new(5, 40).unwrap();
        let sum = a + b;
        assert_eq!(sum.min(), 15);
        assert_eq!(sum.max(), 60);
    }

    #[test]
    fn cost_range_sum_of_iter() {
        let ranges = vec![
            CostRange::new(1, 2).unwrap(),
            CostRange::new(3, 4).unwrap(),
            CostRange::new(5, 6).unwrap(),
        ];
        let total: CostRange = ranges.into_iter().sum();
        assert_eq!(total, CostRange::new(9, 12).unwrap());
    }

    #[test]
    fn cost_range_addition_saturates() {
        let a = CostRange::new(0, u32::MAX).unwrap();
        let b = CostRange::new(1, 1).unwrap();
        let sum = a + b;
        assert_eq!(sum.max(), u32::MAX);
    }

    #[test]
    fn fits_under_ceiling() {
        let r = CostRange::new(10, 25).unwrap();
        assert!(r.fits_under(25));
        assert!(r.fits_under(100));
        assert!(!r.fits_under(24));
    }
}
