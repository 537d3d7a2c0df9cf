//! Spending appetite for a day out.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The traveller's budget tier.
///
/// Tiers map to per-place cost ceilings in the plan configuration;
/// places above the ceiling are deprioritised in scoring, never
/// excluded outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    Mid,
    Splurge,
}

impl BudgetTier {
    /// The canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Mid => "mid",
            BudgetTier::Splurge => "splurge",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
