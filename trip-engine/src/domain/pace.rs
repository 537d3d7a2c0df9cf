//! Walking pace, controlling how densely a day gets packed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How briskly the traveller wants to move between stops.
///
/// Pace governs the stops-per-hour cap applied during plan
/// generation; it never changes the assumed walking speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pace {
    Relaxed,
    Standard,
    Active,
}

impl Pace {
    /// The canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Standard => "standard",
            Pace::Active => "active",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
