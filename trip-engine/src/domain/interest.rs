//! The closed interest taxonomy used to tag places and score plans.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single interest category.
///
/// The set is closed: no category exists that is not named here. Pack
/// loading drops unrecognised tag strings rather than inventing
/// categories on the fly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interest {
    History,
    Art,
    Food,
    Nature,
    Architecture,
    Shopping,
    Nightlife,
    LocalLife,
    Viewpoint,
    Family,
}

impl Interest {
    /// All interests, in their canonical order.
    pub const ALL: [Interest; 10] = [
        Interest::History,
        Interest::Art,
        Interest::Food,
        Interest::Nature,
        Interest::Architecture,
        Interest::Shopping,
        Interest::Nightlife,
        Interest::LocalLife,
        Interest::Viewpoint,
        Interest::Family,
    ];

    /// The canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::History => "history",
            Interest::Art => "art",
            Interest::Food => "food",
            Interest::Nature => "nature",
            Interest::Architecture => "architecture",
            Interest::Shopping => "shopping",
            Interest::Nightlife => "nightlife",
            Interest::LocalLife => "local-life",
            Interest::Viewpoint => "viewpoint",
            Interest::Family => "family",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a string names no known interest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interest tag: {tag}")]
pub struct UnknownInterest {
    /// The tag that failed to parse.
    pub tag: String,
}

impl FromStr for Interest {
    type Err = UnknownInterest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "history" => Ok(Interest::History),
            "art" => Ok(Interest::Art),
            "food" => Ok(Interest::Food),
            "nature" => Ok(Interest::Nature),
            "architecture" => Ok(Interest::Architecture),
            "shopping" => Ok(Interest::Shopping),
            "nightlife" => Ok(Interest::Nightlife),
            "local-life" => Ok(Interest::LocalLife),
            "viewpoint" => Ok(Interest::Viewpoint),
            "family" => Ok(Interest::Family),
            other => Err(UnknownInterest {
                tag: other.to_owned(),
            }),
        }
    }
}
