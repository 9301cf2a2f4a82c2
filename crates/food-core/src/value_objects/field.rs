//! Which participant set an operation targets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two participant sets attached to a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationField {
    /// Users who declared the food finished/claimed (`finished_by`)
    Finished,
    /// Users who declared they are going to pick it up (`going_by`)
    Going,
}

impl ParticipationField {
    pub const ALL: [ParticipationField; 2] = [Self::Finished, Self::Going];

    /// Column backing this set in `food_posts`
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Finished => "finished_by",
            Self::Going => "going_by",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Finished => "finished",
            Self::Going => "going",
        }
    }

    /// Only the finished set drives auto-expiry
    pub const fn has_auto_expiry(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for ParticipationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a participation field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown participation field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ParticipationField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finished" | "finished_by" => Ok(Self::Finished),
            "going" | "going_by" => Ok(Self::Going),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
