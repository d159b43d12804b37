use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a resubmitted result for an existing (user, game, date) is handled,
/// and which end of the scale counts as "best".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Values are tries: lower wins and only an improvement replaces the stored value.
    #[default]
    BestOf,
    /// Values are scores: higher wins and every submission replaces the stored value.
    Overwrite,
}

impl ScorePolicy {
    pub fn is_better(self, candidate: i32, current: i32) -> bool {
        match self {
            ScorePolicy::BestOf => candidate < current,
            ScorePolicy::Overwrite => candidate > current,
        }
    }

    /// Picks the best of `values`, or `None` when empty.
    pub fn best<I: IntoIterator<Item = i32>>(self, values: I) -> Option<i32> {
        let values = values.into_iter();
        match self {
            ScorePolicy::BestOf => values.min(),
            ScorePolicy::Overwrite => values.max(),
        }
    }

    /// Word used when talking to the user about a stored value.
    pub fn unit(self) -> &'static str {
        match self {
            ScorePolicy::BestOf => "tries",
            ScorePolicy::Overwrite => "points",
        }
    }
}

impl fmt::Display for ScorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorePolicy::BestOf => f.write_str("best_of"),
            ScorePolicy::Overwrite => f.write_str("overwrite"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown score policy {0:?}, expected \"best_of\" or \"overwrite\"")]
pub struct ParseScorePolicyError(String);

impl FromStr for ScorePolicy {
    type Err = ParseScorePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best_of" | "best-of" | "tries" => Ok(ScorePolicy::BestOf),
            "overwrite" | "score" => Ok(ScorePolicy::Overwrite),
            other => Err(ParseScorePolicyError(other.to_string())),
        }
    }
}
