use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::Serialize;

use crate::domains::scores;

#[derive(Serialize, Clone, Debug)]
pub struct ScoreSchema {
    pub id: i32,
    pub game_name: String,
    pub value: i32,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<scores::Model> for ScoreSchema {
    fn from(score: scores::Model) -> Self {
        Self {
            id: score.id,
            game_name: score.game_name,
            value: score.value,
            date: score.date,
            created_at: score.created_at.to_utc(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GameStats {
    pub total: i64,
    pub average: f64,
    pub best: i32,
    pub count: usize,
}

/// Statistics of one game; `stats` is `None` when the user has no entries.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GameStatsEntry {
    pub game_name: String,
    pub stats: Option<GameStats>,
}

#[derive(Serialize, Debug)]
pub struct ProfileSchema<G: Serialize> {
    pub scores: Vec<ScoreSchema>,
    pub game_stats: Vec<GameStatsEntry>,
    pub games: Vec<G>,
}

/// Best result of one user for one game on one day.
#[derive(Serialize, FromQueryResult, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub game_name: String,
    pub date: NaiveDate,
    pub best_value: i32,
}

#[derive(Serialize, Debug)]
pub struct ScoreFormSchema {
    pub game_name: String,
    pub today: NaiveDate,
}
