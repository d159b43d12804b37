use chrono::NaiveDate;

use models::params::score::AddScoreParams;

use super::games::{Game, find_game};
use crate::error::ScoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A score submission that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub game: &'static Game,
    pub value: i32,
    pub date: NaiveDate,
}

impl ScoreSubmission {
    /// Validates a raw form against the game catalog.
    ///
    /// `today` is used when the form carries no date.
    pub fn parse(
        game_name: &str,
        params: &AddScoreParams,
        today: NaiveDate,
    ) -> Result<Self, ScoreError> {
        let game = find_game(game_name).ok_or(ScoreError::UnknownGame)?;

        let value = params
            .value
            .trim()
            .parse::<i32>()
            .map_err(|_| ScoreError::InvalidValue)?;

        let date = match params.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => {
                NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ScoreError::InvalidDate)?
            }
        };

        Ok(Self { game, value, date })
    }
}
