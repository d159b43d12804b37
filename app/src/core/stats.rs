use models::domains::scores;
use models::schemas::score::{GameStats, GameStatsEntry};

use super::games::Game;
use super::policy::ScorePolicy;

/// Per-game totals over a user's score history, in catalog order.
///
/// Games without entries map to `stats: None`.
pub fn compute_stats(
    scores: &[scores::Model],
    games: &[Game],
    policy: ScorePolicy,
) -> Vec<GameStatsEntry> {
    games
        .iter()
        .map(|game| {
            let values: Vec<i32> = scores
                .iter()
                .filter(|score| score.game_name == game.name)
                .map(|score| score.value)
                .collect();

            GameStatsEntry {
                game_name: game.name.to_string(),
                stats: stats_for(&values, policy),
            }
        })
        .collect()
}

fn stats_for(values: &[i32], policy: ScorePolicy) -> Option<GameStats> {
    let best = policy.best(values.iter().copied())?;
    let total: i64 = values.iter().map(|&v| i64::from(v)).sum();
    let count = values.len();

    Some(GameStats {
        total,
        average: round2(total as f64 / count as f64),
        best,
        count,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
