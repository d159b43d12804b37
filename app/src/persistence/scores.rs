use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, JoinType, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use models::domains::{scores, users};
use models::schemas::score::LeaderboardEntry;

use crate::core::policy::ScorePolicy;
use crate::core::submission::ScoreSubmission;
use crate::error::ScoreError;

/// What happened to the stored row for a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    Created(scores::Model),
    /// Best-of policy: the new value beat the stored one.
    Improved { score: scores::Model, previous: i32 },
    /// Overwrite policy: the stored value was replaced.
    Overwritten { score: scores::Model, previous: i32 },
    /// The stored row was kept as it was.
    Unchanged(scores::Model),
}

impl ScoreOutcome {
    pub fn score(&self) -> &scores::Model {
        match self {
            ScoreOutcome::Created(score)
            | ScoreOutcome::Improved { score, .. }
            | ScoreOutcome::Overwritten { score, .. }
            | ScoreOutcome::Unchanged(score) => score,
        }
    }
}

/// Stores a submission, keeping at most one row per (user, game, date).
///
/// Lookup and write are separate statements; two concurrent submissions for
/// the same day may both insert.
pub async fn add_or_update_score(
    db: &DbConn,
    policy: ScorePolicy,
    user_id: i32,
    submission: &ScoreSubmission,
) -> Result<ScoreOutcome, ScoreError> {
    let existing = scores::Entity::find()
        .filter(scores::Column::UserId.eq(user_id))
        .filter(scores::Column::GameName.eq(submission.game.name))
        .filter(scores::Column::Date.eq(submission.date))
        .one(db)
        .await?;

    let Some(current) = existing else {
        let score = scores::ActiveModel {
            user_id: Set(user_id),
            game_name: Set(submission.game.name.to_string()),
            value: Set(submission.value),
            date: Set(submission.date),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        return Ok(ScoreOutcome::Created(score));
    };

    let replace = match policy {
        ScorePolicy::BestOf => policy.is_better(submission.value, current.value),
        ScorePolicy::Overwrite => submission.value != current.value,
    };
    if !replace {
        return Ok(ScoreOutcome::Unchanged(current));
    }

    let previous = current.value;
    let mut score: scores::ActiveModel = current.into();
    score.value = Set(submission.value);
    score.created_at = Set(Utc::now().fixed_offset());
    let score = score.update(db).await?;

    Ok(match policy {
        ScorePolicy::BestOf => ScoreOutcome::Improved { score, previous },
        ScorePolicy::Overwrite => ScoreOutcome::Overwritten { score, previous },
    })
}

/// Deletes a score owned by `user_id`.
pub async fn delete_score(db: &DbConn, user_id: i32, score_id: i32) -> Result<(), ScoreError> {
    let score = scores::Entity::find_by_id(score_id)
        .one(db)
        .await?
        .ok_or(ScoreError::NotFound)?;

    if score.user_id != user_id {
        tracing::warn!(
            user_id,
            score_id,
            owner_id = score.user_id,
            "refused to delete a score owned by another user"
        );
        return Err(ScoreError::Forbidden);
    }

    score.delete(db).await?;
    Ok(())
}

/// A user's scores, newest day first.
pub async fn list_user_scores(db: &DbConn, user_id: i32) -> Result<Vec<scores::Model>, ScoreError> {
    Ok(scores::Entity::find()
        .filter(scores::Column::UserId.eq(user_id))
        .order_by_desc(scores::Column::Date)
        .order_by_desc(scores::Column::Id)
        .all(db)
        .await?)
}

/// Best value per (user, game, date) across all users.
pub async fn leaderboard(
    db: &DbConn,
    policy: ScorePolicy,
) -> Result<Vec<LeaderboardEntry>, ScoreError> {
    let value = Expr::col((scores::Entity, scores::Column::Value));
    let best = match policy {
        ScorePolicy::BestOf => value.min(),
        ScorePolicy::Overwrite => value.max(),
    };

    Ok(scores::Entity::find()
        .select_only()
        .column(users::Column::Username)
        .column(scores::Column::GameName)
        .column(scores::Column::Date)
        .column_as(best, "best_value")
        .join(JoinType::InnerJoin, scores::Relation::Users.def())
        .group_by(users::Column::Username)
        .group_by(scores::Column::GameName)
        .group_by(scores::Column::Date)
        .order_by_desc(scores::Column::Date)
        .order_by_asc(scores::Column::GameName)
        .order_by_asc(users::Column::Username)
        .into_model::<LeaderboardEntry>()
        .all(db)
        .await?)
}
