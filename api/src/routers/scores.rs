use axum::{
    Extension, Router,
    extract::{Path, State},
    response::Response,
    routing::{get, post},
};
use chrono::Utc;
use tower_sessions::Session;
use url::form_urlencoded;

use app::core::games::find_game;
use app::core::policy::ScorePolicy;
use app::core::submission::ScoreSubmission;
use app::error::ScoreError;
use app::persistence::scores::{ScoreOutcome, add_or_update_score, delete_score, leaderboard};
use app::state::AppState;
use models::params::score::AddScoreParams;
use models::schemas::flash::FlashLevel;
use models::schemas::list::ListSchema;
use models::schemas::score::{LeaderboardEntry, ScoreFormSchema};
use models::schemas::user::{ClientSchema, CurrentUser};

use crate::error::ApiError;
use crate::extractor::Form;
use crate::render;

const PROFILE_PATH: &str = "/profile";

fn add_score_path(game_name: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(game_name.as_bytes()).collect();
    format!("/add_score/{encoded}")
}

async fn add_score_get(
    session: Session,
    Extension(client): Extension<ClientSchema>,
    Path(game_name): Path<String>,
) -> Result<Response, ApiError> {
    let Some(game) = find_game(&game_name) else {
        return render::recover(&session, ScoreError::UnknownGame, PROFILE_PATH).await;
    };

    let form = ScoreFormSchema {
        game_name: game.name.to_string(),
        today: Utc::now().date_naive(),
    };
    render::page(&session, &client, form).await
}

#[axum::debug_handler]
async fn add_score_post(
    State(state): State<AppState>,
    session: Session,
    Extension(user): Extension<CurrentUser>,
    Path(game_name): Path<String>,
    Form(params): Form<AddScoreParams>,
) -> Result<Response, ApiError> {
    let submission = match ScoreSubmission::parse(&game_name, &params, Utc::now().date_naive()) {
        Ok(submission) => submission,
        Err(e @ ScoreError::UnknownGame) => {
            return render::recover(&session, e, PROFILE_PATH).await;
        }
        Err(e) => return render::recover(&session, e, &add_score_path(&game_name)).await,
    };

    let policy = state.config.score_policy;
    let outcome = match add_or_update_score(&state.conn, policy, user.id, &submission).await {
        Ok(outcome) => outcome,
        Err(e) => return render::recover(&session, e, PROFILE_PATH).await,
    };

    tracing::debug!(
        user_id = user.id,
        game = submission.game.name,
        date = %submission.date,
        ?outcome,
        "score submitted"
    );

    let (level, message) = outcome_message(policy, &submission, &outcome);
    render::flash_redirect(&session, level, message, PROFILE_PATH).await
}

fn outcome_message(
    policy: ScorePolicy,
    submission: &ScoreSubmission,
    outcome: &ScoreOutcome,
) -> (FlashLevel, String) {
    let game = submission.game.name;
    let date = submission.date;
    match outcome {
        ScoreOutcome::Created(_) => (FlashLevel::Success, format!("Score for {game} added!")),
        ScoreOutcome::Improved { .. } => (
            FlashLevel::Success,
            format!("New best score for {game} on {date}!"),
        ),
        ScoreOutcome::Overwritten { score, .. } => (
            FlashLevel::Success,
            format!("Score for {game} on {date} updated to {}!", score.value),
        ),
        ScoreOutcome::Unchanged(score) => (
            FlashLevel::Info,
            format!(
                "Your current best score for {game} on {date} remains {} {}.",
                score.value,
                policy.unit()
            ),
        ),
    }
}

async fn delete_score_post(
    State(state): State<AppState>,
    session: Session,
    Extension(user): Extension<CurrentUser>,
    Path(score_id): Path<i32>,
) -> Result<Response, ApiError> {
    match delete_score(&state.conn, user.id, score_id).await {
        Ok(()) => {
            render::flash_redirect(&session, FlashLevel::Info, "Score deleted.", PROFILE_PATH).await
        }
        Err(e) => render::recover(&session, e, PROFILE_PATH).await,
    }
}

async fn leaderboard_get(
    State(state): State<AppState>,
    session: Session,
    Extension(client): Extension<ClientSchema>,
) -> Result<Response, ApiError> {
    let entries = leaderboard(&state.conn, state.config.score_policy).await?;
    render::page(&session, &client, ListSchema::<LeaderboardEntry>::from(entries)).await
}

/// Public leaderboard.
pub fn create_leaderboard_router() -> Router<AppState> {
    Router::new().route("/scores", get(leaderboard_get))
}

/// Score entry and removal for the logged-in user.
pub fn create_score_router() -> Router<AppState> {
    Router::new()
        .route("/add_score/{game_name}", get(add_score_get).post(add_score_post))
        .route("/delete_score/{id}", post(delete_score_post))
}
