use axum::{
    Extension, Router,
    extract::State,
    response::Response,
    routing::get,
};
use tower_sessions::Session;

use app::core::games::QUIZ_GAMES;
use app::core::stats::compute_stats;
use app::persistence::scores::list_user_scores;
use app::state::AppState;
use models::schemas::score::{ProfileSchema, ScoreSchema};
use models::schemas::user::{ClientSchema, CurrentUser};

use crate::error::ApiError;
use crate::render;

async fn profile_get(
    State(state): State<AppState>,
    session: Session,
    Extension(client): Extension<ClientSchema>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
    let scores = list_user_scores(&state.conn, user.id).await?;
    let game_stats = compute_stats(&scores, QUIZ_GAMES, state.config.score_policy);

    let profile = ProfileSchema {
        scores: scores.into_iter().map(ScoreSchema::from).collect(),
        game_stats,
        games: QUIZ_GAMES.to_vec(),
    };

    render::page(&session, &client, profile).await
}

pub fn create_profile_router() -> Router<AppState> {
    Router::new().route("/profile", get(profile_get))
}
