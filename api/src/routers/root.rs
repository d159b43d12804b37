use axum::{Extension, Router, response::Response, routing::get};
use tower_sessions::Session;

use app::core::games::{Game, QUIZ_GAMES};
use app::state::AppState;
use models::schemas::list::ListSchema;
use models::schemas::user::ClientSchema;

use crate::error::ApiError;
use crate::render;

async fn root_get(
    session: Session,
    Extension(client): Extension<ClientSchema>,
) -> Result<Response, ApiError> {
    let games = ListSchema::<Game>::from(QUIZ_GAMES.to_vec());
    render::page(&session, &client, games).await
}

pub fn create_root_router() -> Router<AppState> {
    Router::new().route("/", get(root_get))
}
