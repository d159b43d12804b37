use axum::{Router, middleware::from_fn_with_state};

pub mod auth;
pub mod profile;
pub mod root;
pub mod scores;

use app::state::AppState;
use auth::{create_auth_router, create_session_router};
use profile::create_profile_router;
use root::create_root_router;
use scores::{create_leaderboard_router, create_score_router};

use crate::middleware::auth::require_auth;

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(create_session_router())
        .merge(create_profile_router())
        .merge(create_score_router())
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(create_root_router())
        .merge(create_auth_router())
        .merge(create_leaderboard_router())
        .merge(protected)
        .with_state(state)
}
