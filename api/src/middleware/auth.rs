use axum::{
    Extension,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use url::form_urlencoded;

use app::persistence::users::get_user;
use app::state::AppState;
use models::schemas::flash::FlashLevel;
use models::schemas::user::{ClientSchema, CurrentUser};

use crate::error::ApiError;
use crate::flash;
use crate::middleware::session::save_client;

pub const LOGIN_PATH: &str = "/login";
pub const LOGIN_MESSAGE: &str = "Please log in to access this page.";

/// Guards protected routes.
///
/// Anonymous requests are sent to the login page with the original target
/// in `next`; authenticated ones get a [`CurrentUser`] extension.
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    Extension(mut client): Extension<ClientSchema>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(user_id) = client.user.as_ref().map(|user| user.id) {
        match get_user(&state.conn, user_id).await? {
            Some(user) => {
                req.extensions_mut().insert(CurrentUser::from(user));
                return Ok(next.run(req).await);
            }
            None => {
                tracing::warn!(user_id, "session refers to a user that no longer exists");
                client.update(None);
                save_client(&session, &client).await?;
            }
        }
    }

    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    flash::push(&session, FlashLevel::Info, LOGIN_MESSAGE).await?;
    Ok(Redirect::to(&login_url(&target)).into_response())
}

/// Login page URL that returns to `next` afterwards.
pub fn login_url(next: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(next.as_bytes()).collect();
    format!("{LOGIN_PATH}?next={encoded}")
}
