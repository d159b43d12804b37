use axum::{
    Extension, Router,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use tower_sessions::{Expiry, Session, cookie::time::Duration};
use url::Url;
use validator::Validate;

use app::persistence::users::{create_user, login_user};
use app::state::AppState;
use models::params::user::{CreateUserParams, LoginUserParams};
use models::queries::NextQuery;
use models::schemas::flash::FlashLevel;
use models::schemas::user::ClientSchema;

use crate::error::ApiError;
use crate::extractor::Form;
use crate::middleware::auth::{LOGIN_PATH, login_url};
use crate::middleware::session::save_client;
use crate::render;
use crate::validation::first_message;

const HOME_PATH: &str = "/";
const REGISTER_PATH: &str = "/register";

async fn register_get(
    session: Session,
    Extension(client): Extension<ClientSchema>,
) -> Result<Response, ApiError> {
    if client.user.is_some() {
        return Ok(Redirect::to(HOME_PATH).into_response());
    }
    render::page(&session, &client, ()).await
}

#[axum::debug_handler]
async fn register_post(
    State(state): State<AppState>,
    session: Session,
    Extension(client): Extension<ClientSchema>,
    Form(params): Form<CreateUserParams>,
) -> Result<Response, ApiError> {
    if client.user.is_some() {
        return Ok(Redirect::to(HOME_PATH).into_response());
    }

    let params = params.normalized();
    if let Err(errors) = params.validate() {
        return render::flash_redirect(
            &session,
            FlashLevel::Danger,
            first_message(&errors),
            REGISTER_PATH,
        )
        .await;
    }

    match create_user(&state.conn, &state.config, params).await {
        Ok(_) => {
            render::flash_redirect(
                &session,
                FlashLevel::Success,
                "Registration successful! Please log in.",
                LOGIN_PATH,
            )
            .await
        }
        Err(e) => render::recover(&session, e, REGISTER_PATH).await,
    }
}

async fn login_get(
    session: Session,
    Extension(client): Extension<ClientSchema>,
    Query(query): Query<NextQuery>,
) -> Result<Response, ApiError> {
    if client.user.is_some() {
        return Ok(Redirect::to(HOME_PATH).into_response());
    }
    render::page(&session, &client, query).await
}

#[axum::debug_handler]
async fn login_post(
    State(state): State<AppState>,
    session: Session,
    Extension(mut client): Extension<ClientSchema>,
    Query(query): Query<NextQuery>,
    Form(params): Form<LoginUserParams>,
) -> Result<Response, ApiError> {
    if client.user.is_some() {
        return Ok(Redirect::to(HOME_PATH).into_response());
    }

    let user = match login_user(&state.conn, &params).await {
        Ok(user) => user,
        Err(e) => {
            let back = query
                .next
                .as_deref()
                .map_or_else(|| LOGIN_PATH.to_string(), login_url);
            return render::recover(&session, e, &back).await;
        }
    };

    // New id on privilege change so a pre-login cookie cannot ride the login.
    session.cycle_id().await?;
    let expiry = params.remember().then(|| {
        let lifetime = state.config.session_lifetime.as_secs();
        Expiry::OnInactivity(Duration::seconds(i64::try_from(lifetime).unwrap_or(i64::MAX)))
    });
    session.set_expiry(expiry);

    tracing::info!(user_id = user.id, remember = params.remember(), "user logged in");
    client.update(Some(user));
    save_client(&session, &client).await?;

    Ok(Redirect::to(safe_redirect_target(query.next.as_deref())).into_response())
}

async fn logout_get(
    session: Session,
    Extension(mut client): Extension<ClientSchema>,
) -> Result<Response, ApiError> {
    if let Some(user) = client.user.as_ref() {
        tracing::info!(user_id = user.id, "user logged out");
    }

    client.update(None);
    session.cycle_id().await?;
    session.set_expiry(None);
    save_client(&session, &client).await?;

    render::flash_redirect(&session, FlashLevel::Info, "You have been logged out.", HOME_PATH).await
}

/// Returns `next` when it stays on this site, otherwise the homepage.
///
/// Anything with a scheme or a network location (`https://host/..`,
/// `//host/..`) is refused, as are targets that cannot be sent back in a
/// `Location` header verbatim.
pub fn safe_redirect_target(next: Option<&str>) -> &str {
    match next.map(str::trim) {
        Some(target) if is_local_target(target) => target,
        _ => HOME_PATH,
    }
}

fn is_local_target(target: &str) -> bool {
    if target.is_empty() || !target.is_ascii() || target.chars().any(|c| c.is_ascii_control()) {
        return false;
    }
    if Url::parse(target).is_ok() {
        return false;
    }
    // Browsers read backslashes as slashes.
    !target.replace('\\', "/").starts_with("//")
}

/// Pages available without logging in.
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_get).post(register_post))
        .route("/login", get(login_get).post(login_post))
}

/// Pages that need a logged-in user.
pub fn create_session_router() -> Router<AppState> {
    Router::new().route("/logout", get(logout_get))
}
