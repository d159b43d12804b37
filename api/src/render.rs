use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use tower_sessions::Session;

use app::error::DomainError;
use models::schemas::{flash::FlashLevel, user::ClientSchema};

use crate::error::{ApiError, is_recoverable};
use crate::extractor::Json;
use crate::flash;
use crate::models::response::PageResponse;

/// Renders a page, draining the pending flash messages into it.
pub async fn page<T: Serialize>(
    session: &Session,
    client: &ClientSchema,
    data: T,
) -> Result<Response, ApiError> {
    let flashes = flash::take(session).await?;
    Ok(Json(PageResponse {
        user: client.user.clone(),
        flashes,
        data,
    })
    .into_response())
}

/// Queues a flash message and redirects to `to`.
pub async fn flash_redirect(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
    to: &str,
) -> Result<Response, ApiError> {
    flash::push(session, level, message).await?;
    Ok(Redirect::to(to).into_response())
}

/// Shows a domain error to the user and redirects to `to`.
///
/// Internal errors are not recoverable and fail the request instead.
pub async fn recover<E: DomainError>(
    session: &Session,
    err: E,
    to: &str,
) -> Result<Response, ApiError> {
    if !is_recoverable(&err) {
        return Err(ApiError::from(err));
    }
    flash_redirect(session, FlashLevel::Danger, err.to_string(), to).await
}
