use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use app::error::{DomainError, ErrorKind, ScoreError, UserError};

use crate::models::response::ApiErrorResponse;

/// Error returned by handlers and middleware when a request cannot be
/// answered with a page or a redirect.
#[derive(Debug)]
pub struct ApiError(pub anyhow::Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        let err = &self.0;
        if let Some(e) = err.downcast_ref::<UserError>() {
            return kind_status(e.kind());
        }
        if let Some(e) = err.downcast_ref::<ScoreError>() {
            return kind_status(e.kind());
        }
        if let Some(e) = err.downcast_ref::<FormRejection>() {
            return e.status();
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn kind_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Auth => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
            "An unexpected error occurred".to_string()
        } else {
            tracing::debug!("Request rejected: {:#}", self.0);
            self.0.to_string()
        };

        (status, axum::Json(ApiErrorResponse { message })).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Reports whether `err` should be shown to the user instead of failing the request.
pub fn is_recoverable<E: DomainError>(err: &E) -> bool {
    err.kind() != ErrorKind::Internal
}
