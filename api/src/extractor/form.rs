use axum::extract::{Form as AxumForm, FromRequest};

use crate::error::ApiError;

/// `application/x-www-form-urlencoded` body, rejecting through [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(AxumForm), rejection(ApiError))]
pub struct Form<T>(pub T);
