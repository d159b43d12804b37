use serde::Serialize;

use models::schemas::{flash::FlashMessage, user::UserSchema};

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
}

/// Document rendered for every page: who is logged in, pending flash
/// messages and the page's own data.
#[derive(Serialize, Debug)]
pub struct PageResponse<T: Serialize> {
    pub user: Option<UserSchema>,
    pub flashes: Vec<FlashMessage>,
    pub data: T,
}
