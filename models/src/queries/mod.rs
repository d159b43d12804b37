use serde::{Deserialize, Serialize};

/// Query string of the login page, carrying the page to return to.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct NextQuery {
    pub next: Option<String>,
}
