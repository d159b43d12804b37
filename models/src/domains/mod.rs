pub mod scores;
pub mod users;
