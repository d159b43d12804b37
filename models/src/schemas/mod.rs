pub mod flash;
pub mod list;
pub mod score;
pub mod user;
