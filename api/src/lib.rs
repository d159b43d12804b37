mod error;
mod extractor;
mod flash;
mod init;
mod middleware;
mod render;
mod validation;

pub mod models;
pub mod routers;

pub use init::{setup_config, setup_db, setup_router};
