use std::time::Duration;

use axum::Router;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sha2::{Digest, Sha512};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::Key, cookie::SameSite};

use app::config::Config;
use app::state::AppState;

use crate::middleware::session;
use crate::routers::create_router;

pub fn setup_router(config: Config, conn: DatabaseConnection) -> Router {
    // Cookie signing needs a 64 byte key; derive one from the configured secret.
    let key = Key::from(Sha512::digest(config.secret_key.as_bytes()).as_slice());

    let session_store = MemoryStore::default();

    let session_layer = SessionManagerLayer::new(session_store)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.secure_cookies)
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(key);

    create_router(AppState { conn, config })
        .layer(axum::middleware::from_fn(session::client_session))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}

pub fn setup_config() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();
    Config::from_env()
}

pub async fn setup_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_lifetime(Duration::from_secs(60));

    Database::connect(opt).await
}
