use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::migrate;

/// Connects to a throwaway database and creates the schema.
///
/// The pool is pinned to a single connection so that `sqlite::memory:`
/// keeps one database for the lifetime of the returned handle.
pub async fn setup_test_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    migrate(&conn).await?;
    Ok(conn)
}
