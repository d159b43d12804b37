use app::config::{Config, ConfigInner};
use app::core::policy::ScorePolicy;
use sea_orm::DatabaseConnection;
use utils::testing::setup_test_db;


pub(crate) async fn setup(policy: ScorePolicy) -> (DatabaseConnection, Config) {
    let conn = setup_test_db("sqlite::memory:")
        .await
        .expect("Set up db failed!");
    let config = Config::from(ConfigInner {
        score_policy: policy,
        bcrypt_cost: 4,
        ..Default::default()
    });
    (conn, config)
}
