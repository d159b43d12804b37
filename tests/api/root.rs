use app::core::policy::ScorePolicy;
use axum::http::StatusCode;

use crate::TestApp;

#[tokio::test]
async fn index_lists_the_games() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut client = app.client();

    let res = client.get("/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["user"].is_null());
    let games = res.body["data"]["data"].as_array().unwrap();
    assert_eq!(games.len(), 6);
    assert_eq!(games[0]["name"], "Wordle");
    assert_eq!(games[1]["name"], "Wørdle");
    assert!(games[0]["url"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn first_visit_sets_a_session_cookie() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut client = app.client();

    let res = client.get("/").await;
    let cookie = res.set_cookie.expect("session cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}
