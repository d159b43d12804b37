use app::core::policy::ScorePolicy;
use axum::http::StatusCode;
use serde_json::Value;

use crate::{TestApp, TestClient};

async fn add_score(client: &mut TestClient, game: &str, value: &str, date: &str) -> Option<String> {
    client
        .post_form(
            &format!("/add_score/{game}"),
            &[("value", value), ("date", date)],
        )
        .await
        .location
}

async fn profile(client: &mut TestClient) -> Value {
    let res = client.get("/profile").await;
    assert_eq!(res.status, StatusCode::OK);
    res.body
}

fn stats_for<'a>(profile: &'a Value, game: &str) -> &'a Value {
    profile["data"]["game_stats"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["game_name"] == game)
        .map(|entry| &entry["stats"])
        .unwrap()
}

#[tokio::test]
async fn best_of_keeps_the_fewest_tries() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut client = app.client();
    client.sign_up("alice").await;

    for value in ["5", "3", "4"] {
        let location = add_score(&mut client, "Wordle", value, "2024-01-01").await;
        assert_eq!(location.as_deref(), Some("/profile"));
    }

    let body = profile(&mut client).await;
    let scores = body["data"]["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0]["value"], 3);
    assert_eq!(scores[0]["date"], "2024-01-01");

    let flashes: Vec<_> = body["flashes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        flashes,
        vec![
            "Score for Wordle added!",
            "New best score for Wordle on 2024-01-01!",
            "Your current best score for Wordle on 2024-01-01 remains 3 tries.",
        ]
    );
}

#[tokio::test]
async fn overwrite_policy_replaces_the_score() {
    let app = TestApp::spawn(ScorePolicy::Overwrite).await;
    let mut client = app.client();
    client.sign_up("alice").await;

    add_score(&mut client, "Wordle", "5", "2024-01-01").await;
    add_score(&mut client, "Wordle", "8", "2024-01-01").await;

    let body = profile(&mut client).await;
    let scores = body["data"]["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0]["value"], 8);
    assert_eq!(stats_for(&body, "Wordle")["best"], 8);
}

#[tokio::test]
async fn profile_reports_stats_per_game() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut client = app.client();
    client.sign_up("alice").await;

    for (value, date) in [("2", "2024-01-01"), ("4", "2024-01-02"), ("6", "2024-01-03")] {
        add_score(&mut client, "Worldle", value, date).await;
    }

    let body = profile(&mut client).await;
    let stats = stats_for(&body, "Worldle");
    assert_eq!(stats["total"], 12);
    assert_eq!(stats["average"], 4.0);
    assert_eq!(stats["best"], 2);
    assert_eq!(stats["count"], 3);
    assert!(stats_for(&body, "Bandle").is_null());

    let scores = body["data"]["scores"].as_array().unwrap();
    assert_eq!(scores[0]["date"], "2024-01-03");
    assert_eq!(body["data"]["games"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn missing_date_means_today() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut client = app.client();
    client.sign_up("alice").await;

    let form = client.get("/add_score/Travle").await;
    assert_eq!(form.body["data"]["game_name"], "Travle");
    let today = form.body["data"]["today"].as_str().unwrap().to_string();

    add_score(&mut client, "Travle", "3", "").await;

    let body = profile(&mut client).await;
    let scores = body["data"]["scores"].as_array().unwrap();
    assert_eq!(scores[0]["date"].as_str(), Some(today.as_str()));
}

#[tokio::test]
async fn invalid_submissions_are_reported() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut client = app.client();
    client.sign_up("alice").await;

    let location = add_score(&mut client, "Wordle", "three", "2024-01-01").await;
    assert_eq!(location.as_deref(), Some("/add_score/Wordle"));
    assert_eq!(
        client.flash_messages("/add_score/Wordle").await,
        vec!["Invalid number of tries or date format."]
    );

    let location = add_score(&mut client, "Wordle", "3", "01/01/2024").await;
    assert_eq!(location.as_deref(), Some("/add_score/Wordle"));
    client.flash_messages("/add_score/Wordle").await;

    let location = add_score(&mut client, "Chess", "3", "2024-01-01").await;
    assert_eq!(location.as_deref(), Some("/profile"));

    let res = client.get("/add_score/Chess").await;
    assert_eq!(res.location.as_deref(), Some("/profile"));

    let body = profile(&mut client).await;
    assert!(body["data"]["scores"].as_array().unwrap().is_empty());
    assert_eq!(
        body["flashes"][0]["message"],
        "Invalid game name."
    );
}

#[tokio::test]
async fn non_ascii_game_names_work() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut client = app.client();
    client.sign_up("alice").await;

    let location = add_score(&mut client, "W%C3%B8rdle", "4", "2024-01-01").await;
    assert_eq!(location.as_deref(), Some("/profile"));

    let body = profile(&mut client).await;
    assert_eq!(body["data"]["scores"][0]["game_name"], "Wørdle");
}

#[tokio::test]
async fn scores_can_only_be_deleted_by_their_owner() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut alice = app.client();
    let mut bob = app.client();
    alice.sign_up("alice").await;
    bob.sign_up("bob").await;

    add_score(&mut alice, "Actorle", "2", "2024-01-01").await;
    let body = profile(&mut alice).await;
    let score_id = body["data"]["scores"][0]["id"].as_i64().unwrap();

    let res = bob
        .post_form(&format!("/delete_score/{score_id}"), &[])
        .await;
    assert_eq!(res.location.as_deref(), Some("/profile"));
    assert_eq!(
        bob.flash_messages("/profile").await,
        vec!["You cannot delete this score."]
    );

    let body = profile(&mut alice).await;
    assert_eq!(body["data"]["scores"].as_array().unwrap().len(), 1);

    bob.post_form(&format!("/delete_score/{}", score_id + 100), &[])
        .await;
    assert_eq!(bob.flash_messages("/profile").await, vec!["Score not found."]);

    let res = alice
        .post_form(&format!("/delete_score/{score_id}"), &[])
        .await;
    assert_eq!(res.location.as_deref(), Some("/profile"));
    let body = profile(&mut alice).await;
    assert!(body["data"]["scores"].as_array().unwrap().is_empty());
    assert_eq!(body["flashes"][0]["message"], "Score deleted.");
}

#[tokio::test]
async fn score_pages_require_login() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut client = app.client();

    let res = client
        .post_form("/add_score/Wordle", &[("value", "3")])
        .await;
    assert_eq!(res.location.as_deref(), Some("/login?next=%2Fadd_score%2FWordle"));

    let res = client.post_form("/delete_score/1", &[]).await;
    assert_eq!(res.location.as_deref(), Some("/login?next=%2Fdelete_score%2F1"));
}

#[tokio::test]
async fn leaderboard_is_public() {
    let app = TestApp::spawn(ScorePolicy::BestOf).await;
    let mut alice = app.client();
    let mut bob = app.client();
    alice.sign_up("alice").await;
    bob.sign_up("bob").await;

    add_score(&mut alice, "Wordle", "4", "2024-01-01").await;
    add_score(&mut bob, "Wordle", "2", "2024-01-01").await;

    let mut visitor = app.client();
    let res = visitor.get("/scores").await;
    assert_eq!(res.status, StatusCode::OK);

    let entries = res.body["data"]["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["username"], "alice");
    assert_eq!(entries[0]["best_value"], 4);
    assert_eq!(entries[1]["username"], "bob");
    assert_eq!(entries[1]["best_value"], 2);
    assert_eq!(entries[1]["game_name"], "Wordle");
}
