mod common;

use axum::http::{Method, StatusCode};
use common::{Access, TestApp};
use serde_json::json;

fn entry(golfer_id: i64, tournament_id: i64, year: i64, score: Option<i64>) -> serde_json::Value {
    json!({"golferId": golfer_id, "tournamentId": tournament_id, "year": year, "score": score})
}

fn key_uri(golfer_id: i64, tournament_id: i64, year: i64) -> String {
    format!(
        "/api/tournamentparticipation?golferId={}&tournamentId={}&year={}",
        golfer_id, tournament_id, year
    )
}

#[tokio::test]
async fn participation_appears_in_golfer_history() {
    let app = TestApp::new();
    let golfer = app.seed_golfer("jane@x.com").await;
    let tournament = app.seed_tournament("Spring Open", "Stroke Play").await;

    let res = app
        .post_as(Access::Trusted, "/api/tournamentparticipation", &entry(golfer, tournament, 2020, Some(72)))
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
    assert_eq!(res.location(), key_uri(golfer, tournament, 2020));

    let golfer_view = app.get(&format!("/api/golfers/{}", golfer)).await;
    let history = golfer_view.body["tournaments"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["year"], 2020);
    assert_eq!(history[0]["tournamentId"], tournament);
    assert_eq!(history[0]["name"], "Spring Open");
    assert_eq!(history[0]["score"], 72);

    let tournament_view = app.get(&format!("/api/tournaments/{}", tournament)).await;
    assert_eq!(tournament_view.body["participants"][0]["firstName"], "Jane");
}

#[tokio::test]
async fn score_and_year_bounds() {
    let app = TestApp::new();
    let golfer = app.seed_golfer("jane@x.com").await;
    let tournament = app.seed_tournament("Spring Open", "Stroke Play").await;

    let res = app
        .post_as(Access::Trusted, "/api/tournamentparticipation", &entry(golfer, tournament, 2020, Some(49)))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.field_errors("Score"), ["'Score' must be between 50 and 130. You entered 49."]);

    let res = app
        .post_as(Access::Trusted, "/api/tournamentparticipation", &entry(golfer, tournament, 1915, None))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let year = res.field_errors("Year");
    assert!(year[0].starts_with("'Year' must be between 1916 and"), "{:?}", year);
    assert!(year[0].ends_with("You entered 1915."));

    let next_year = chrono::Utc::now().format("%Y").to_string().parse::<i64>().unwrap() + 1;
    let res = app
        .post_as(Access::Trusted, "/api/tournamentparticipation", &entry(golfer, tournament, next_year, None))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_record_rejected_on_year() {
    let app = TestApp::new();
    let golfer = app.seed_golfer("jane@x.com").await;
    let tournament = app.seed_tournament("Spring Open", "Stroke Play").await;
    let body = entry(golfer, tournament, 2021, None);

    assert_eq!(
        app.post_as(Access::Trusted, "/api/tournamentparticipation", &body).await.status,
        StatusCode::CREATED
    );
    let res = app.post_as(Access::Trusted, "/api/tournamentparticipation", &body).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.field_errors("Year"),
        ["This golfer already has a participation record for this tournament and year."]
    );
}

#[tokio::test]
async fn unknown_references_rejected() {
    let app = TestApp::new();
    let res = app
        .post_as(Access::Trusted, "/api/tournamentparticipation", &entry(5, 6, 2020, None))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.field_errors("GolferId"), ["Golfer with Id 5 does not exist."]);
    assert_eq!(res.field_errors("TournamentId"), ["Tournament with Id 6 does not exist."]);
}

#[tokio::test]
async fn nested_routes_take_id_from_path() {
    let app = TestApp::new();
    let golfer = app.seed_golfer("jane@x.com").await;
    let tournament = app.seed_tournament("Spring Open", "Best Ball").await;

    let res = app
        .post_as(
            Access::Trusted,
            &format!("/api/golfers/{}/tournamentparticipation", golfer),
            &json!({"tournamentId": tournament, "year": 2019}),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
    assert_eq!(res.body["golferId"], golfer);

    let res = app
        .post_as(
            Access::Trusted,
            &format!("/api/tournaments/{}/tournamentparticipation", tournament),
            &json!({"golferId": golfer, "year": 2020, "score": 88}),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
    assert_eq!(res.body["tournamentId"], tournament);

    let history = app.get(&format!("/api/golfers/{}", golfer)).await;
    assert_eq!(history.body["tournaments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn read_update_delete_by_query_key() {
    let app = TestApp::new();
    let golfer = app.seed_golfer("jane@x.com").await;
    let tournament = app.seed_tournament("Spring Open", "Stroke Play").await;
    app.post_as(Access::Trusted, "/api/tournamentparticipation", &entry(golfer, tournament, 2020, None))
        .await;
    let uri = key_uri(golfer, tournament, 2020);

    let res = app.get(&uri).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["score"], serde_json::Value::Null);

    let res = app.put_as(Access::Trusted, &uri, &json!({"score": 131})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app.put_as(Access::Trusted, &uri, &json!({"score": 70})).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["score"], 70);

    assert_eq!(app.delete_as(Access::Admin, &uri).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get(&uri).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete_as(Access::Admin, &uri).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn incomplete_key_is_bad_request() {
    let app = TestApp::new();
    let res = app.get("/api/tournamentparticipation?golferId=1&year=2020").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app.get("/api/tournamentparticipation?golferId=one&tournamentId=2&year=2020").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn policy_gates() {
    let app = TestApp::new();
    let golfer = app.seed_golfer("jane@x.com").await;
    let tournament = app.seed_tournament("Spring Open", "Stroke Play").await;
    let body = entry(golfer, tournament, 2020, None);

    // no token
    let res = app
        .send(Method::POST, "/api/tournamentparticipation", None, Some(&body))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    // garbage token
    let res = app
        .send(Method::POST, "/api/tournamentparticipation", Some("not.a.jwt"), Some(&body))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    // valid token without the trusted claim
    let res = app.post_as(Access::Member, "/api/tournamentparticipation", &body).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body["code"], "FORBIDDEN");

    // admin counts as trusted
    let res = app.post_as(Access::Admin, "/api/tournamentparticipation", &body).await;
    assert_eq!(res.status, StatusCode::CREATED);

    // trusted is not enough to delete
    let uri = key_uri(golfer, tournament, 2020);
    assert_eq!(app.delete_as(Access::Trusted, &uri).await.status, StatusCode::FORBIDDEN);
    assert_eq!(app.delete_as(Access::Admin, &uri).await.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn referenced_golfer_cannot_be_deleted() {
    let app = TestApp::new();
    let golfer = app.seed_golfer("jane@x.com").await;
    let tournament = app.seed_tournament("Spring Open", "Stroke Play").await;
    app.post_as(Access::Trusted, "/api/tournamentparticipation", &entry(golfer, tournament, 2020, None))
        .await;

    let res = app.delete_as(Access::Member, &format!("/api/golfers/{}", golfer)).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    let res = app.delete_as(Access::Member, &format!("/api/tournaments/{}", tournament)).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
}
