mod common;

use axum::http::StatusCode;
use common::{Access, TestApp};
use serde_json::json;

async fn seed_member_type(app: &TestApp, name: &str) -> i64 {
    let res = app
        .post_as(Access::Member, "/api/membertypes", &json!({"name": name, "fee": 150.0}))
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
    assert!(res.location().ends_with(&format!("/api/membertypes/{}", res.body["id"])));
    res.body["id"].as_i64().unwrap()
}

fn member_body(member_type_id: i64) -> serde_json::Value {
    json!({
        "firstName": "Sam",
        "lastName": "Snead",
        "email": "sam@x.com",
        "memberTypeId": member_type_id
    })
}

#[tokio::test]
async fn member_type_names_are_unique_except_for_self() {
    let app = TestApp::new();
    let gold = seed_member_type(&app, "Gold").await;
    seed_member_type(&app, "Silver").await;

    let res = app
        .put_as(Access::Member, &format!("/api/membertypes/{}", gold), &json!({"id": gold, "name": "Gold", "fee": 175.0}))
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.text);

    let res = app
        .put_as(Access::Member, &format!("/api/membertypes/{}", gold), &json!({"id": gold, "name": "Silver"}))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.field_errors("Name"), ["This Name already exists in the system."]);
}

#[tokio::test]
async fn negative_fee_rejected() {
    let app = TestApp::new();
    let res = app
        .post_as(Access::Member, "/api/membertypes", &json!({"name": "Junior", "fee": -1}))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.field_errors("Fee"), ["'Fee' must be greater than or equal to '0'."]);
}

#[tokio::test]
async fn member_carries_type_name() {
    let app = TestApp::new();
    let gold = seed_member_type(&app, "Gold").await;

    let res = app.post_as(Access::Member, "/api/members", &member_body(gold)).await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
    assert_eq!(res.body["memberTypeId"], gold);
    assert_eq!(res.body["memberType"], "Gold");

    let list = app.get("/api/members").await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body[0]["memberType"], "Gold");
}

#[tokio::test]
async fn unknown_member_type_rejected() {
    let app = TestApp::new();
    let res = app.post_as(Access::Member, "/api/members", &member_body(42)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.field_errors("MemberTypeId"), ["Member type with Id 42 does not exist."]);
}

#[tokio::test]
async fn referenced_member_type_cannot_be_deleted() {
    let app = TestApp::new();
    let gold = seed_member_type(&app, "Gold").await;
    let member = app.post_as(Access::Member, "/api/members", &member_body(gold)).await;
    let member_id = member.body["id"].as_i64().unwrap();

    let uri = format!("/api/membertypes/{}", gold);
    assert_eq!(app.delete_as(Access::Member, &uri).await.status, StatusCode::CONFLICT);

    let res = app.delete_as(Access::Member, &format!("/api/members/{}", member_id)).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(app.delete_as(Access::Member, &uri).await.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn member_update_checks_ids() {
    let app = TestApp::new();
    let gold = seed_member_type(&app, "Gold").await;
    let member = app.post_as(Access::Member, "/api/members", &member_body(gold)).await;
    let id = member.body["id"].as_i64().unwrap();

    let mut body = member_body(gold);
    body["id"] = json!(id + 7);
    let res = app.put_as(Access::Member, &format!("/api/members/{}", id), &body).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    body["id"] = json!(id);
    body["lastName"] = json!("Snead Jr.");
    let res = app.put_as(Access::Member, &format!("/api/members/{}", id), &body).await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.text);
    assert_eq!(res.body["lastName"], "Snead Jr.");
    assert_eq!(res.body["memberType"], "Gold");
}
