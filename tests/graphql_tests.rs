//! GraphQL Integration Tests
//!
//! Queries against the generated user/album/photo graph over HTTP.

mod common;

use common::{error_messages, ids, TestApp};
use fakedata_store::DataSource;
use serde_json::json;

#[tokio::test]
async fn test_users_match_store() {
    let app = TestApp::new().await;

    let data = app.query("{ users { id name username email } }").await;
    let users = data["users"].as_array().unwrap();

    assert_eq!(users.len(), app.store.get_users().len());
    for (item, user) in users.iter().zip(app.store.get_users()) {
        assert_eq!(item["id"], user.id);
        assert_eq!(item["name"], user.name.as_str());
        assert_eq!(item["username"], user.username.as_str());
        assert_eq!(item["email"], user.email.as_str());
    }
}

#[tokio::test]
async fn test_albums_of_user_three() {
    let app = TestApp::new().await;

    let data = app.query("{ albums(userid: 3) { id userid } }").await;

    assert_eq!(ids(&data["albums"]), (30..40).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_photos_of_album_thirty() {
    let app = TestApp::new().await;

    let data = app
        .query("{ photos(albumid: 30) { id albumid description } }")
        .await;

    assert_eq!(ids(&data["photos"]), (300..310).collect::<Vec<_>>());
    assert_eq!(data["photos"][0]["description"], "Photo 300");
}

#[tokio::test]
async fn test_limit_semantics() {
    let app = TestApp::new().await;

    let data = app
        .query(
            r#"{
                all: photos { id }
                few: photos(limit: 5) { id }
                many: photos(limit: 5000) { id }
            }"#,
        )
        .await;

    let all = ids(&data["all"]);
    assert_eq!(all.len(), 1000);
    assert_eq!(ids(&data["few"]), all[..5].to_vec());
    assert_eq!(ids(&data["many"]), all);
}

#[tokio::test]
async fn test_nested_query() {
    let app = TestApp::new().await;

    let data = app
        .query(
            r#"{
                album(id: 57) {
                    id
                    userid
                    description
                    photos(limit: 2) { id albumid }
                }
            }"#,
        )
        .await;

    assert_eq!(
        data["album"],
        json!({
            "id": 57,
            "userid": 5,
            "description": "Album 57",
            "photos": [
                { "id": 570, "albumid": 57 },
                { "id": 571, "albumid": 57 },
            ],
        })
    );
}

#[tokio::test]
async fn test_unknown_id_returns_zero_value() {
    let app = TestApp::new().await;

    let body = app
        .graphql(
            "{ user(id: -3) { id name } photo(id: 123456) { id description } }",
            json!({}),
        )
        .await;

    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["user"], json!({ "id": 0, "name": "" }));
    assert_eq!(body["data"]["photo"], json!({ "id": 0, "description": "" }));
}

#[tokio::test]
async fn test_negative_limit_rejected() {
    let app = TestApp::new().await;

    let body = app.graphql("{ users(limit: -2) { id } }", json!({})).await;

    assert_eq!(error_messages(&body).len(), 1);
}

#[tokio::test]
async fn test_variables() {
    let app = TestApp::new().await;

    let body = app
        .graphql(
            "query Photo($id: Int!) { photo(id: $id) { id albumid } }",
            json!({ "id": 999 }),
        )
        .await;

    assert_eq!(body["data"]["photo"], json!({ "id": 999, "albumid": 99 }));
}
