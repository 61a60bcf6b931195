mod common;

use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register_user")
        .json(&json!({
            "user_name": "Ada",
            "user_email": "a@x.com",
            "user_password": "pw123",
            "user_address": "1 Main St",
            "user_country": "UK",
            "phone_number": "+4400000000"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["user_email"], "a@x.com");
    assert_eq!(body["data"]["user_name"], "Ada");
    assert!(body["data"]["user_id"].is_string());
    assert!(body["data"]["created_at"].is_string());

    // The password never leaves the service, hashed or not
    assert!(body["data"].get("user_password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflict() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123").await;

    let response = app
        .post("/register_user")
        .json(&json!({
            "user_name": "Someone Else",
            "user_email": "a@x.com",
            "user_password": "other_password",
            "user_address": "2 Side St",
            "user_country": "DE",
            "phone_number": "+4900000000"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register_user")
        .json(&json!({
            "user_name": "Ada",
            "user_email": "not-an-email",
            "user_password": "pw123",
            "user_address": "1 Main St",
            "user_country": "UK",
            "phone_number": "+4400000000"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123").await;

    let response = app
        .post("/login")
        .form(&[("username", "a@x.com"), ("password", "pw123")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["access_token"].is_string());
    assert_eq!(body["data"]["token_type"], "bearer");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123").await;

    let wrong_password = app
        .post("/login")
        .form(&[("username", "a@x.com"), ("password", "wrong")])
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_email = app
        .post("/login")
        .form(&[("username", "nobody@x.com"), ("password", "pw123")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Identical bodies: nothing reveals whether the account exists
    let first: serde_json::Value = wrong_password.json().await.unwrap();
    let second: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_profile_with_valid_token() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123").await;
    let token = app.login("a@x.com", "pw123").await;

    let response = app
        .get("/user/get_profile")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["user_email"], "a@x.com");
    assert!(body["data"].get("user_password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_profile_rejections_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123").await;

    // Missing header, garbage token, expired token, wrong-key token
    let missing = app.get("/user/get_profile").send().await.unwrap();

    let garbage = app
        .get("/user/get_profile")
        .bearer_auth("not.a.token")
        .send()
        .await
        .unwrap();

    let expired_token = app
        .authenticator
        .issue_token("a@x.com", Some(Duration::minutes(-5)))
        .unwrap();
    let expired = app
        .get("/user/get_profile")
        .bearer_auth(&expired_token)
        .send()
        .await
        .unwrap();

    let other_key = auth::Authenticator::new(
        b"a-completely-different-signing-key-32-bytes!",
        jsonwebtoken::Algorithm::HS256,
        60,
    )
    .unwrap();
    let forged_token = other_key.issue_token("a@x.com", None).unwrap();
    let forged = app
        .get("/user/get_profile")
        .bearer_auth(&forged_token)
        .send()
        .await
        .unwrap();

    let mut bodies = Vec::new();
    for response in [missing, garbage, expired, forged] {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(response.json::<serde_json::Value>().await.unwrap());
    }
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_stale_token_after_account_deletion() {
    let app = TestApp::spawn().await;

    let created = app.register("a@x.com", "pw123").await;
    let user_id = created["data"]["user_id"].as_str().unwrap().to_string();
    let token = app.login("a@x.com", "pw123").await;

    let response = app
        .delete(&format!("/users/{}", user_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // The token is still unexpired and correctly signed, but its subject is
    // gone; it must never resolve to a stale identity
    let response = app
        .get("/user/get_profile")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile_partial() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123").await;
    let token = app.login("a@x.com", "pw123").await;

    let response = app
        .patch("/update_profile")
        .bearer_auth(&token)
        .json(&json!({ "user_country": "DE" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["user_country"], "DE");
    // Untouched fields survive
    assert_eq!(body["data"]["user_name"], "Ada");
    assert_eq!(body["data"]["user_address"], "1 Main St");
}

#[tokio::test]
async fn test_update_profile_changes_password() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123").await;
    let token = app.login("a@x.com", "pw123").await;

    let response = app
        .patch("/update_profile")
        .bearer_auth(&token)
        .json(&json!({ "user_password": "new_password" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer works, new one does
    let old = app
        .post("/login")
        .form(&[("username", "a@x.com"), ("password", "pw123")])
        .send()
        .await
        .unwrap();
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    app.login("a@x.com", "new_password").await;
}

#[tokio::test]
async fn test_update_profile_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .patch("/update_profile")
        .json(&json!({ "user_country": "DE" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123").await;
    app.register("b@x.com", "pw456").await;

    let response = app
        .get("/api/get_users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .delete(&format!("/users/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_invalid_id() {
    let app = TestApp::spawn().await;

    let response = app
        .delete("/users/42")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
