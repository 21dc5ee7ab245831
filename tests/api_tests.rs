// tests/api_tests.rs

mod support;

use axum::{body::Body, http::Request};
use careerpath::routes;
use support::{PASSWORD, spawn_app, test_pool, test_state};
use tower::ServiceExt;

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/random_path_that_does_not_exist").await;

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn register_works() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let body = app.register(None).await;

    // Assert
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["role"], "student");
    assert_eq!(body["user"]["grade"], "12th");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn register_as_mentor() {
    let app = spawn_app().await;

    let body = app.register(Some("mentor")).await;

    assert_eq!(body["user"]["role"], "mentor");
}

#[tokio::test]
async fn register_rejects_duplicates() {
    // Arrange
    let app = spawn_app().await;
    let first = app.register(None).await;
    let username = first["user"]["username"].as_str().unwrap();
    let email = first["user"]["email"].as_str().unwrap();

    // Act: same email, different username
    let response = app
        .post_json(
            "/api/register",
            &serde_json::json!({
                "username": format!("{}x", username),
                "email": email,
                "password": PASSWORD,
                "grade": "10th",
                "interests": []
            }),
        )
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn register_fails_validation() {
    // Arrange
    let app = spawn_app().await;

    // Act: username too short
    let short_name = app
        .post_json(
            "/api/register",
            &serde_json::json!({
                "username": "yo",
                "email": "yo@example.com",
                "password": PASSWORD,
                "grade": "12th"
            }),
        )
        .await;

    // Act: missing email and grade
    let missing_fields = app
        .post_json(
            "/api/register",
            &serde_json::json!({ "username": "someone", "password": PASSWORD }),
        )
        .await;

    // Act: unknown role
    let bad_role = app
        .post_json(
            "/api/register",
            &serde_json::json!({
                "username": "someone",
                "email": "someone@example.com",
                "password": PASSWORD,
                "grade": "12th",
                "role": "admin"
            }),
        )
        .await;

    // Assert
    assert_eq!(short_name.status().as_u16(), 400);
    assert_eq!(missing_fields.status().as_u16(), 400);
    assert_eq!(bad_role.status().as_u16(), 400);
}

#[tokio::test]
async fn login_works_and_rejects_bad_credentials() {
    // Arrange
    let app = spawn_app().await;
    let registered = app.register(None).await;
    let email = registered["user"]["email"].as_str().unwrap();

    // Act
    let ok = app
        .post_json(
            "/api/login",
            &serde_json::json!({ "email": email, "password": PASSWORD }),
        )
        .await;
    let wrong_password = app
        .post_json(
            "/api/login",
            &serde_json::json!({ "email": email, "password": "not-the-password" }),
        )
        .await;
    let unknown_email = app
        .post_json(
            "/api/login",
            &serde_json::json!({ "email": "nobody@example.com", "password": PASSWORD }),
        )
        .await;

    // Assert
    assert_eq!(ok.status().as_u16(), 200);
    let body: serde_json::Value = ok.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], registered["user"]["id"]);
    assert!(body["token"].is_string());

    assert_eq!(wrong_password.status().as_u16(), 400);
    assert_eq!(unknown_email.status().as_u16(), 400);
    let body: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn profile_requires_valid_token() {
    // Arrange
    let app = spawn_app().await;
    let (token, id) = app.login_as(None).await;

    // Act
    let missing = app.get("/api/profile").await;
    let invalid = app
        .client
        .get(app.url("/api/profile"))
        .header("Authorization", "Bearer not.a.token")
        .send()
        .await
        .unwrap();
    let valid = app
        .client
        .get(app.url("/api/profile"))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(missing.status().as_u16(), 401);
    assert_eq!(invalid.status().as_u16(), 403);
    assert_eq!(valid.status().as_u16(), 200);

    let profile: serde_json::Value = valid.json().await.unwrap();
    assert_eq!(profile["id"], id);
    assert_eq!(profile["interests"], serde_json::json!(["technology"]));
    assert!(profile["createdAt"].is_string());
    assert!(profile.get("password").is_none());
}

#[tokio::test]
async fn protected_route_without_server() {
    // Drive the router directly, no socket involved
    let router = routes::create_router(test_state(test_pool().await, None));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/assessment/history")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}
