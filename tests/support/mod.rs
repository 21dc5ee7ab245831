// tests/support/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use careerpath::{
    config::Config,
    db, routes, seed,
    services::chatbot::{Chatbot, ReplyProvider},
    state::AppState,
};
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test_secret_for_integration_tests".to_string(),
        jwt_expiration: 600, // 10 minutes for tests
        rust_log: "error".to_string(),
        port: 0,
        static_dir: "tests/no_static_dir".to_string(),
        openai_api_key: None,
        openai_model: "gpt-3.5-turbo".to_string(),
        openai_base_url: "http://127.0.0.1:9".to_string(),
    }
}

/// Fresh in-memory database: migrated and seeded.
/// A single connection that never expires keeps the database alive.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    db::migrate(&pool).await.expect("Failed to migrate database");
    seed::seed_content(&pool).await.expect("Failed to seed database");

    pool
}

pub fn test_state(pool: SqlitePool, provider: Option<Arc<dyn ReplyProvider>>) -> AppState {
    AppState {
        pool,
        config: test_config(),
        chatbot: Chatbot::new(provider),
    }
}

/// Spawns the app on a random port with the rule-based chatbot.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(None).await
}

pub async fn spawn_app_with(provider: Option<Arc<dyn ReplyProvider>>) -> TestApp {
    let pool = test_pool().await;
    let app = routes::create_router(test_state(pool.clone(), provider));

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        pool,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Registers a fresh student and returns the register response body.
    pub async fn register(&self, role: Option<&str>) -> Value {
        let name = format!("u_{}", &uuid::Uuid::new_v4().to_string()[..8]);
        let mut body = serde_json::json!({
            "username": name,
            "email": format!("{}@example.com", name),
            "password": PASSWORD,
            "grade": "12th",
            "interests": ["technology"]
        });
        if let Some(role) = role {
            body["role"] = Value::from(role);
        }

        let response = self.post_json("/api/register", &body).await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse register json")
    }

    /// Registers a user and returns (token, user id).
    pub async fn login_as(&self, role: Option<&str>) -> (String, i64) {
        let registered = self.register(role).await;
        let token = registered["token"].as_str().expect("Token not found").to_string();
        let id = registered["user"]["id"].as_i64().expect("User id not found");
        (token, id)
    }
}
