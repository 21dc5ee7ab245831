// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Number of past assessment results returned by the history endpoint.
pub const ASSESSMENT_HISTORY_LIMIT: i64 = 10;

/// Page size used when a list request carries no `limit`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound for a requested page size.
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub port: u16,
    /// Directory served as the router fallback (the single-page front-end).
    pub static_dir: String,
    /// Chat completion credentials. The chatbot answers from its rule table when unset.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://careerpath.db".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24 * 60 * 60);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".to_string());

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let openai_model = env::var("OPENAI_MODEL")
            .unwrap_or_else(|_| "gpt-3.5-turbo".to_string());

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
            port,
            static_dir,
            openai_api_key,
            openai_model,
            openai_base_url,
        }
    }
}
