// src/main.rs

use careerpath::config::Config;
use careerpath::services::chatbot::Chatbot;
use careerpath::state::AppState;
use careerpath::{db, routes, seed};
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment (.env included)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to open database");
    tracing::info!("Database connected: {}", config.database_url);

    // Run Migrations Automatically
    tracing::info!("Running migrations...");
    db::migrate(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");

    // Seed curated content into empty tables
    if let Err(e) = seed::seed_content(&pool).await {
        tracing::error!("Failed to seed content: {:?}", e);
    }

    let chatbot = Chatbot::from_config(&config);
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, chatbot answers from its rule table only");
    }

    let port = config.port;
    let state = AppState {
        pool,
        config,
        chatbot,
    };

    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    axum::serve(listener, app).await.expect("Server error");
}
