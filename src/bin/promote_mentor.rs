// src/bin/promote_mentor.rs

//! Operator tool: `promote-mentor <email>` grants the mentor role to an existing user.

use std::{env, process::ExitCode};

use careerpath::{db, models::user::ROLE_MENTOR};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let Some(email) = env::args().nth(1).filter(|e| !e.trim().is_empty()) else {
        eprintln!("Usage: promote-mentor <email>");
        return ExitCode::from(2);
    };

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://careerpath.db".to_string());

    let pool = match db::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to open database {}: {}", database_url, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = db::migrate(&pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        return ExitCode::FAILURE;
    }

    let result = sqlx::query("UPDATE users SET role = ? WHERE email = ?")
        .bind(ROLE_MENTOR)
        .bind(email.trim())
        .execute(&pool)
        .await;

    match result {
        Ok(done) if done.rows_affected() > 0 => {
            tracing::info!("{} is now a mentor", email.trim());
            ExitCode::SUCCESS
        }
        Ok(_) => {
            tracing::error!("No user with email {}", email.trim());
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Failed to update role: {}", e);
            ExitCode::FAILURE
        }
    }
}
