// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::{SqlitePool, types::Json as SqlJson};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{AuthResponse, CreateUserRequest, LoginRequest, ROLE_STUDENT, User},
    utils::{
        hash::{hash_password, verify_password},
        jwt::sign_jwt,
    },
};

const USER_COLUMNS: &str = "id, username, email, password, grade, interests, role, created_at";

fn issue_token(user: &User, config: &Config) -> Result<String, AppError> {
    sign_jwt(user.id, &user.role, &config.jwt_secret, config.jwt_expiration)
}

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created with a token, so the client is logged in right away.
pub async fn register(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM users WHERE email = ? OR username = ?")
            .bind(&payload.email)
            .bind(&payload.username)
            .fetch_optional(&pool)
            .await?;

    if existing.is_some() {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    let hashed_password = hash_password(&payload.password)?;
    let role = payload.role.as_deref().unwrap_or(ROLE_STUDENT);

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (username, email, password, grade, interests, role, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&payload.username)
    .bind(&payload.email)
    .bind(&hashed_password)
    .bind(&payload.grade)
    .bind(SqlJson(&payload.interests))
    .bind(role)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        // A concurrent registration can still trip the UNIQUE constraints
        if e.to_string().contains("UNIQUE constraint failed") {
            AppError::BadRequest("User already exists".to_string())
        } else {
            tracing::error!("Failed to register user: {:?}", e);
            AppError::from(e)
        }
    })?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");

    let token = issue_token(&user, &config)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully",
            token,
            user: user.into(),
        }),
    ))
}

/// Authenticates a user by email and password and returns a JWT token.
/// Unknown email and wrong password get the same answer.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
    ))
    .bind(&payload.email)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?
    .ok_or(AppError::BadRequest("Invalid credentials".to_string()))?;

    if !verify_password(&payload.password, &user.password)? {
        return Err(AppError::BadRequest("Invalid credentials".to_string()));
    }

    let token = issue_token(&user, &config)?;

    Ok(Json(AuthResponse {
        message: "Login successful",
        token,
        user: user.into(),
    }))
}

/// Loads a user by id, for handlers that already hold verified claims.
pub async fn find_user(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}
