// src/handlers/contact.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{error::AppError, models::contact::ContactRequest, utils::html::clean_html};

/// Stores a contact-form message for the site owners.
pub async fn submit_contact(
    State(pool): State<SqlitePool>,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::BadRequest("All fields are required.".to_string()));
    }

    let name = clean_html(&payload.name);
    let message = clean_html(&payload.message);
    if name.is_empty() || message.is_empty() {
        return Err(AppError::BadRequest("All fields are required.".to_string()));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO contact_messages (name, email, message, created_at) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&name)
    .bind(payload.email.trim())
    .bind(&message)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await?;

    tracing::info!(contact_id = id, "Contact message received");

    Ok(Json(json!({ "message": "Message received." })))
}
