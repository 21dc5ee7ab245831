// src/handlers/mentor.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::mentor::{AnswerQuestionRequest, AskQuestionRequest, MentorQuestion, MentorQuestionRow},
    utils::{html::clean_html, jwt::Claims},
};

const QUESTION_SELECT: &str = r#"
    SELECT q.id, q.question, q.asked_by AS asked_by_id, asker.username AS asked_by_username,
           q.created_at, q.answer, q.answered_by AS answered_by_id,
           mentor.username AS answered_by_username, q.answered_at
    FROM mentor_questions q
    LEFT JOIN users asker ON asker.id = q.asked_by
    LEFT JOIN users mentor ON mentor.id = q.answered_by"#;

async fn fetch_question(pool: &SqlitePool, id: i64) -> Result<Option<MentorQuestion>, AppError> {
    let row = sqlx::query_as::<_, MentorQuestionRow>(&format!("{QUESTION_SELECT} WHERE q.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(MentorQuestion::from))
}

/// Lists all questions with asker and answerer, newest first.
pub async fn list_questions(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let rows = sqlx::query_as::<_, MentorQuestionRow>(&format!(
        "{QUESTION_SELECT} ORDER BY q.created_at DESC, q.id DESC"
    ))
    .fetch_all(&pool)
    .await?;

    let questions: Vec<MentorQuestion> = rows.into_iter().map(MentorQuestion::from).collect();
    Ok(Json(questions))
}

/// Posts a question on behalf of the logged-in user.
pub async fn ask_question(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<AskQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(e) = payload.validate() {
        return Err(AppError::BadRequest(e.to_string()));
    }

    // Markup that sanitizes down to nothing counts as empty
    let question = clean_html(&payload.question);
    if question.trim().is_empty() {
        return Err(AppError::BadRequest("Question is required.".to_string()));
    }

    let asked_by = claims.user_id()?;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO mentor_questions (question, asked_by, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&question)
    .bind(asked_by)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await?;

    tracing::info!(question_id = id, user_id = asked_by, "Mentor question posted");

    let created = fetch_question(&pool, id)
        .await?
        .ok_or(AppError::InternalServerError("Question vanished after insert".to_string()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Records a mentor's answer. A question is answered at most once.
pub async fn answer_question(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<AnswerQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(e) = payload.validate() {
        return Err(AppError::BadRequest(e.to_string()));
    }

    let answer = clean_html(&payload.answer);
    if answer.trim().is_empty() {
        return Err(AppError::BadRequest("Answer is required.".to_string()));
    }

    let mentor_id = claims.user_id()?;
    let updated = sqlx::query(
        r#"
        UPDATE mentor_questions
        SET answer = ?, answered_by = ?, answered_at = ?
        WHERE id = ? AND answer IS NULL
        "#,
    )
    .bind(&answer)
    .bind(mentor_id)
    .bind(chrono::Utc::now())
    .bind(id)
    .execute(&pool)
    .await?
    .rows_affected();

    if updated == 0 {
        return match fetch_question(&pool, id).await? {
            None => Err(AppError::NotFound("Question not found".to_string())),
            Some(_) => Err(AppError::Conflict("Question already answered".to_string())),
        };
    }

    tracing::info!(question_id = id, mentor_id, "Mentor question answered");

    let answered = fetch_question(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Question not found".to_string()))?;

    Ok(Json(answered))
}
