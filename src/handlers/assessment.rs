// src/handlers/assessment.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};
use sqlx::{SqlitePool, types::Json as SqlJson};

use crate::{
    config::ASSESSMENT_HISTORY_LIMIT,
    error::AppError,
    models::assessment::{AssessmentOutcome, AssessmentQuestion, AssessmentResult, EvaluateRequest},
    services::assessment,
    utils::jwt::Claims,
};

/// Lists the questionnaire, grouped by category and heaviest questions first.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, AssessmentQuestion>(
        r#"
        SELECT id, question, options, category, weight
        FROM assessment_questions
        ORDER BY category ASC, weight DESC, id ASC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(questions))
}

/// Scores a set of answers.
///
/// The outcome depends on the answers alone. When `userId` is given the
/// attempt is also stored; a failed write is logged and the caller still
/// gets the outcome.
pub async fn evaluate(
    State(pool): State<SqlitePool>,
    Json(payload): Json<EvaluateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = assessment::evaluate(&payload.answers);

    if let Some(user_id) = payload.user_id {
        if let Err(e) = save_result(&pool, user_id, &payload, &outcome).await {
            tracing::error!(user_id, "Failed to save assessment result: {:?}", e);
        }
    }

    Ok(Json(outcome))
}

async fn save_result(
    pool: &SqlitePool,
    user_id: i64,
    payload: &EvaluateRequest,
    outcome: &AssessmentOutcome,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO assessment_results
            (user_id, answers, personality_type, career_recommendations,
             skills_analysis, action_plan, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(SqlJson(&payload.answers))
    .bind(&outcome.personality_type)
    .bind(SqlJson(&outcome.career_recommendations))
    .bind(SqlJson(&outcome.skills_analysis))
    .bind(SqlJson(&outcome.action_plan))
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
}

/// The caller's most recent assessment results, newest first.
pub async fn history(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let results = sqlx::query_as::<_, AssessmentResult>(
        r#"
        SELECT id, user_id, answers, personality_type, career_recommendations,
               skills_analysis, action_plan, created_at
        FROM assessment_results
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(ASSESSMENT_HISTORY_LIMIT)
    .fetch_all(&pool)
    .await?;

    Ok(Json(results))
}
