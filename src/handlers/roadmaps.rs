// src/handlers/roadmaps.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::roadmap::{CareerRoadmap, PersonalizedRoadmapRequest},
    services::roadmap_matcher::find_roadmap,
};

const ROADMAP_SELECT: &str = r#"
    SELECT id, career_title, current_position, target_position, total_steps,
           estimated_duration, steps, prerequisites, success_rate, difficulty,
           investment, alternatives
    FROM career_roadmaps"#;

/// All roadmaps in insertion order (ascending id). The matcher relies on this order.
async fn all_roadmaps(pool: &SqlitePool) -> Result<Vec<CareerRoadmap>, AppError> {
    let roadmaps = sqlx::query_as::<_, CareerRoadmap>(&format!("{ROADMAP_SELECT} ORDER BY id"))
        .fetch_all(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load roadmaps: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;
    Ok(roadmaps)
}

/// Lists every roadmap.
pub async fn list_roadmaps(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(all_roadmaps(&pool).await?))
}

/// Retrieves the first roadmap whose career title is exactly `career_title`.
pub async fn get_roadmap_by_title(
    State(pool): State<SqlitePool>,
    Path(career_title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let roadmap = sqlx::query_as::<_, CareerRoadmap>(&format!(
        "{ROADMAP_SELECT} WHERE career_title = ? ORDER BY id LIMIT 1"
    ))
    .bind(&career_title)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Roadmap not found".to_string()))?;

    Ok(Json(roadmap))
}

async fn personalized(
    pool: &SqlitePool,
    req: PersonalizedRoadmapRequest,
) -> Result<CareerRoadmap, AppError> {
    if req.career_title.trim().is_empty() {
        return Err(AppError::BadRequest("careerTitle is required".to_string()));
    }

    let roadmaps = all_roadmaps(pool).await?;
    let (roadmap, policy) = find_roadmap(
        &roadmaps,
        &req.career_title,
        req.current_position.as_deref(),
    )
    .ok_or(AppError::NotFound("Roadmap not found".to_string()))?;

    tracing::debug!(
        roadmap_id = roadmap.id,
        ?policy,
        "Matched roadmap for '{}'",
        req.career_title
    );

    Ok(roadmap.clone())
}

/// Finds the roadmap for a career and starting position (JSON body).
/// Falls back to a title-only match when no roadmap starts at that position.
pub async fn personalized_roadmap(
    State(pool): State<SqlitePool>,
    Json(req): Json<PersonalizedRoadmapRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(personalized(&pool, req).await?))
}

/// Same lookup as `personalized_roadmap`, driven by the query string.
/// Requires login.
pub async fn personalized_roadmap_query(
    State(pool): State<SqlitePool>,
    Query(req): Query<PersonalizedRoadmapRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(personalized(&pool, req).await?))
}
