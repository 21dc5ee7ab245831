// src/handlers/careers.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    error::AppError,
    models::career::{Career, CareerListParams},
    utils::filter::{push_equals, push_search},
};

const CAREER_SELECT: &str = r#"
    SELECT id, title, description, education_level, subjects, skills,
           salary, duration, requirements, opportunities
    FROM careers
    WHERE 1 = 1"#;

/// Lists all careers, optionally narrowed by a free-text search.
pub async fn list_careers(
    State(pool): State<SqlitePool>,
    Query(params): Query<CareerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let mut qb = QueryBuilder::<Sqlite>::new(CAREER_SELECT);
    push_search(&mut qb, &["title", "description"], params.search.as_deref());
    qb.push(" ORDER BY id");

    let careers: Vec<Career> = qb.build_query_as().fetch_all(&pool).await?;

    Ok(Json(careers))
}

/// Lists careers that start from the given education level ("10th", "12th").
pub async fn list_careers_by_level(
    State(pool): State<SqlitePool>,
    Path(level): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut qb = QueryBuilder::<Sqlite>::new(CAREER_SELECT);
    push_equals(&mut qb, "education_level", Some(level.as_str()));
    qb.push(" ORDER BY id");

    let careers: Vec<Career> = qb.build_query_as().fetch_all(&pool).await.map_err(|e| {
        tracing::error!("Failed to list careers for level {}: {:?}", level, e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(careers))
}
