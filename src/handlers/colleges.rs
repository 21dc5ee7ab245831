// src/handlers/colleges.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    error::AppError,
    models::college::{College, CollegeListParams},
    utils::filter::{push_equals, push_search_with_lists},
};

const COLLEGE_COLUMNS: &str = r#"
    id, name, location, region, college_type, nirf_rank, established,
    website, contact, address, facilities, specializations, mhtcet_cutoffs,
    fees, placement, admission_process, documents, important_dates, image"#;

fn college_query() -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new("SELECT");
    qb.push(COLLEGE_COLUMNS).push(" FROM colleges WHERE 1 = 1");
    qb
}

/// Lists colleges, filtered by region, type and a free-text search.
/// Best NIRF rank first; unranked colleges go last.
pub async fn list_colleges(
    State(pool): State<SqlitePool>,
    Query(params): Query<CollegeListParams>,
) -> Result<impl IntoResponse, AppError> {
    let mut qb = college_query();
    push_equals(&mut qb, "region", params.region.as_deref());
    push_equals(&mut qb, "college_type", params.college_type.as_deref());
    push_search_with_lists(
        &mut qb,
        &["name", "location"],
        &["specializations"],
        params.search.as_deref(),
    );
    qb.push(" ORDER BY nirf_rank IS NULL, nirf_rank, id");

    let colleges: Vec<College> = qb.build_query_as().fetch_all(&pool).await?;

    Ok(Json(colleges))
}

/// Lists colleges in one region ("Mumbai", "Pune").
pub async fn list_colleges_by_region(
    State(pool): State<SqlitePool>,
    Path(region): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut qb = college_query();
    push_equals(&mut qb, "region", Some(region.as_str()));
    qb.push(" ORDER BY nirf_rank IS NULL, nirf_rank, id");

    let colleges: Vec<College> = qb.build_query_as().fetch_all(&pool).await?;

    Ok(Json(colleges))
}

/// Retrieves a single college by ID.
pub async fn get_college(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut qb = college_query();
    qb.push(" AND id = ").push_bind(id);

    let college: College = qb
        .build_query_as()
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("College not found".to_string()))?;

    Ok(Json(college))
}
