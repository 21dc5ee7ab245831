// src/handlers/blogs.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    error::AppError,
    models::blog::{Blog, BlogListParams, BlogPage},
    utils::{
        filter::{non_blank, push_equals, push_search},
        pagination::Pagination,
    },
};

const BLOG_COLUMNS: &str = "id, title, excerpt, content, category, author, date, read_time, \
                            featured, tags, image, views, likes";

const SEARCH_COLUMNS: &[&str] = &["title", "excerpt", "content"];

/// `all` is the front-end's "no filter" choice.
fn category_filter(category: Option<&str>) -> Option<&str> {
    non_blank(category).filter(|c| !c.eq_ignore_ascii_case("all"))
}

fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, params: &BlogListParams) {
    push_equals(qb, "category", category_filter(params.category.as_deref()));
    push_search(qb, SEARCH_COLUMNS, params.search.as_deref());
}

/// Lists blogs page by page. Featured posts come first, then newest.
pub async fn list_blogs(
    State(pool): State<SqlitePool>,
    Query(params): Query<BlogListParams>,
) -> Result<impl IntoResponse, AppError> {
    let pagination = Pagination::from_params(params.page, params.limit);

    let mut count_qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM blogs WHERE 1 = 1");
    push_filters(&mut count_qb, &params);
    let total: i64 = count_qb.build_query_scalar().fetch_one(&pool).await?;

    let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE 1 = 1"));
    push_filters(&mut qb, &params);
    qb.push(" ORDER BY featured DESC, date DESC, id DESC LIMIT ")
        .push_bind(pagination.limit)
        .push(" OFFSET ")
        .push_bind(pagination.offset());

    let blogs: Vec<Blog> = qb.build_query_as().fetch_all(&pool).await.map_err(|e| {
        tracing::error!("Failed to list blogs: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(BlogPage {
        blogs,
        total,
        pages: pagination.total_pages(total),
        current_page: pagination.page,
    }))
}

/// Returns one blog post and counts the view.
pub async fn get_blog(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let updated = sqlx::query("UPDATE blogs SET views = views + 1 WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?
        .rows_affected();

    if updated == 0 {
        return Err(AppError::NotFound("Blog not found".to_string()));
    }

    let blog = sqlx::query_as::<_, Blog>(&format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = ?"))
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Blog not found".to_string()))?;

    Ok(Json(blog))
}

/// Adds one like and returns the new count.
pub async fn like_blog(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let likes: i64 =
        sqlx::query_scalar("UPDATE blogs SET likes = likes + 1 WHERE id = ? RETURNING likes")
            .bind(id)
            .fetch_optional(&pool)
            .await?
            .ok_or(AppError::NotFound("Blog not found".to_string()))?;

    Ok(Json(json!({ "likes": likes })))
}
