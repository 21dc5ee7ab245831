use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// Represents the 'blogs' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    /// Authored HTML, rendered as-is by the front-end.
    pub content: String,
    /// career-tips, exam-updates, study-tips, industry-news, inspiration
    pub category: String,
    pub author: String,
    #[serde(default = "chrono::Utc::now")]
    pub date: chrono::DateTime<chrono::Utc>,
    pub read_time: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub tags: Json<Vec<String>>,
    pub image: Option<String>,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub likes: i64,
}

/// Query parameters for listing blogs.
#[derive(Debug, Deserialize)]
pub struct BlogListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// `all` or blank disables the filter.
    pub category: Option<String>,
    /// Matched against title, excerpt and content.
    pub search: Option<String>,
}

/// One page of blogs plus the numbers the pager needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub blogs: Vec<Blog>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}
