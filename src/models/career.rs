// src/models/career.rs

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// Represents the 'careers' table: one career path students can browse.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Education level the path starts from ("10th" or "12th").
    pub education_level: String,
    pub subjects: Json<Vec<String>>,
    pub skills: Json<Vec<String>>,
    pub salary: Option<String>,
    pub duration: Option<String>,
    pub requirements: Json<Vec<String>>,
    pub opportunities: Json<Vec<String>>,
}

/// Query parameters for listing careers.
#[derive(Debug, Deserialize)]
pub struct CareerListParams {
    /// Matched against title and description.
    pub search: Option<String>,
}
