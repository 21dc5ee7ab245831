// src/models/roadmap.rs

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// Represents the 'career_roadmaps' table: a pre-authored path from a
/// starting education level to a target career.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmap {
    #[serde(default)]
    pub id: i64,
    pub career_title: String,
    /// Where the student starts, e.g. "10th", "12th", "Graduation".
    pub current_position: String,
    pub target_position: String,
    pub total_steps: i64,
    pub estimated_duration: String,
    /// Ordered steps. Serialized as `roadmap` to keep the public field name.
    #[serde(rename = "roadmap")]
    pub steps: Json<Vec<RoadmapStep>>,
    pub prerequisites: Json<Vec<String>>,
    pub success_rate: String,
    /// Easy, Medium or Hard.
    pub difficulty: String,
    /// Low, Medium or High.
    pub investment: String,
    pub alternatives: Json<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub step_number: i64,
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub exams: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Body (or query string) of a personalized roadmap lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedRoadmapRequest {
    #[serde(default)]
    pub career_title: String,
    pub current_position: Option<String>,
}
