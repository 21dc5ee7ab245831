// src/models/assessment.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{FromRow, types::Json};

/// Question id -> chosen option value. Keys are strings because they arrive
/// as JSON object keys; values are free-form and never checked against the
/// question's option list.
pub type AnswerSet = BTreeMap<String, String>;

/// Represents the 'assessment_questions' table. Read-only to clients.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    #[serde(default)]
    pub id: i64,

    /// The prompt shown to the student.
    pub question: String,

    /// Ordered choices, stored as a JSON array.
    pub options: Json<Vec<QuestionOption>>,

    /// personality, interests, preferences, problem-solving, motivation...
    pub category: String,

    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Token submitted as the answer and fed to the scorer.
    pub value: String,
    /// Label shown to the student.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub career: String,
    /// Static match score, 0-100.
    pub score: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub name: String,
    /// 0-100
    pub level: u32,
    /// 0-5
    pub stars: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// Everything `evaluate` returns to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutcome {
    pub personality_type: String,
    pub personality_summary: String,
    pub career_recommendations: Vec<CareerRecommendation>,
    pub skills_analysis: Vec<SkillAssessment>,
    pub action_plan: Vec<ActionStep>,
}

/// Represents the 'assessment_results' table. Written once, never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub id: i64,
    /// Weak reference to `users.id`.
    pub user_id: i64,
    pub answers: Json<AnswerSet>,
    pub personality_type: String,
    pub career_recommendations: Json<Vec<CareerRecommendation>>,
    pub skills_analysis: Json<Vec<SkillAssessment>>,
    pub action_plan: Json<Vec<ActionStep>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting an assessment attempt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    #[serde(default, deserialize_with = "string_answers")]
    pub answers: AnswerSet,

    /// When present, the result is saved for this user.
    pub user_id: Option<i64>,
}

/// Keeps only answers whose value is a JSON string; numbers, nulls and the
/// like cannot match any option, so they are dropped instead of failing the request.
fn string_answers<'de, D>(deserializer: D) -> Result<AnswerSet, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(question, value)| match value {
            serde_json::Value::String(value) => Some((question, value)),
            _ => None,
        })
        .collect())
}
