// src/models/mentor.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Row shape of the mentor question listing (joined with `users` twice).
#[derive(Debug, Clone, FromRow)]
pub struct MentorQuestionRow {
    pub id: i64,
    pub question: String,
    pub asked_by_id: i64,
    pub asked_by_username: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub answer: Option<String>,
    pub answered_by_id: Option<i64>,
    pub answered_by_username: Option<String>,
    pub answered_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRef {
    pub id: i64,
    pub username: Option<String>,
}

/// A student question and, once a mentor replies, its answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorQuestion {
    pub id: i64,
    pub question: String,
    pub asked_by: UserRef,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub answer: Option<String>,
    pub answered_by: Option<UserRef>,
    pub answered_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<MentorQuestionRow> for MentorQuestion {
    fn from(row: MentorQuestionRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            asked_by: UserRef {
                id: row.asked_by_id,
                username: row.asked_by_username,
            },
            created_at: row.created_at,
            answer: row.answer,
            answered_by: row.answered_by_id.map(|id| UserRef {
                id,
                username: row.answered_by_username,
            }),
            answered_at: row.answered_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AskQuestionRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Question is required."))]
    pub question: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AnswerQuestionRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Answer is required."))]
    pub answer: String,
}
