// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use validator::Validate;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_MENTOR: &str = "mentor";

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Unique email, used to log in.
    pub email: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    /// Current education level, e.g. "10th" or "12th".
    pub grade: String,

    pub interests: Json<Vec<String>>,

    /// User role: 'student' or 'mentor'.
    pub role: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Public part of a user returned next to a fresh token.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub grade: String,
    pub role: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            grade: user.grade,
            role: user.role,
        }
    }
}

/// Response body of register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserSummary,
}

/// DTO for creating a new user (Registration).
/// Fields default to empty so a missing field is a validation error (400).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username length must be between 3 and 50 characters."
    ))]
    pub username: String,
    #[serde(default)]
    #[validate(email(message = "A valid email is required."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password length must be between 6 and 128 characters."
    ))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "Grade is required."))]
    pub grade: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[validate(custom(function = validate_role))]
    pub role: Option<String>,
}

fn validate_role(role: &str) -> Result<(), validator::ValidationError> {
    if role == ROLE_STUDENT || role == ROLE_MENTOR {
        Ok(())
    } else {
        Err(validator::ValidationError::new("unknown_role"))
    }
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 254))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            username: "asha".into(),
            email: "asha@example.com".into(),
            password: "password123".into(),
            grade: "12th".into(),
            interests: vec!["science".into()],
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn role_is_optional_but_checked() {
        assert!(request(None).validate().is_ok());
        assert!(request(Some("mentor")).validate().is_ok());
        assert!(request(Some("admin")).validate().is_err());
    }

    #[test]
    fn email_must_be_well_formed() {
        let mut req = request(None);
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());
    }
}
