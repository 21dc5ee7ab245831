use serde::Deserialize;
use validator::Validate;

/// DTO for the contact form. Every field is required.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "All fields are required."))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "A valid email is required."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "All fields are required."))]
    pub message: String,
}
