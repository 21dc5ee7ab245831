use serde::{Deserialize, Serialize};

/// DTO for a chatbot message. `user` is accepted for compatibility and ignored.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
