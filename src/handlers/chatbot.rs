// src/handlers/chatbot.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    models::chat::{ChatReply, ChatRequest},
    services::chatbot::Chatbot,
};

/// Answers a student's career question.
///
/// Never fails once the message is present: provider errors degrade to the
/// rule-based reply inside `Chatbot::respond`.
pub async fn chat(State(chatbot): State<Chatbot>, Json(payload): Json<ChatRequest>) -> impl IntoResponse {
    let message = payload.message.as_deref().map(str::trim).unwrap_or_default();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatReply {
                reply: "Please provide a valid message.".to_string(),
            }),
        );
    }

    let reply = chatbot.respond(message).await;
    (StatusCode::OK, Json(ChatReply { reply }))
}
