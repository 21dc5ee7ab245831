// src/services/chatbot.rs

//! Career counselor chatbot.
//!
//! When an API key is configured the message is sent to an OpenAI-compatible
//! chat completion endpoint. Whatever goes wrong there, the student still gets
//! an answer from the static rule table below.

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

const SYSTEM_PROMPT: &str = "You are a helpful, friendly career guidance counselor for students in India. \
                             Give practical, positive, and actionable advice.";
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;

pub const DEFAULT_REPLY: &str =
    "I'm here to help with your career questions! Please ask about courses, colleges, or career options.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned no content")]
    EmptyContent,
}

/// Something that can turn a student message into a reply.
#[async_trait]
pub trait ReplyProvider: Send + Sync {
    async fn complete(&self, message: &str) -> Result<String, ChatError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [CompletionMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat completion client for the OpenAI API (or anything speaking its protocol).
/// No request timeout is set; a hung provider only delays that one request.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ReplyProvider for OpenAiClient {
    async fn complete(&self, message: &str) -> Result<String, ChatError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: [
                CompletionMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                CompletionMessage {
                    role: "user",
                    content: message,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ChatError::EmptyContent)
    }
}

/// Ordered rules; the first pattern that matches picks the reply.
static FALLBACK_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            "science",
            "After 12th science, you can consider engineering, medicine, pharmacy, pure sciences, or research. \
             Would you like details on any of these?",
        ),
        (
            "data scientist",
            "To become a data scientist, focus on mathematics, statistics, programming (Python/R), and learn about \
             machine learning. Consider BSc/BTech in CS, then a master's or certifications.",
        ),
        (
            r"ui.?ux|design",
            "For UI/UX design, you can pursue courses in design, learn tools like Figma/Adobe XD, and build a portfolio. \
             Many colleges offer B.Des or short-term certifications.",
        ),
    ]
    .into_iter()
    .map(|(pattern, reply)| {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("static chatbot pattern");
        (regex, reply)
    })
    .collect()
});

/// Rule-based reply used when no provider is configured or the provider fails.
pub fn fallback_reply(message: &str) -> &'static str {
    FALLBACK_RULES
        .iter()
        .find(|(regex, _)| regex.is_match(message))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[derive(Clone)]
pub struct Chatbot {
    provider: Option<Arc<dyn ReplyProvider>>,
}

impl Chatbot {
    pub fn new(provider: Option<Arc<dyn ReplyProvider>>) -> Self {
        Self { provider }
    }

    /// A chatbot that only ever answers from the rule table.
    pub fn rules_only() -> Self {
        Self::new(None)
    }

    pub fn from_config(config: &Config) -> Self {
        let provider = config.openai_api_key.clone().map(|key| {
            Arc::new(OpenAiClient::new(
                key,
                config.openai_model.clone(),
                config.openai_base_url.clone(),
            )) as Arc<dyn ReplyProvider>
        });
        Self::new(provider)
    }

    pub async fn respond(&self, message: &str) -> String {
        if let Some(provider) = &self.provider {
            match provider.complete(message).await {
                Ok(reply) => {
                    debug!("Chat provider answered ({} chars)", reply.len());
                    return reply;
                }
                Err(e) => warn!("Chat provider failed, using rule table: {}", e),
            }
        }

        fallback_reply(message).to_string()
    }
}
