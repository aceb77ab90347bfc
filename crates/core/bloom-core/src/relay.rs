//! Thin passthrough to the external chat backend.
//!
//! The contract is deliberately minimal: forward the prompt and conversation
//! tag unchanged, relay whatever status and JSON body come back. No retry,
//! no backoff, no timeout policy.

use crate::error::AppResult;
use serde::Serialize;
use serde_json::{Value, json};

/// Environment variable naming the backend base URL.
const ENV_BACKEND_URL: &str = "BLOOM_BACKEND_URL";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const CHAT_PATH: &str = "/chat/text";

/// Conversation-type tag understood by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatKind {
    StudyBuddy,
    Advisor,
    General,
}

impl ChatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatKind::StudyBuddy => "study_buddy",
            ChatKind::Advisor => "advisor",
            ChatKind::General => "general",
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    prompt: &'a str,
    chat_type: &'a str,
}

/// The external service's response, relayed unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayReply {
    pub status: u16,
    pub body: Value,
}

impl RelayReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The assistant text on a successful reply, if the body carries one.
    pub fn response_text(&self) -> Option<&str> {
        self.body.get("response").and_then(Value::as_str)
    }
}

/// Passthrough rule: whatever the backend answered is relayed unchanged;
/// a missing body (transport failure, unparseable payload) degrades to a
/// generic failure.
pub fn reply_from_parts(status: u16, body: Option<Value>) -> RelayReply {
    match body {
        Some(body) => RelayReply { status, body },
        None => RelayReply {
            status: 500,
            body: json!({ "message": "Internal server error" }),
        },
    }
}

pub struct RelayClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("bloom-tui")
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Reads `BLOOM_BACKEND_URL`, defaulting to a local address.
    pub fn from_env() -> AppResult<Self> {
        let base_url =
            std::env::var(ENV_BACKEND_URL).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forwards the prompt and relays the backend's status and body as-is.
    pub fn send_chat(&self, prompt: &str, kind: ChatKind) -> RelayReply {
        let url = format!("{}{}", self.base_url, CHAT_PATH);
        let request = ChatRequest {
            prompt,
            chat_type: kind.as_str(),
        };

        match self.http.post(&url).json(&request).send() {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.json::<Value>().ok();
                reply_from_parts(status, body)
            }
            Err(e) => {
                log::error!("chat relay request to {} failed: {}", url, e);
                reply_from_parts(500, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_status_and_body_pass_through_unchanged() {
        let body = json!({ "detail": "Invalid chat_type" });
        let reply = reply_from_parts(400, Some(body.clone()));
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body, body);
        assert!(!reply.is_success());

        let body = json!({ "detail": "model unavailable" });
        let reply = reply_from_parts(503, Some(body.clone()));
        assert_eq!(reply.status, 503);
        assert_eq!(reply.body, body);
    }

    #[test]
    fn success_body_passes_through_with_response_text() {
        let reply = reply_from_parts(200, Some(json!({ "response": "you've got this" })));
        assert!(reply.is_success());
        assert_eq!(reply.response_text(), Some("you've got this"));
    }

    #[test]
    fn missing_body_degrades_to_generic_failure() {
        let reply = reply_from_parts(200, None);
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body["message"], "Internal server error");
        assert_eq!(reply.response_text(), None);
    }

    #[test]
    fn chat_kind_tags_match_the_backend() {
        assert_eq!(ChatKind::StudyBuddy.as_str(), "study_buddy");
        assert_eq!(ChatKind::Advisor.as_str(), "advisor");
        assert_eq!(ChatKind::General.as_str(), "general");
    }
}
