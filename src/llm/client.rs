//! Completion client — builds one chat-completions request, sends it,
//! and extracts the first choice's text.
//!
//! One call per user action: no retries, no timeout, no shared state.
//! Failures come back as [`CompletionError`] so callers can match on the
//! kind (transport vs API status vs unusable body).

use std::time::Instant;

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use thiserror::Error;

use super::prompts::{self, COMPLETIONS_PATH, MODEL};
use super::types::{ApiErrorBody, ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl};

/// Endpoint coordinates, resolved by the caller before each request.
/// The client never reads ambient configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://api.openai.com`. The completions path is
    /// appended verbatim.
    pub host: String,
    /// Bearer token forwarded in the Authorization header.
    pub key: String,
}

/// Why a single completion call failed. Terminal for that call;
/// re-invoking is the caller's decision.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network-level failure before any HTTP status was received.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// Non-2xx status from the API, with the server message when present.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    /// 2xx status but the body had no `choices[0].message.content`.
    #[error("malformed response: {0}")]
    Malformed(String),
}

pub struct CompletionClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CompletionClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Run one task against the API and return the generated text.
    ///
    /// `task` selects the instruction template (unknown identifiers mean
    /// an empty template, not an error). `images` are data URIs, sent in
    /// the order given.
    pub async fn complete(
        &self,
        task: &str,
        text: &str,
        images: &[String],
    ) -> Result<String, CompletionError> {
        let request = build_request(task, text, images);

        log::info!("[LLM] Task: {}", task);
        log::info!("[LLM] Model: {}", MODEL);
        if !images.is_empty() {
            log::info!("[LLM] Images: {}", images.len());
        }

        let url = format!("{}{}", self.config.host, COMPLETIONS_PATH);
        let start = Instant::now();

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.key))
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(CompletionError::Transport)?;
        log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

        if !status.is_success() {
            log::error!("[LLM] API returned {}", status);
            return Err(api_error(status, &body));
        }

        extract_content(&body)
    }
}

/// Assemble the request body: one text part equal to `template + text`
/// (direct concatenation, no separator) when either is non-empty, then
/// one image part per data URI, preserving input order.
fn build_request(task: &str, text: &str, images: &[String]) -> ChatRequest {
    let instruction = prompts::instruction_for(task).unwrap_or_default();

    let mut content = Vec::with_capacity(images.len() + 1);
    if !instruction.is_empty() || !text.is_empty() {
        content.push(ContentPart::Text {
            text: format!("{instruction}{text}"),
        });
    }
    for uri in images {
        content.push(ContentPart::ImageUrl {
            image_url: ImageUrl { url: uri.clone() },
        });
    }

    ChatRequest {
        model: MODEL.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content,
        }],
    }
}

/// Build the `Api` error for a non-2xx response, pulling `error.message`
/// out of the body when the server sent one.
fn api_error(status: StatusCode, body: &str) -> CompletionError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| "unknown error".to_string());
    CompletionError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Pull `choices[0].message.content` out of a 2xx body.
fn extract_content(body: &str) -> Result<String, CompletionError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::Malformed(e.to_string()))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Malformed("no choices in response".to_string()))?;
    Ok(choice.message.content)
}
