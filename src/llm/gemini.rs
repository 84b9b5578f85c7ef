//! Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper around `POST {base}/models/{model}:generateContent`.
//! Request building and response parsing are pure functions for testability.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::{ChatResponse, LlmError, Message, Role};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client against `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let body = build_request(max_tokens, system, messages);
        let url = format!("{}/models/{model}:generateContent", self.base_url);

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_generate_content_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent<'a>>,
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

pub(crate) fn build_request<'a>(max_tokens: u32, system: &'a str, messages: &'a [Message]) -> GenerateRequest<'a> {
    let system_instruction = if system.trim().is_empty() {
        None
    } else {
        Some(GeminiContent { role: None, parts: vec![GeminiPart { text: system }] })
    };
    let contents = messages
        .iter()
        .filter(|m| !m.text.is_empty())
        .map(|m| GeminiContent { role: Some(wire_role(m.role)), parts: vec![GeminiPart { text: &m.text }] })
        .collect();
    GenerateRequest {
        system_instruction,
        contents,
        generation_config: GenerationConfig { max_output_tokens: max_tokens },
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_generate_content_response(json_text: &str) -> Result<ChatResponse, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    if !root.is_object() {
        return Err(LlmError::ApiParse("generateContent: expected a JSON object".to_string()));
    }
    let model = root
        .get("modelVersion")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let usage = root.get("usageMetadata");
    let input_tokens = usage
        .and_then(|u| u.get("promptTokenCount"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let output_tokens = usage
        .and_then(|u| u.get("candidatesTokenCount"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let Some(candidate) = root
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        // A blocked prompt comes back as 200 with only promptFeedback.
        let reason = root
            .get("promptFeedback")
            .and_then(|f| f.get("blockReason"))
            .and_then(Value::as_str)
            .unwrap_or("no_candidates")
            .to_ascii_lowercase();
        return Ok(ChatResponse { text: None, model, stop_reason: reason, input_tokens, output_tokens });
    };

    let stop_reason = match candidate.get("finishReason").and_then(Value::as_str) {
        None | Some("STOP") => "end_turn".to_string(),
        Some("MAX_TOKENS") => "max_tokens".to_string(),
        Some(other) => other.to_ascii_lowercase(),
    };

    let mut text = String::new();
    if let Some(parts) = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array)
    {
        for part in parts {
            if part.get("thought").and_then(Value::as_bool) == Some(true) {
                continue;
            }
            if let Some(t) = part.get("text").and_then(Value::as_str) {
                text.push_str(t);
            }
        }
    }
    let text = if text.trim().is_empty() { None } else { Some(text) };

    Ok(ChatResponse { text, model, stop_reason, input_tokens, output_tokens })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
