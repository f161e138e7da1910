//! Client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::profile;

/// Explicit configuration handed to the client; nothing here is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
  pub api_key:  String,
  pub model:    String,
  pub base_url: String
}

/// Anything that can turn a prompt into text.
#[async_trait]
pub trait Completion: Send + Sync {
  async fn complete(&self, prompt: &str) -> Result<String, ServiceError>;
}

pub struct GeminiClient {
  client: Client,
  config: GeminiConfig
}

impl GeminiClient {
  pub fn new(config: GeminiConfig) -> Self {
    Self { client: Client::new(), config }
  }

  fn url(&self) -> String {
    format!(
      "{}/models/{}:generateContent?key={}",
      self.config.base_url.trim_end_matches('/'),
      self.config.model,
      self.config.api_key
    )
  }
}

#[async_trait]
impl Completion for GeminiClient {
  async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
    profile!("Gemini API call");
    log::debug!("Sending {} byte prompt to {}", prompt.len(), self.config.model);

    let response = self
      .client
      .post(self.url())
      .json(&GenerateRequest::new(prompt))
      .send()
      .await
      .map_err(|err| ServiceError::network(err.without_url().to_string()))?;

    let status = response.status();
    let body = response.text().await.map_err(|err| ServiceError::from(err.without_url()))?;

    if !status.is_success() {
      log::debug!("Gemini answered {}: {}", status, body);
      return Err(parse_error_response(status.as_u16(), &body));
    }

    parse_success_response(&body)
  }
}

/// Extracts the text of the first candidate from a successful response body.
pub fn parse_success_response(body: &str) -> Result<String, ServiceError> {
  let response: GenerateResponse =
    serde_json::from_str(body).map_err(|err| ServiceError::invalid_response(format!("Failed to parse response body: {}", err)))?;

  if let Some(feedback) = response.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref()) {
    return Err(ServiceError::invalid_response(format!("Prompt was blocked: {}", feedback)));
  }

  let candidate = response
    .candidates
    .unwrap_or_default()
    .into_iter()
    .next()
    .ok_or_else(|| ServiceError::invalid_response("No candidates returned"))?;

  let text: String = candidate
    .content
    .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
    .unwrap_or_default();

  if text.is_empty() {
    let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
    return Err(ServiceError::invalid_response(format!("No text returned (finish reason: {})", reason)));
  }

  Ok(text)
}

/// Maps a non-success response to a [`ServiceError`], preferring the structured Google error body.
pub fn parse_error_response(status: u16, body: &str) -> ServiceError {
  match serde_json::from_str::<ErrorResponse>(body) {
    Ok(ErrorResponse { error }) => ServiceError::from_api_status(error.status.as_deref(), error.code.unwrap_or(status), error.message),
    Err(_) => ServiceError::from_http_status(status, format!("HTTP {}: {}", status, body.trim()))
  }
}

// Wire types

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
  contents: Vec<RequestContent<'a>>
}

impl<'a> GenerateRequest<'a> {
  fn new(prompt: &'a str) -> Self {
    Self {
      contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }]
    }
  }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
  parts: Vec<RequestPart<'a>>
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
  text: &'a str
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
  candidates:      Option<Vec<Candidate>>,
  prompt_feedback: Option<PromptFeedback>
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
  content:       Option<ResponseContent>,
  finish_reason: Option<String>
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
  #[serde(default)]
  parts: Vec<ResponsePart>
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
  text: Option<String>
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
  block_reason: Option<String>
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
  error: ErrorBody
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
  code:    Option<u16>,
  message: String,
  status:  Option<String>
}
