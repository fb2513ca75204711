//! Client for the hosted Generative Language API

use crate::config::{Config, ModelConfig};
use crate::error::{OptiScoreError, Result};
use log::{debug, info};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Seam for the model call so the pipeline can be exercised without the
/// network. Each call is independent; implementations hold no per-call state.
pub trait ModelClient {
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Fails with an authentication error when the API key is absent from
    /// the environment; nothing else in the pipeline may run without it.
    pub fn new(model_config: &ModelConfig) -> Result<Self> {
        let api_key = Config::api_key()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(model_config.timeout_secs))
            .build()
            .map_err(|e| {
                OptiScoreError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_key,
            model: model_config.name.clone(),
            api_base: model_config.api_base.clone(),
        })
    }
}

impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        info!("Sending prompt to model {}", self.model);
        debug!("Prompt length: {} characters", prompt.len());

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_service_error(e.status(), &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_service_error(Some(status), &body));
        }

        let decoded: GenerateContentResponse = response.json().await.map_err(|e| {
            OptiScoreError::TransientService(format!("Unreadable service response: {}", e))
        })?;

        let text = decoded
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .ok_or_else(|| {
                OptiScoreError::TransientService("Model returned no candidates".to_string())
            })?;

        info!("Received {} characters from model", text.len());
        Ok(text)
    }
}

/// Maps a service failure to an error kind. All quota/rate-limit string
/// matching lives here and nowhere else, so callers branch on the kind
/// instead of inspecting messages.
pub fn classify_service_error(status: Option<StatusCode>, message: &str) -> OptiScoreError {
    match status {
        Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN) => {
            return OptiScoreError::Authentication(message.to_string());
        }
        Some(StatusCode::TOO_MANY_REQUESTS) => {
            return OptiScoreError::RateLimit(message.to_string());
        }
        _ => {}
    }

    let lowered = message.to_lowercase();
    if lowered.contains("quota")
        || lowered.contains("rate limit")
        || lowered.contains("resource_exhausted")
        || lowered.contains("429")
    {
        OptiScoreError::RateLimit(message.to_string())
    } else if lowered.contains("api key") {
        OptiScoreError::Authentication(message.to_string())
    } else {
        OptiScoreError::TransientService(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unauthorized() {
        let err = classify_service_error(Some(StatusCode::UNAUTHORIZED), "bad credentials");
        assert!(matches!(err, OptiScoreError::Authentication(_)));
    }

    #[test]
    fn test_classify_forbidden() {
        let err = classify_service_error(Some(StatusCode::FORBIDDEN), "key disabled");
        assert!(matches!(err, OptiScoreError::Authentication(_)));
    }

    #[test]
    fn test_classify_http_429() {
        let err = classify_service_error(Some(StatusCode::TOO_MANY_REQUESTS), "slow down");
        assert!(matches!(err, OptiScoreError::RateLimit(_)));
    }

    #[test]
    fn test_classify_quota_wording_without_status() {
        let err = classify_service_error(None, "Quota exceeded for requests per minute");
        assert!(matches!(err, OptiScoreError::RateLimit(_)));

        let err = classify_service_error(None, "RESOURCE_EXHAUSTED: try later");
        assert!(matches!(err, OptiScoreError::RateLimit(_)));
    }

    #[test]
    fn test_classify_api_key_wording() {
        let err = classify_service_error(None, "API key not valid");
        assert!(matches!(err, OptiScoreError::Authentication(_)));
    }

    #[test]
    fn test_classify_other_failures_are_transient() {
        let err = classify_service_error(Some(StatusCode::INTERNAL_SERVER_ERROR), "oops");
        assert!(matches!(err, OptiScoreError::TransientService(_)));

        let err = classify_service_error(None, "connection reset by peer");
        assert!(matches!(err, OptiScoreError::TransientService(_)));
    }
}
