//! Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::DescriptionConfig;
use crate::description::{DescriptionGenerator, FAILED_FALLBACK};
use crate::error::AiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Prompt sent for a tile name.
pub fn prompt_for(name: &str) -> String {
    format!(
        "Generate a concise, appealing, one-sentence product description for a tile named \"{name}\"."
    )
}

/// Concatenated text of the first candidate, trimmed.
fn extract_text(response: GenerateResponse) -> Result<String, AiError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(text.to_string())
}

/// Description generator backed by the Gemini REST API.
pub struct GeminiDescriptionGenerator {
    client: Client,
    config: DescriptionConfig,
}

impl GeminiDescriptionGenerator {
    pub fn new(config: DescriptionConfig) -> Result<Self, AiError> {
        if config.api_key.is_none() {
            return Err(AiError::Config("API key not configured".to_string()));
        }

        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// One generation attempt. Errors are for the caller to log and replace.
    pub async fn generate(&self, name: &str) -> Result<String, AiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AiError::InvalidInput("tile name is empty".to_string()));
        }

        let prompt = prompt_for(name);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-goog-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Upstream {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = extract_text(parsed)?;
        debug!(model = %self.config.model, chars = text.len(), "description generated");
        Ok(text)
    }
}

#[async_trait]
impl DescriptionGenerator for GeminiDescriptionGenerator {
    async fn describe(&self, name: &str) -> String {
        match self.generate(name).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, tile_name = %name, "error generating tile description");
                FAILED_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn request_body_uses_camel_case_generation_config() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: "hi" }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.5,
                max_output_tokens: 50,
            },
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["generationConfig"]["maxOutputTokens"], 50);
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn prompt_quotes_the_tile_name() {
        assert!(prompt_for("Nero Marquina").contains("tile named \"Nero Marquina\""));
    }

    #[test]
    fn extracts_and_joins_first_candidate_parts() {
        let resp = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":" Bold black "},{"text":"porcelain. "}]}},
                {"content":{"parts":[{"text":"ignored"}]}}]}"#,
        );
        assert_eq!(extract_text(resp).unwrap(), "Bold black porcelain.");
    }

    #[test]
    fn empty_candidates_are_an_error() {
        assert!(matches!(extract_text(parse(r#"{}"#)), Err(AiError::EmptyResponse)));
        assert!(matches!(
            extract_text(parse(r#"{"candidates":[{"content":{"parts":[]}}]}"#)),
            Err(AiError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)),
            Err(AiError::EmptyResponse)
        ));
    }

    #[test]
    fn requires_an_api_key() {
        assert!(matches!(
            GeminiDescriptionGenerator::new(DescriptionConfig::default()),
            Err(AiError::Config(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_backend_degrades_to_fallback() {
        // Nothing listens on port 9 locally; the connection is refused.
        let config = DescriptionConfig::default()
            .with_api_key("test-key")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let generator = GeminiDescriptionGenerator::new(config).unwrap();

        assert_eq!(generator.describe("Classic Subway Tile").await, FAILED_FALLBACK);
    }

    #[tokio::test]
    async fn blank_name_degrades_to_fallback_without_a_request() {
        let config = DescriptionConfig::default()
            .with_api_key("test-key")
            .with_base_url("http://127.0.0.1:9");
        let generator = GeminiDescriptionGenerator::new(config).unwrap();

        assert!(matches!(generator.generate("  ").await, Err(AiError::InvalidInput(_))));
        assert_eq!(generator.describe("").await, FAILED_FALLBACK);
    }
}
