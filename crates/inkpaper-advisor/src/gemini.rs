//! Gemini `generateContent` client.

use crate::advisor::Advisor;
use crate::error::{AdvisorError, AdvisorResult};
use crate::message::{ChatMessage, ChatRole};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Connection settings for [`GeminiAdvisor`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub api_key: Option<String>,
    /// Name of the variable the key came from, for error messages.
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl GeminiConfig {
    /// Read the API key from `var`. An empty value counts as unset.
    pub fn with_api_key_from_env(mut self, var: impl Into<String>) -> Self {
        let var = var.into();
        self.api_key = std::env::var(&var).ok().filter(|k| !k.trim().is_empty());
        self.api_key_env = var;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

// Wire format.

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Advisor backed by the Gemini REST API.
pub struct GeminiAdvisor {
    client: reqwest::Client,
    config: GeminiConfig,
    system_instruction: String,
}

impl GeminiAdvisor {
    pub fn new(config: GeminiConfig, system_instruction: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            system_instruction: system_instruction.into(),
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn request(&self, history: &[ChatMessage], message: &str) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|m| Content::text(Some(m.role.as_str()), &m.text))
            .collect();
        contents.push(Content::text(Some(ChatRole::User.as_str()), message));

        GenerateContentRequest {
            system_instruction: Content::text(None, &self.system_instruction),
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        }
    }
}

#[async_trait]
impl Advisor for GeminiAdvisor {
    async fn reply(&self, history: &[ChatMessage], message: &str) -> AdvisorResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AdvisorError::MissingApiKey(self.config.api_key_env.clone()))?;

        let payload = self.request(history, message);
        debug!(model = %self.config.model, turns = payload.contents.len(), "Sending advisor request");

        let response = self
            .client
            .post(self.config.url())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.into_text().ok_or(AdvisorError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let advisor = GeminiAdvisor::new(GeminiConfig::default(), "be helpful");
        let history = vec![
            ChatMessage::model("welcome", "Hi there!"),
            ChatMessage::user("1", "A pen for sketching?"),
            ChatMessage::model("2", "Try the Sakura Pigma Micron."),
        ];
        let json = serde_json::to_value(advisor.request(&history, "Anything cheaper?")).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be helpful");
        assert!(json["systemInstruction"].get("role").is_none());
        let contents = json["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[1]["role"], "user");
        assert_eq!(contents[3]["role"], "user");
        assert_eq!(contents[3]["parts"][0]["text"], "Anything cheaper?");
        assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_url() {
        let config = GeminiConfig::default().with_endpoint("http://localhost:8080/");
        assert_eq!(
            config.url(),
            "http://localhost:8080/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Try "},{"text":"the Lamy."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(body.into_text().as_deref(), Some("Try the Lamy."));

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.into_text(), None);
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let advisor = GeminiAdvisor::new(GeminiConfig::default(), "x");
        let err = advisor.reply(&[], "hello").await.unwrap_err();
        assert!(matches!(err, AdvisorError::MissingApiKey(ref var) if var == DEFAULT_API_KEY_ENV));
    }
}
