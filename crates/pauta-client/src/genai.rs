//! Pass-through client for the generative-text service, plus the prompt
//! templates used by the caption and strategy assists.

use async_trait::async_trait;
use pauta_shared::{PostFormat, ServiceError};
use serde::Deserialize;
use serde_json::json;

use crate::collaborators::TextGenerator;
use crate::config::GenAiConfig;

/// HTTP client for a Gemini-style `generateContent` endpoint.
pub struct GenAiClient {
    http: reqwest::Client,
    config: GenAiConfig,
}

impl GenAiClient {
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|p| p.text)
    }
}

#[async_trait]
impl TextGenerator for GenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ServiceError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ServiceError::Status(resp.status().as_u16()));
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        parsed
            .into_text()
            .ok_or_else(|| ServiceError::MalformedResponse("no candidate text".to_string()))
    }
}

/// Caption prompt for a post, in the voice of the active client.
pub fn caption_prompt(title: &str, client: &str, tone: &str, format: PostFormat) -> String {
    format!(
        "Write a social media caption in Portuguese for a post titled \"{title}\". \
         Context: The client is \"{client}\". \
         Tone: {tone}. \
         Format: {format}. \
         Include emojis and 3 hashtags."
    )
}

/// Strategy prompt asking for a JSON-only persona/identity suggestion.
pub fn strategy_prompt(client: &str) -> String {
    format!(
        "Create a marketing persona strategy for a client named \"{client}\". \
         Return ONLY a JSON object with this structure: \
         {{ \"persona\": {{ \"pains\": \"...\", \"goals\": \"...\", \"tone\": \"...\" }}, \
         \"identity\": {{ \"colors\": \"...\", \"fonts\": \"...\" }} }}"
    )
}

/// AI-suggested strategy fields.  Absent fields leave the current value
/// untouched when merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrategySuggestion {
    #[serde(default)]
    pub persona: PersonaSuggestion,
    #[serde(default)]
    pub identity: IdentitySuggestion,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonaSuggestion {
    pub pains: Option<String>,
    pub goals: Option<String>,
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentitySuggestion {
    pub colors: Option<String>,
    pub fonts: Option<String>,
}

/// Parse a strategy suggestion from generated text.  Tolerates a
/// markdown code fence around the JSON body.
pub fn parse_strategy_suggestion(text: &str) -> Result<StrategySuggestion, ServiceError> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    serde_json::from_str(trimmed).map_err(|e| ServiceError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_extraction() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "Olá! 🚀" } ] } }
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("Olá! 🚀"));
    }

    #[test]
    fn response_without_candidates_yields_none() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_text().is_none());
    }

    #[test]
    fn suggestion_parses_plain_and_fenced_json() {
        let plain = r#"{ "persona": { "tone": "Ousado" }, "identity": { "fonts": "Poppins" } }"#;
        let suggestion = parse_strategy_suggestion(plain).unwrap();
        assert_eq!(suggestion.persona.tone.as_deref(), Some("Ousado"));
        assert_eq!(suggestion.identity.fonts.as_deref(), Some("Poppins"));
        assert!(suggestion.persona.pains.is_none());

        let fenced = format!("```json\n{plain}\n```");
        assert!(parse_strategy_suggestion(&fenced).is_ok());
    }

    #[test]
    fn suggestion_rejects_non_json() {
        assert!(parse_strategy_suggestion("desculpe, não consegui").is_err());
    }

    #[test]
    fn caption_prompt_mentions_tone_and_format() {
        let prompt = caption_prompt(
            "5 Dicas",
            "TechStart Solutions",
            "Profissional",
            PostFormat::Reels,
        );
        assert!(prompt.contains("5 Dicas"));
        assert!(prompt.contains("Profissional"));
        assert!(prompt.contains("reels"));
    }
}
