//! Gemini Generative Language API client: outline and slide text via
//! structured JSON output, and slide illustrations via an image model.

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::prompts;
use super::{ProviderError, USER_AGENT, strip_code_fence};
use crate::models::{OutlineItem, SlideContent};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const IMAGE_ASPECT_RATIO: &str = "1:1";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// An inline image returned by the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl GeneratedImage {
    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.mime_type, encoded)
    }
}

pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Ask for a coarse outline of `slide_count` slides.
    pub async fn generate_outline(
        &self,
        topic: &str,
        slide_count: u32,
        tone: &str,
        language: &str,
    ) -> Result<Vec<OutlineItem>, ProviderError> {
        let prompt = prompts::outline_prompt(topic, slide_count, tone, language);
        let request = build_json_request(&prompt, prompts::outline_schema());
        let response = self.generate_content(&self.config.text_model, &request).await?;
        let text = response_text(&response).ok_or(ProviderError::EmptyResponse)?;
        parse_json_array(&text).map_err(|e| {
            log::error!("Failed to parse outline JSON: {e}");
            ProviderError::Parse("Failed to generate outline".to_string())
        })
    }

    /// Expand an outline into full slide content in a single call.
    pub async fn generate_slide_content(
        &self,
        outline: &[OutlineItem],
        tone: &str,
        language: &str,
    ) -> Result<Vec<SlideContent>, ProviderError> {
        let prompt = prompts::content_prompt(outline, tone, language);
        let request = build_json_request(&prompt, prompts::content_schema());
        let response = self.generate_content(&self.config.text_model, &request).await?;
        let text = response_text(&response).ok_or(ProviderError::EmptyResponse)?;
        parse_json_array(&text).map_err(|e| {
            log::error!("Failed to parse slide content JSON: {e}");
            ProviderError::Parse("Failed to generate slide content".to_string())
        })
    }

    /// Generate one square illustration. Returns None when the model answers
    /// without an image part.
    pub async fn generate_image(&self, prompt: &str) -> Result<Option<GeneratedImage>, ProviderError> {
        let request = build_image_request(&prompts::image_prompt(prompt));
        let response = self.generate_content(&self.config.image_model, &request).await?;
        Ok(extract_inline_image(&response))
    }

    async fn generate_content(&self, model: &str, request: &Value) -> Result<Value, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingApiKey("Gemini"))?;
        let url = format!("{}/models/{}:generateContent", self.config.base_url, model);
        log::debug!("Gemini request: model={model}");

        let response = self
            .http
            .post(&url)
            .headers(build_headers(api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(&e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("Gemini response: model={model} status={status}");
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(format!("invalid Gemini response JSON: {e}")))
    }
}

fn build_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("accept", HeaderValue::from_static("application/json"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("user-agent", HeaderValue::from_static(USER_AGENT));
    headers
}

fn build_json_request(prompt: &str, schema: Value) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

fn build_image_request(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "responseModalities": ["IMAGE"],
            "imageConfig": { "aspectRatio": IMAGE_ASPECT_RATIO }
        }
    })
}

fn candidate_parts(value: &Value) -> Vec<Value> {
    value
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Concatenated text parts of the first candidate.
fn response_text(value: &Value) -> Option<String> {
    let text: String = candidate_parts(value)
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

fn parse_json_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str(strip_code_fence(text))
}

fn extract_inline_image(value: &Value) -> Option<GeneratedImage> {
    candidate_parts(value).iter().find_map(|part| {
        let inline = part.get("inlineData").or_else(|| part.get("inline_data"))?;
        let mime_type = inline
            .get("mimeType")
            .or_else(|| inline.get("mime_type"))
            .and_then(Value::as_str)
            .unwrap_or("image/png")
            .to_string();
        let encoded = inline.get("data").and_then(Value::as_str)?;
        match base64::engine::general_purpose::STANDARD.decode(encoded) {
            Ok(data) if !data.is_empty() => Some(GeneratedImage { mime_type, data }),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Discarding undecodable {mime_type} image part: {e}");
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlideType;

    #[test]
    fn json_request_carries_schema_and_mime_type() {
        let request = build_json_request("hello", prompts::outline_schema());
        assert_eq!(request["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            request["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            request["generationConfig"]["responseSchema"]["type"],
            "ARRAY"
        );
    }

    #[test]
    fn image_request_is_square() {
        let request = build_image_request("a clock");
        assert_eq!(
            request["generationConfig"]["imageConfig"]["aspectRatio"],
            "1:1"
        );
        assert_eq!(
            request["generationConfig"]["responseModalities"],
            json!(["IMAGE"])
        );
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let value = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "[{\"id\":" }, { "text": "\"0\"}]" } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        });
        assert_eq!(response_text(&value).as_deref(), Some("[{\"id\":\"0\"}]"));
        assert_eq!(response_text(&json!({ "candidates": [] })), None);
    }

    #[test]
    fn parses_fenced_slide_array() {
        let text = "```json\n[{\"id\":\"0\",\"type\":\"agenda\",\"title\":\"Plan\",\"points\":[\"09:00: Intro\"],\"imagePrompt\":\"clock\"}]\n```";
        let slides: Vec<SlideContent> = parse_json_array(text).expect("parse");
        assert_eq!(slides[0].slide_type, SlideType::Agenda);
        assert_eq!(slides[0].points, vec!["09:00: Intro"]);
        assert_eq!(slides[0].image_prompt.as_deref(), Some("clock"));
    }

    #[test]
    fn extracts_first_inline_image() {
        let value = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here you go" },
                        { "inlineData": { "mimeType": "image/png", "data": "AQID" } }
                    ]
                }
            }]
        });
        let image = extract_inline_image(&value).expect("image");
        assert_eq!(image.data, vec![1, 2, 3]);
        assert_eq!(image.data_url(), "data:image/png;base64,AQID");
    }

    #[test]
    fn missing_or_broken_image_is_none() {
        let text_only = json!({ "candidates": [{ "content": { "parts": [{ "text": "no" }] } }] });
        assert!(extract_inline_image(&text_only).is_none());

        let broken = json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "data": "!!!" } }] } }]
        });
        assert!(extract_inline_image(&broken).is_none());
    }
}
