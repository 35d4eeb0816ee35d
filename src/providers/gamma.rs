//! Gamma public API client: theme and folder listings plus remote deck
//! generation.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{ProviderError, USER_AGENT};
use crate::models::gamma::{GammaFolder, GammaGeneration, GammaGenerationRequest, GammaTheme};

pub const DEFAULT_BASE_URL: &str = "https://public-api.gamma.app/v1.0";
const LIST_LIMIT: u32 = 50;

#[derive(Debug, Clone)]
pub struct GammaConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl GammaConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
}

pub struct GammaClient {
    config: GammaConfig,
    http: reqwest::Client,
}

impl GammaClient {
    pub fn new(config: GammaConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Themes in the workspace. Empty when unconfigured or on any failure.
    pub async fn list_themes(&self) -> Vec<GammaTheme> {
        self.fetch_list("themes").await
    }

    /// Folders in the workspace. Empty when unconfigured or on any failure.
    pub async fn list_folders(&self) -> Vec<GammaFolder> {
        self.fetch_list("folders").await
    }

    async fn fetch_list<T: DeserializeOwned>(&self, endpoint: &str) -> Vec<T> {
        if !self.is_configured() {
            log::warn!("Gamma API key is not configured.");
            return Vec::new();
        }
        match self.try_fetch_list(endpoint).await {
            Ok(items) => items,
            Err(e) => {
                log::error!("Error fetching from Gamma API ({endpoint}): {e}");
                Vec::new()
            }
        }
    }

    async fn try_fetch_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, ProviderError> {
        let api_key = self.api_key().ok_or(ProviderError::MissingApiKey("Gamma"))?;
        let url = format!("{}/{endpoint}?limit={LIST_LIMIT}", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .headers(build_headers(api_key))
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(&e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }
        let list: ListResponse<T> = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(format!("invalid Gamma {endpoint} response: {e}")))?;
        Ok(list.data)
    }

    /// Start a remote deck generation and return its id.
    pub async fn create_generation(
        &self,
        request: &GammaGenerationRequest,
    ) -> Result<GammaGeneration, ProviderError> {
        let api_key = self.api_key().ok_or(ProviderError::MissingApiKey("Gamma"))?;
        let url = format!("{}/generations", self.config.base_url);
        let payload = build_generation_payload(request);
        log::debug!("Gamma generation: theme={} cards={}", request.theme_id, request.slide_count);

        let response = self
            .http
            .post(&url)
            .headers(build_headers(api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(&e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("");
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body: format!("{reason} - {body}"),
            });
        }
        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(format!("invalid Gamma generation response: {e}")))
    }
}

/// ISO code Gamma expects for one of the supported language names.
pub fn language_code(language: &str) -> &'static str {
    match language {
        "English" => "en",
        "Spanish" => "es",
        "French" => "fr",
        "German" => "de",
        "Chinese" => "zh",
        "Japanese" => "ja",
        _ => "en",
    }
}

fn build_generation_payload(request: &GammaGenerationRequest) -> Value {
    let mut payload = json!({
        "inputText": request.topic,
        "textMode": "generate",
        "format": "presentation",
        "themeId": request.theme_id,
        "numCards": request.slide_count,
        "textOptions": {
            "amount": "detailed",
            "tone": request.tone,
            "language": language_code(&request.language),
        },
        "imageOptions": {
            "source": "aiGenerated",
            "model": "imagen-4-pro",
            "style": "photorealistic",
        },
    });
    if let Some(folder_id) = request.folder_id.as_deref().filter(|f| !f.is_empty()) {
        payload["folderIds"] = json!([folder_id]);
    }
    payload
}

fn build_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-api-key",
        HeaderValue::from_str(api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("accept", HeaderValue::from_static("application/json"));
    headers.insert("user-agent", HeaderValue::from_static(USER_AGENT));
    headers
}
