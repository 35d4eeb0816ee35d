use crate::providers::gamma::{self, GammaConfig};
use crate::providers::gemini::{self, GeminiConfig};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_APP_NAME: &str = "deckgen";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub generate_images: bool,
    pub gemini: GeminiConfig,
    pub gamma: GammaConfig,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let gemini_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));
        let gemini = GeminiConfig {
            api_key: gemini_key,
            base_url: get("GEMINI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| gemini::DEFAULT_BASE_URL.to_string()),
            text_model: get("TEXT_MODEL").unwrap_or_else(|| gemini::DEFAULT_TEXT_MODEL.to_string()),
            image_model: get("IMAGE_MODEL")
                .unwrap_or_else(|| gemini::DEFAULT_IMAGE_MODEL.to_string()),
        };

        let gamma = GammaConfig {
            api_key: get("GAMMA_API_KEY"),
            base_url: get("GAMMA_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| gamma::DEFAULT_BASE_URL.to_string()),
        };

        Self {
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            session_key: get("SESSION_KEY"),
            generate_images: get("GENERATE_IMAGES")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            gemini,
            gamma,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = config(&[]);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.app_name, DEFAULT_APP_NAME);
        assert!(cfg.generate_images);
        assert!(cfg.gemini.api_key.is_none());
        assert_eq!(cfg.gemini.text_model, gemini::DEFAULT_TEXT_MODEL);
        assert_eq!(cfg.gamma.base_url, gamma::DEFAULT_BASE_URL);
    }

    #[test]
    fn api_key_falls_back_to_generic_name() {
        let cfg = config(&[("API_KEY", "generic")]);
        assert_eq!(cfg.gemini.api_key.as_deref(), Some("generic"));

        let cfg = config(&[("API_KEY", "generic"), ("GEMINI_API_KEY", "specific")]);
        assert_eq!(cfg.gemini.api_key.as_deref(), Some("specific"));
    }

    #[test]
    fn overrides_are_trimmed() {
        let cfg = config(&[
            ("GEMINI_BASE_URL", "http://localhost:9000/"),
            ("GENERATE_IMAGES", "off"),
            ("GAMMA_API_KEY", "  "),
            ("BIND_ADDR", "0.0.0.0:3000"),
        ]);
        assert_eq!(cfg.gemini.base_url, "http://localhost:9000");
        assert!(!cfg.generate_images);
        assert!(cfg.gamma.api_key.is_none());
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
    }
}
