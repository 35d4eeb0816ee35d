pub mod gamma;
pub mod gemini;
pub mod prompts;

use std::fmt;

pub const USER_AGENT: &str = concat!("deckgen/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub enum ProviderError {
    MissingApiKey(&'static str),
    Transport(String),
    Http { status: u16, body: String },
    Parse(String),
    EmptyResponse,
}

impl ProviderError {
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Transport(format!("request timed out: {e}"))
        } else if e.is_connect() {
            ProviderError::Transport(format!("connection failed: {e}"))
        } else {
            ProviderError::Transport(e.to_string())
        }
    }

    /// Short message that is safe to show to the user.
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::MissingApiKey(service) => format!("{service} API key is not configured."),
            ProviderError::Transport(_) => "Could not reach the generation service.".to_string(),
            ProviderError::Http { status, .. } => {
                format!("The generation service returned an error ({status}).")
            }
            ProviderError::Parse(msg) => msg.clone(),
            ProviderError::EmptyResponse => "The generation service returned nothing.".to_string(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::MissingApiKey(service) => write!(f, "{service} API key is not configured"),
            ProviderError::Transport(e) => write!(f, "Transport error: {e}"),
            ProviderError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ProviderError::Parse(e) => write!(f, "Parse error: {e}"),
            ProviderError::EmptyResponse => write!(f, "Empty response"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Trim surrounding whitespace and a Markdown code fence, which models
/// sometimes wrap JSON in even when asked for raw JSON.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fenced_json() {
        assert_eq!(strip_code_fence("  [1,2] \n"), "[1,2]");
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
    }

    #[test]
    fn user_message_hides_response_body() {
        let err = ProviderError::Http {
            status: 500,
            body: "secret internals".into(),
        };
        assert!(!err.user_message().contains("secret"));
        assert!(err.to_string().contains("secret"));
    }
}
