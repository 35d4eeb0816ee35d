use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GammaThemeKind {
    Standard,
    Custom,
}

impl GammaThemeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GammaThemeKind::Standard => "standard",
            GammaThemeKind::Custom => "custom",
        }
    }
}

/// A theme available in the Gamma workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaTheme {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GammaThemeKind,
    #[serde(default)]
    pub color_keywords: Vec<String>,
    #[serde(default)]
    pub tone_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GammaFolder {
    pub id: String,
    pub name: String,
}

/// Parameters for a remote deck generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaGenerationRequest {
    pub topic: String,
    pub slide_count: u32,
    pub tone: String,
    pub language: String,
    pub theme_id: String,
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaGeneration {
    pub generation_id: String,
}
