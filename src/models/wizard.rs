use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::outline::{self, OutlineEdit, OutlineItem};
use super::presentation::Presentation;
use super::theme::{self, DEFAULT_THEME_ID};

/// Wizard steps, in order. Comparison follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppStep {
    Prompt,
    Outline,
    Theme,
    Viewer,
}

impl AppStep {
    pub const ALL: [AppStep; 4] = [AppStep::Prompt, AppStep::Outline, AppStep::Theme, AppStep::Viewer];

    pub fn path(self) -> &'static str {
        match self {
            AppStep::Prompt => "/",
            AppStep::Outline => "/outline",
            AppStep::Theme => "/theme",
            AppStep::Viewer => "/viewer",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            AppStep::Prompt => "prompt",
            AppStep::Outline => "outline",
            AppStep::Theme => "theme",
            AppStep::Viewer => "viewer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppStep::Prompt => "Prompt",
            AppStep::Outline => "Outline",
            AppStep::Theme => "Theme",
            AppStep::Viewer => "Present",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// What the user asked for on the prompt step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRequest {
    pub topic: String,
    pub slide_count: u32,
    pub tone: String,
    pub language: String,
}

impl Default for DeckRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            slide_count: 8,
            tone: theme::TONES[0].to_string(),
            language: theme::LANGUAGES[0].to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    EmptyOutline,
    StepAhead { current: AppStep, requested: AppStep },
    UnknownTheme(String),
    NoPresentation,
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::EmptyOutline => write!(f, "The outline has no slides"),
            WizardError::StepAhead { current, requested } => write!(
                f,
                "Cannot go back to {} from {}",
                requested.label(),
                current.label()
            ),
            WizardError::UnknownTheme(id) => write!(f, "Unknown theme: {id}"),
            WizardError::NoPresentation => write!(f, "No presentation has been generated yet"),
        }
    }
}

impl std::error::Error for WizardError {}

/// Per-session wizard state.
#[derive(Debug, Clone)]
pub struct Deck {
    pub step: AppStep,
    pub request: DeckRequest,
    pub outline: Vec<OutlineItem>,
    pub theme_id: String,
    pub logo_url: Option<String>,
    pub with_images: bool,
    pub presentation: Option<Presentation>,
    pub touched_at: DateTime<Utc>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            step: AppStep::Prompt,
            request: DeckRequest::default(),
            outline: Vec::new(),
            theme_id: DEFAULT_THEME_ID.to_string(),
            logo_url: None,
            with_images: true,
            presentation: None,
            touched_at: Utc::now(),
        }
    }
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_request(&mut self, request: DeckRequest) {
        self.request = request;
    }

    /// A fresh outline invalidates anything generated from the old one.
    pub fn set_outline(&mut self, outline: Vec<OutlineItem>) {
        self.outline = outline;
        self.presentation = None;
        self.step = AppStep::Outline;
    }

    pub fn edit_outline(&mut self, edits: &[OutlineEdit]) {
        outline::apply_edits(&mut self.outline, edits);
    }

    pub fn move_outline_item(&mut self, index: usize, up: bool) -> bool {
        outline::move_item(&mut self.outline, index, up)
    }

    pub fn confirm_outline(&mut self) -> Result<(), WizardError> {
        if self.outline.is_empty() {
            return Err(WizardError::EmptyOutline);
        }
        self.step = AppStep::Theme;
        Ok(())
    }

    pub fn select_theme(&mut self, theme_id: &str) -> Result<(), WizardError> {
        if theme::find(theme_id).is_none() {
            return Err(WizardError::UnknownTheme(theme_id.to_string()));
        }
        self.theme_id = theme_id.to_string();
        if let Some(p) = self.presentation.as_mut() {
            p.theme_id = theme_id.to_string();
        }
        Ok(())
    }

    pub fn set_presentation(&mut self, presentation: Presentation) {
        self.theme_id = presentation.theme_id.clone();
        self.presentation = Some(presentation);
        self.step = AppStep::Viewer;
    }

    pub fn back_to(&mut self, step: AppStep) -> Result<(), WizardError> {
        if step > self.step {
            return Err(WizardError::StepAhead {
                current: self.step,
                requested: step,
            });
        }
        self.step = step;
        Ok(())
    }

    /// The step to actually show when `requested` is asked for.
    pub fn reachable(&self, requested: AppStep) -> AppStep {
        requested.min(self.step)
    }

    pub fn reset(&mut self) {
        *self = Self {
            request: std::mem::take(&mut self.request),
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slide::SlideType;

    fn outline() -> Vec<OutlineItem> {
        vec![OutlineItem::new("0", "Hi", "", SlideType::Title)]
    }

    #[test]
    fn steps_are_ordered() {
        assert!(AppStep::Prompt < AppStep::Outline);
        assert!(AppStep::Theme < AppStep::Viewer);
        assert_eq!(AppStep::from_slug("theme"), Some(AppStep::Theme));
        assert_eq!(AppStep::from_slug("nope"), None);
    }

    #[test]
    fn confirm_requires_outline() {
        let mut deck = Deck::new();
        deck.set_outline(Vec::new());
        assert_eq!(deck.confirm_outline(), Err(WizardError::EmptyOutline));
        assert_eq!(deck.step, AppStep::Outline);

        deck.set_outline(outline());
        assert!(deck.confirm_outline().is_ok());
        assert_eq!(deck.step, AppStep::Theme);
    }

    #[test]
    fn cannot_jump_forward() {
        let mut deck = Deck::new();
        deck.set_outline(outline());
        let err = deck.back_to(AppStep::Viewer).unwrap_err();
        assert!(matches!(err, WizardError::StepAhead { .. }));
        assert_eq!(deck.reachable(AppStep::Viewer), AppStep::Outline);
        assert!(deck.back_to(AppStep::Prompt).is_ok());
        assert_eq!(deck.step, AppStep::Prompt);
    }

    #[test]
    fn reset_keeps_request_and_drops_the_rest() {
        let mut deck = Deck::new();
        deck.set_request(DeckRequest {
            topic: "Rust".into(),
            ..DeckRequest::default()
        });
        deck.set_outline(outline());
        deck.logo_url = Some("https://example.com/logo.png".into());
        deck.reset();
        assert_eq!(deck.step, AppStep::Prompt);
        assert!(deck.outline.is_empty());
        assert!(deck.logo_url.is_none());
        assert_eq!(deck.request.topic, "Rust");
    }

    #[test]
    fn select_theme_rejects_unknown_ids() {
        let mut deck = Deck::new();
        assert!(deck.select_theme("paper").is_ok());
        assert_eq!(deck.theme_id, "paper");
        assert_eq!(
            deck.select_theme("neon"),
            Err(WizardError::UnknownTheme("neon".into()))
        );
    }
}
