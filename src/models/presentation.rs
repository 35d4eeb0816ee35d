use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slide::{SlideContent, normalize_slide_ids};
use super::wizard::DeckRequest;

/// A generated deck. Replaced wholesale on regeneration; only the theme and
/// generated image URLs change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub id: String,
    pub topic: String,
    pub tone: String,
    pub language: String,
    pub slides: Vec<SlideContent>,
    pub theme_id: String,
    pub created_at: DateTime<Utc>,
}

impl Presentation {
    pub fn new(
        id: impl Into<String>,
        request: &DeckRequest,
        theme_id: impl Into<String>,
        mut slides: Vec<SlideContent>,
    ) -> Self {
        normalize_slide_ids(&mut slides);
        Self {
            id: id.into(),
            topic: request.topic.trim().to_string(),
            tone: request.tone.clone(),
            language: request.language.clone(),
            slides,
            theme_id: theme_id.into(),
            created_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Clamp a requested slide index into range.
    pub fn clamp_index(&self, requested: usize) -> usize {
        requested.min(self.slides.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slide::SlideType;

    #[test]
    fn new_normalizes_ids_and_keeps_order() {
        let request = DeckRequest {
            topic: "  Solar power ".into(),
            ..DeckRequest::default()
        };
        let slides = vec![
            SlideContent::new("a", SlideType::Title, "One"),
            SlideContent::new("a", SlideType::Closing, "Two"),
        ];
        let p = Presentation::new("p1", &request, "fearless", slides);
        assert_eq!(p.topic, "Solar power");
        assert_eq!(p.slides[0].title, "One");
        assert_eq!(p.slides[1].id, "1");
        assert_eq!(p.slides[0].id, "a");
    }

    #[test]
    fn clamp_index_handles_empty_and_overflow() {
        let request = DeckRequest::default();
        let empty = Presentation::new("p", &request, "fearless", Vec::new());
        assert_eq!(empty.clamp_index(4), 0);

        let two = Presentation::new(
            "p",
            &request,
            "fearless",
            vec![
                SlideContent::new("0", SlideType::Title, "a"),
                SlideContent::new("1", SlideType::Closing, "b"),
            ],
        );
        assert_eq!(two.clamp_index(7), 1);
    }
}
