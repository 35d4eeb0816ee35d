use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The nine fixed slide archetypes. Serialized in lowercase, which is also
/// the enum the generation API is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideType {
    Title,
    Content,
    Image,
    Split,
    Closing,
    Quote,
    Highlight,
    Section,
    Agenda,
}

impl SlideType {
    pub const ALL: [SlideType; 9] = [
        SlideType::Title,
        SlideType::Content,
        SlideType::Image,
        SlideType::Split,
        SlideType::Closing,
        SlideType::Quote,
        SlideType::Highlight,
        SlideType::Section,
        SlideType::Agenda,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SlideType::Title => "title",
            SlideType::Content => "content",
            SlideType::Image => "image",
            SlideType::Split => "split",
            SlideType::Closing => "closing",
            SlideType::Quote => "quote",
            SlideType::Highlight => "highlight",
            SlideType::Section => "section",
            SlideType::Agenda => "agenda",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlideType::Title => "Title",
            SlideType::Content => "Content",
            SlideType::Image => "Image",
            SlideType::Split => "Split",
            SlideType::Closing => "Closing",
            SlideType::Quote => "Quote",
            SlideType::Highlight => "Highlight",
            SlideType::Section => "Section",
            SlideType::Agenda => "Agenda",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    /// Archetypes whose layout actually draws `image_url`. Only these get an
    /// image generated for them.
    pub fn shows_image(self) -> bool {
        matches!(self, SlideType::Agenda | SlideType::Image | SlideType::Content)
    }

    /// Title and closing slides carry their own branding, so the global
    /// badge and slide counter are suppressed on them.
    pub fn is_bookend(self) -> bool {
        matches!(self, SlideType::Title | SlideType::Closing)
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-slide layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideLayout {
    #[default]
    Default,
    Inverted,
    Centered,
}

/// Fully expanded content of one slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    pub id: String,
    #[serde(rename = "type")]
    pub slide_type: SlideType,
    pub title: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<SlideLayout>,
}

impl SlideContent {
    pub fn new(id: impl Into<String>, slide_type: SlideType, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slide_type,
            title: title.into(),
            points: Vec::new(),
            image_prompt: None,
            image_url: None,
            layout: None,
        }
    }

    pub fn with_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.points = points.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.image_prompt = Some(prompt.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_layout(mut self, layout: SlideLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn first_point(&self) -> Option<&str> {
        self.points
            .first()
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout.unwrap_or_default()
    }

    /// The image prompt to send, if this slide should get a generated image.
    pub fn pending_image_prompt(&self) -> Option<&str> {
        if !self.slide_type.shows_image() || self.image_url.is_some() {
            return None;
        }
        self.image_prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Make slide ids unique, replacing empty or repeated ids with the slide's
/// position. Order is never touched.
pub fn normalize_slide_ids(slides: &mut [SlideContent]) {
    let mut seen: HashSet<String> = HashSet::with_capacity(slides.len());
    for (index, slide) in slides.iter_mut().enumerate() {
        let trimmed = slide.id.trim();
        if !trimmed.is_empty() && !seen.contains(trimmed) {
            slide.id = trimmed.to_string();
            seen.insert(slide.id.clone());
            continue;
        }
        let mut candidate = index.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{index}-{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        slide.id = candidate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_type_parses_wire_names() {
        assert_eq!(SlideType::parse("agenda"), Some(SlideType::Agenda));
        assert_eq!(SlideType::parse(" Quote "), Some(SlideType::Quote));
        assert_eq!(SlideType::parse("bullet"), None);
    }

    #[test]
    fn unknown_type_is_rejected_by_serde() {
        let raw = r#"{"id":"1","type":"diagram","title":"x","points":[]}"#;
        assert!(serde_json::from_str::<SlideContent>(raw).is_err());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let slide = SlideContent::new("3", SlideType::Image, "Vision")
            .with_image_prompt("A lighthouse")
            .with_image_url("data:image/png;base64,AAAA");
        let value = serde_json::to_value(&slide).expect("serialize");
        assert_eq!(value["type"], "image");
        assert_eq!(value["imagePrompt"], "A lighthouse");
        assert_eq!(value["imageUrl"], "data:image/png;base64,AAAA");
        assert!(value.get("layout").is_none());
    }

    #[test]
    fn pending_image_prompt_only_for_image_archetypes() {
        let quote = SlideContent::new("1", SlideType::Quote, "q").with_image_prompt("p");
        assert_eq!(quote.pending_image_prompt(), None);

        let content = SlideContent::new("2", SlideType::Content, "c").with_image_prompt("  ");
        assert_eq!(content.pending_image_prompt(), None);

        let agenda = SlideContent::new("3", SlideType::Agenda, "a").with_image_prompt(" clock ");
        assert_eq!(agenda.pending_image_prompt(), Some("clock"));

        let done = agenda.clone().with_image_url("data:x");
        assert_eq!(done.pending_image_prompt(), None);
    }

    #[test]
    fn normalize_replaces_duplicates_and_blanks() {
        let mut slides = vec![
            SlideContent::new("intro", SlideType::Title, "a"),
            SlideContent::new("intro", SlideType::Content, "b"),
            SlideContent::new("", SlideType::Content, "c"),
            SlideContent::new("1", SlideType::Closing, "d"),
        ];
        normalize_slide_ids(&mut slides);
        let ids: Vec<&str> = slides.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "1", "2", "3"]);
        let titles: Vec<&str> = slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn normalize_suffixes_when_position_is_taken() {
        let mut slides = vec![
            SlideContent::new("1", SlideType::Title, "a"),
            SlideContent::new(" ", SlideType::Content, "b"),
        ];
        normalize_slide_ids(&mut slides);
        assert_eq!(slides[0].id, "1");
        assert_eq!(slides[1].id, "1-1");
    }
}
