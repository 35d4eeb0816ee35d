//! Laid-out slide views. Every class string and fallback text is resolved
//! here so the templates only place values.

use crate::models::SlideType;

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub id: String,
    pub index: usize,
    pub archetype: SlideType,
    pub is_active: bool,
    pub container_class: String,
    pub chrome: Chrome,
    pub body: SlideBody,
}

/// Decoration drawn around the slide body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chrome {
    /// Bottom-right branding; absent on title and closing slides.
    pub badge: Option<Badge>,
    pub decor: Option<Decor>,
    pub corner: Option<Corner>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Badge {
    Logo(String),
    Mark(BrandMark),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrandMark {
    pub svg: String,
    pub background_hex: String,
}

/// Grid overlay and vertical counter for decorated themes.
#[derive(Debug, Clone, PartialEq)]
pub struct Decor {
    pub grid_rows: Vec<u8>,
    pub counter: Option<String>,
    /// Brand tile next to the counter, drawn only without a custom logo.
    pub brand_tile: Option<String>,
    pub primary_hex: String,
}

/// Accent corner and `THEME • N` label for plain themes.
#[derive(Debug, Clone, PartialEq)]
pub struct Corner {
    pub accent_class: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideBody {
    Title(TitleView),
    Agenda(AgendaView),
    Section(SectionView),
    Highlight(HighlightView),
    Quote(QuoteView),
    Split(SplitView),
    Image(ImageView),
    Content(ContentView),
    Closing(ClosingView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleView {
    pub title: String,
    pub title_class: String,
    pub subtitle: String,
    pub subtitle_class: String,
    pub logo_url: Option<String>,
    pub wrapper_class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaEntry {
    pub time: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaView {
    pub heading: String,
    pub heading_class: String,
    pub schedule_label: String,
    pub schedule_class: String,
    pub logo_url: Option<String>,
    pub entries: Vec<AgendaEntry>,
    pub image_url: Option<String>,
    pub image_alt: String,
    /// Rendered when there is no image.
    pub placeholder_svg: String,
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub words: Vec<String>,
    pub title_class: String,
    pub lead: Option<String>,
    pub lead_class: String,
    pub body: String,
    pub body_class: String,
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightView {
    pub highlight: String,
    pub rest: String,
    pub title_class: String,
    pub highlight_style: String,
    pub subtitle: Option<String>,
    pub wrapper_class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteView {
    pub quote: String,
    pub quote_class: String,
    pub attribution: String,
    pub attribution_class: String,
    pub accent_hex: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Takeaway {
    pub text: String,
    pub indent_px: usize,
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitView {
    pub title: String,
    pub title_class: String,
    pub insight_label: String,
    pub takeaways_label: String,
    pub takeaways_class: String,
    pub takeaways: Vec<Takeaway>,
    pub primary_hex: String,
    pub accent_hex: String,
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub title: String,
    pub title_class: String,
    pub image_url: Option<String>,
    pub primary_hex: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    pub title: String,
    pub title_class: String,
    pub points: Vec<String>,
    pub point_class: String,
    pub image_url: Option<String>,
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClosingView {
    pub logo_url: Option<String>,
    pub mark_svg: String,
    pub headline: String,
    pub tagline: String,
}

