use askama::Template;

use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "prompt.html")]
pub struct PromptTemplate {
    pub ctx: PageContext,
    pub topic: String,
    pub slide_count: String,
    pub tones: Vec<SelectOption>,
    pub languages: Vec<SelectOption>,
    pub min_slides: u32,
    pub max_slides: u32,
    pub errors: Vec<String>,
}

pub struct OutlineRow {
    pub index: usize,
    pub position: usize,
    pub title: String,
    pub description: String,
    pub type_options: Vec<SelectOption>,
    pub is_first: bool,
    pub is_last: bool,
}

#[derive(Template)]
#[template(path = "outline.html")]
pub struct OutlineTemplate {
    pub ctx: PageContext,
    pub topic: String,
    pub rows: Vec<OutlineRow>,
    pub errors: Vec<String>,
}

/// A theme choice with a rendered first-slide preview.
pub struct ThemeCard {
    pub id: &'static str,
    pub name: &'static str,
    pub preview_color: &'static str,
    pub selected: bool,
    /// Output of [`super::SlideFragmentTemplate`].
    pub preview_html: String,
}

#[derive(Template)]
#[template(path = "theme.html")]
pub struct ThemeTemplate {
    pub ctx: PageContext,
    pub cards: Vec<ThemeCard>,
    pub logo_url: String,
    pub with_images: bool,
    pub images_available: bool,
    pub slide_count: usize,
    pub errors: Vec<String>,
}
