use askama::Template;

use crate::models::gamma::{GammaFolder, GammaTheme};

use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "gamma.html")]
pub struct GammaTemplate {
    pub ctx: PageContext,
    pub configured: bool,
    pub topic: String,
    pub slide_count: u32,
    pub tones: Vec<SelectOption>,
    pub languages: Vec<SelectOption>,
    pub themes: Vec<GammaTheme>,
    pub folders: Vec<GammaFolder>,
    pub generation_id: Option<String>,
    pub errors: Vec<String>,
}
