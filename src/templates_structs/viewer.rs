use askama::Template;

#[allow(unused_imports)]
use crate::render::{Badge, SlideBody, SlideView};

use super::{PageContext, SelectOption};

/// Thumbnail entry in the viewer's slide rail.
pub struct NavItem {
    pub index: usize,
    pub number: usize,
    pub title: String,
    pub archetype: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "viewer.html")]
pub struct ViewerTemplate {
    pub ctx: PageContext,
    pub topic: String,
    pub slide: SlideView,
    pub nav: Vec<NavItem>,
    pub position: usize,
    pub total: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub themes: Vec<SelectOption>,
}

/// One slide without the page around it, for in-place swaps.
#[derive(Template)]
#[template(path = "slide_fragment.html")]
pub struct SlideFragmentTemplate {
    pub slide: SlideView,
}
