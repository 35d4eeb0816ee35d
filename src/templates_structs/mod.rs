// Template context structures for Askama templates, grouped by wizard area.
// All types are re-exported: `use deckgen::templates_structs::*`

use actix_session::Session;

use crate::config::AppConfig;
use crate::models::{AppStep, Deck};
use crate::session::{csrf, take_flash};

/// Common context shared by all wizard pages.
/// Templates access these as `ctx.app_name`, `ctx.steps`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
    pub step: AppStep,
    pub steps: Vec<StepLink>,
    pub generation_ready: bool,
}

/// One entry of the step bar.
pub struct StepLink {
    pub label: &'static str,
    pub path: &'static str,
    pub slug: &'static str,
    /// "done", "current" or "todo"
    pub state: &'static str,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, deck: &Deck, showing: AppStep) -> Self {
        let steps = AppStep::ALL
            .into_iter()
            .map(|s| StepLink {
                label: s.label(),
                path: s.path(),
                slug: s.slug(),
                state: if s == showing {
                    "current"
                } else if s <= deck.step {
                    "done"
                } else {
                    "todo"
                },
            })
            .collect();
        Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
            step: deck.step,
            steps,
            generation_ready: config.gemini.api_key.is_some(),
        }
    }
}

mod common;
mod gamma;
mod viewer;
mod wizard;

pub use self::common::{NotFoundTemplate, SelectOption};
pub use self::gamma::GammaTemplate;
pub use self::viewer::{NavItem, SlideFragmentTemplate, ViewerTemplate};
pub use self::wizard::{OutlineRow, OutlineTemplate, PromptTemplate, ThemeCard, ThemeTemplate};
