use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::{CsrfOnly, see_other, step_gate};
use crate::models::theme::{self, THEMES};
use crate::models::{AppStep, DeckStore, Presentation, WizardError};
use crate::pipeline;
use crate::providers::gemini::GeminiClient;
use crate::render::{SlideFrame, render_slide};
use crate::session::{csrf, current_deck, set_flash};
use crate::templates_structs::{
    NavItem, PageContext, SelectOption, SlideFragmentTemplate, ViewerTemplate,
};

#[derive(Deserialize)]
pub struct SlideQuery {
    pub slide: Option<usize>,
}

#[derive(Deserialize)]
pub struct SwitchThemeForm {
    pub csrf_token: String,
    pub theme_id: String,
    pub slide: Option<usize>,
}

pub async fn page(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    session: Session,
    query: web::Query<SlideQuery>,
) -> Result<HttpResponse, AppError> {
    let (_, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Viewer) {
        return Ok(redirect);
    }
    let Some(presentation) = deck.presentation.as_ref().filter(|p| !p.is_empty()) else {
        return Ok(see_other(AppStep::Theme.path()));
    };

    let active = presentation.clamp_index(query.slide.unwrap_or(0));
    let theme = theme::find_or_default(&presentation.theme_id);
    let frame = SlideFrame::new(active, true, deck.logo_url.clone());
    let slide = render_slide(&presentation.slides[active], theme, &frame);
    let total = presentation.len();

    let tmpl = ViewerTemplate {
        ctx: PageContext::build(&session, &config, &deck, AppStep::Viewer),
        topic: presentation.topic.clone(),
        slide,
        nav: nav_items(presentation, active),
        position: active + 1,
        total,
        prev: active.checked_sub(1),
        next: Some(active + 1).filter(|n| *n < total),
        themes: THEMES
            .iter()
            .map(|t| SelectOption::new(t.id, t.name, t.id == presentation.theme_id))
            .collect(),
    };
    render(tmpl)
}

/// One rendered slide, for swapping into the stage without a page load.
pub async fn fragment(
    store: web::Data<DeckStore>,
    session: Session,
    path: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let (_, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Viewer) {
        return Ok(redirect);
    }
    let presentation = deck.presentation.as_ref().ok_or(AppError::NotFound)?;
    let index = path.into_inner();
    let content = presentation.slides.get(index).ok_or(AppError::NotFound)?;

    let theme = theme::find_or_default(&presentation.theme_id);
    let frame = SlideFrame::new(index, true, deck.logo_url.clone());
    render(SlideFragmentTemplate {
        slide: render_slide(content, theme, &frame),
    })
}

/// Re-skin the current presentation. Content is untouched.
pub async fn switch_theme(
    store: web::Data<DeckStore>,
    session: Session,
    form: web::Form<SwitchThemeForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let (deck_id, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Viewer) {
        return Ok(redirect);
    }
    if deck.presentation.is_none() {
        return Err(WizardError::NoPresentation.into());
    }

    store
        .update(&deck_id, |d| d.select_theme(&form.theme_id))
        .ok_or(AppError::NotFound)??;
    log::info!("Deck {deck_id} switched to theme {}", form.theme_id);
    let location = format!("{}?slide={}", AppStep::Viewer.path(), form.slide.unwrap_or(0));
    Ok(see_other(&location))
}

/// Expand the stored outline again and replace the presentation wholesale.
pub async fn regenerate(
    store: web::Data<DeckStore>,
    gemini: web::Data<GeminiClient>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let (deck_id, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Viewer) {
        return Ok(redirect);
    }
    if deck.presentation.is_none() {
        return Err(WizardError::NoPresentation.into());
    }

    match pipeline::build_presentation(
        gemini.get_ref(),
        &deck.request,
        &deck.outline,
        &deck.theme_id,
        deck.with_images,
    )
    .await
    {
        Ok(presentation) => {
            log::info!("Regenerated presentation {}", presentation.id);
            store.update(&deck_id, |d| d.set_presentation(presentation));
        }
        Err(e) => {
            log::error!("Regeneration failed: {e}");
            set_flash(&session, e.user_message());
        }
    }
    Ok(see_other(AppStep::Viewer.path()))
}

fn nav_items(presentation: &Presentation, active: usize) -> Vec<NavItem> {
    presentation
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| NavItem {
            index,
            number: index + 1,
            title: slide.title.clone(),
            archetype: slide.slide_type.label(),
            active: index == active,
        })
        .collect()
}
