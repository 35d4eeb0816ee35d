use actix_session::Session;
use actix_web::{HttpResponse, web};
use askama::Template;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::{see_other, step_gate};
use crate::models::theme::{self, THEMES};
use crate::models::validate::validate_logo_url;
use crate::models::{AppStep, Deck, DeckStore, SlideContent, SlideType, ThemeConfig};
use crate::pipeline;
use crate::providers::gemini::GeminiClient;
use crate::render::{SlideFrame, render_slide};
use crate::session::{csrf, current_deck, set_flash};
use crate::templates_structs::{PageContext, SlideFragmentTemplate, ThemeCard, ThemeTemplate};

#[derive(Deserialize)]
pub struct ThemeForm {
    pub csrf_token: String,
    pub theme_id: String,
    #[serde(default)]
    pub logo_url: String,
    /// Checkbox: present only when ticked.
    pub with_images: Option<String>,
}

pub async fn page(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (_, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Theme) {
        return Ok(redirect);
    }
    let logo_url = deck.logo_url.clone().unwrap_or_default();
    let tmpl = theme_template(
        &session,
        &config,
        &deck,
        &deck.theme_id,
        logo_url,
        deck.with_images,
        Vec::new(),
    )?;
    render(tmpl)
}

pub async fn submit(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    gemini: web::Data<GeminiClient>,
    session: Session,
    form: web::Form<ThemeForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let (deck_id, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Theme) {
        return Ok(redirect);
    }

    let with_images = form.with_images.is_some() && config.generate_images;
    let mut errors = Vec::new();
    if theme::find(&form.theme_id).is_none() {
        errors.push(format!("Unknown theme: {}", form.theme_id));
    }
    errors.extend(validate_logo_url(&form.logo_url));
    if !errors.is_empty() {
        let tmpl = theme_template(
            &session,
            &config,
            &deck,
            &form.theme_id,
            form.logo_url.clone(),
            with_images,
            errors,
        )?;
        return render(tmpl);
    }

    match pipeline::build_presentation(
        gemini.get_ref(),
        &deck.request,
        &deck.outline,
        &form.theme_id,
        with_images,
    )
    .await
    {
        Ok(presentation) => {
            log::info!(
                "Presentation {} ready with {} slides",
                presentation.id,
                presentation.len()
            );
            let logo_url = Some(form.logo_url.trim().to_string()).filter(|u| !u.is_empty());
            store.update(&deck_id, |d| {
                d.logo_url = logo_url;
                d.with_images = with_images;
                d.set_presentation(presentation);
            });
            Ok(see_other(AppStep::Viewer.path()))
        }
        Err(e) => {
            log::error!("Presentation generation failed: {e}");
            set_flash(&session, e.user_message());
            Ok(see_other(AppStep::Theme.path()))
        }
    }
}

fn theme_template(
    session: &Session,
    config: &AppConfig,
    deck: &Deck,
    selected: &str,
    logo_url: String,
    with_images: bool,
    errors: Vec<String>,
) -> Result<ThemeTemplate, AppError> {
    let sample = preview_slide(deck);
    let logo = Some(logo_url.trim().to_string()).filter(|u| !u.is_empty() && errors.is_empty());
    let cards = THEMES
        .iter()
        .map(|t| theme_card(t, &sample, logo.clone(), t.id == selected))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ThemeTemplate {
        ctx: PageContext::build(session, config, deck, AppStep::Theme),
        cards,
        logo_url,
        with_images,
        images_available: config.generate_images,
        slide_count: deck.outline.len(),
        errors,
    })
}

fn theme_card(
    theme: &'static ThemeConfig,
    sample: &SlideContent,
    logo_url: Option<String>,
    selected: bool,
) -> Result<ThemeCard, AppError> {
    let slide = render_slide(sample, theme, &SlideFrame::new(0, true, logo_url));
    Ok(ThemeCard {
        id: theme.id,
        name: theme.name,
        preview_color: theme.preview_color,
        selected,
        preview_html: SlideFragmentTemplate { slide }.render()?,
    })
}

/// The opening slide of the generated deck, or a title slide built from the
/// outline when nothing has been generated yet.
fn preview_slide(deck: &Deck) -> SlideContent {
    if let Some(first) = deck.presentation.as_ref().and_then(|p| p.slides.first()) {
        return first.clone();
    }
    let title = deck
        .outline
        .first()
        .map(|item| item.title.clone())
        .unwrap_or_else(|| deck.request.topic.clone());
    let subtitle = deck
        .outline
        .first()
        .map(|item| item.description.clone())
        .filter(|d| !d.is_empty());
    SlideContent::new("0", SlideType::Title, title).with_points(subtitle)
}
