use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::gamma::GammaGenerationRequest;
use crate::models::theme::{LANGUAGES, TONES};
use crate::models::validate::{self, validate_required};
use crate::models::{Deck, DeckStore};
use crate::providers::gamma::GammaClient;
use crate::session::{csrf, current_deck};
use crate::templates_structs::{GammaTemplate, PageContext, SelectOption};

#[derive(Deserialize)]
pub struct GammaForm {
    pub csrf_token: String,
    pub topic: String,
    pub slide_count: String,
    pub tone: String,
    pub language: String,
    #[serde(default)]
    pub theme_id: String,
    #[serde(default)]
    pub folder_id: String,
}

/// Values the form shows, and whether a generation just started.
struct GammaFormState {
    topic: String,
    slide_count: u32,
    tone: String,
    language: String,
    generation_id: Option<String>,
    errors: Vec<String>,
}

impl GammaFormState {
    fn from_deck(deck: &Deck) -> Self {
        Self {
            topic: deck.request.topic.clone(),
            slide_count: deck.request.slide_count,
            tone: deck.request.tone.clone(),
            language: deck.request.language.clone(),
            generation_id: None,
            errors: Vec::new(),
        }
    }
}

pub async fn page(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    gamma: web::Data<GammaClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (_, deck) = current_deck(&session, &store)?;
    let state = GammaFormState::from_deck(&deck);
    render(gamma_template(&session, &config, &gamma, &deck, state).await)
}

pub async fn submit(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    gamma: web::Data<GammaClient>,
    session: Session,
    form: web::Form<GammaForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let (_, deck) = current_deck(&session, &store)?;

    let mut errors = Vec::new();
    errors.extend(validate::validate_topic(&form.topic));
    let slide_count = validate::parse_slide_count(&form.slide_count).unwrap_or_else(|e| {
        errors.push(e);
        deck.request.slide_count
    });
    errors.extend(validate::validate_tone(&form.tone));
    errors.extend(validate::validate_language(&form.language));
    errors.extend(validate_required(&form.theme_id, "Theme", 200));

    let mut state = GammaFormState {
        topic: form.topic.clone(),
        slide_count,
        tone: form.tone.clone(),
        language: form.language.clone(),
        generation_id: None,
        errors,
    };

    if state.errors.is_empty() {
        let request = GammaGenerationRequest {
            topic: form.topic.trim().to_string(),
            slide_count,
            tone: form.tone.clone(),
            language: form.language.clone(),
            theme_id: form.theme_id.trim().to_string(),
            folder_id: Some(form.folder_id.trim().to_string()).filter(|f| !f.is_empty()),
        };
        match gamma.create_generation(&request).await {
            Ok(generation) => {
                log::info!("Gamma generation started: {}", generation.generation_id);
                state.generation_id = Some(generation.generation_id);
            }
            Err(e) => {
                log::error!("Gamma generation failed: {e}");
                state.errors.push(e.user_message());
            }
        }
    }

    render(gamma_template(&session, &config, &gamma, &deck, state).await)
}

async fn gamma_template(
    session: &Session,
    config: &AppConfig,
    gamma: &GammaClient,
    deck: &Deck,
    state: GammaFormState,
) -> GammaTemplate {
    let (themes, folders) = if gamma.is_configured() {
        (gamma.list_themes().await, gamma.list_folders().await)
    } else {
        (Vec::new(), Vec::new())
    };
    GammaTemplate {
        ctx: PageContext::build(session, config, deck, deck.step),
        configured: gamma.is_configured(),
        topic: state.topic,
        slide_count: state.slide_count,
        tones: SelectOption::from_values(&TONES, &state.tone),
        languages: SelectOption::from_values(&LANGUAGES, &state.language),
        themes,
        folders,
        generation_id: state.generation_id,
        errors: state.errors,
    }
}
