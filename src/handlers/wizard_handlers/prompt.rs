use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::see_other;
use crate::models::theme::{LANGUAGES, TONES};
use crate::models::validate::{self, MAX_SLIDES, MIN_SLIDES};
use crate::models::{AppStep, Deck, DeckRequest, DeckStore};
use crate::pipeline;
use crate::providers::gemini::GeminiClient;
use crate::session::{csrf, current_deck};
use crate::templates_structs::{PageContext, PromptTemplate, SelectOption};

#[derive(Deserialize)]
pub struct PromptForm {
    pub csrf_token: String,
    pub topic: String,
    pub slide_count: String,
    pub tone: String,
    pub language: String,
}

pub async fn page(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (_, deck) = current_deck(&session, &store)?;
    let request = &deck.request;
    let tmpl = prompt_template(
        &session,
        &config,
        &deck,
        request.topic.clone(),
        request.slide_count.to_string(),
        &request.tone,
        &request.language,
        Vec::new(),
    );
    render(tmpl)
}

pub async fn submit(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    gemini: web::Data<GeminiClient>,
    session: Session,
    form: web::Form<PromptForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let (deck_id, deck) = current_deck(&session, &store)?;

    let mut errors = Vec::new();
    errors.extend(validate::validate_topic(&form.topic));
    let slide_count = match validate::parse_slide_count(&form.slide_count) {
        Ok(n) => n,
        Err(e) => {
            errors.push(e);
            0
        }
    };
    errors.extend(validate::validate_tone(&form.tone));
    errors.extend(validate::validate_language(&form.language));

    if !errors.is_empty() {
        let tmpl = prompt_template(
            &session,
            &config,
            &deck,
            form.topic.clone(),
            form.slide_count.clone(),
            &form.tone,
            &form.language,
            errors,
        );
        return render(tmpl);
    }

    let request = DeckRequest {
        topic: form.topic.trim().to_string(),
        slide_count,
        tone: form.tone.clone(),
        language: form.language.clone(),
    };

    match pipeline::generate_outline(gemini.get_ref(), &request).await {
        Ok(outline) => {
            log::info!("Outline ready with {} items", outline.len());
            store.update(&deck_id, |d| {
                d.set_request(request);
                d.set_outline(outline);
            });
            Ok(see_other(AppStep::Outline.path()))
        }
        Err(e) => {
            // The deck keeps its last good request; the form keeps what was typed.
            log::error!("Outline generation failed: {e}");
            let mut tmpl = prompt_template(
                &session,
                &config,
                &deck,
                form.topic.clone(),
                form.slide_count.clone(),
                &form.tone,
                &form.language,
                Vec::new(),
            );
            tmpl.ctx.flash = Some(e.user_message());
            render(tmpl)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn prompt_template(
    session: &Session,
    config: &AppConfig,
    deck: &Deck,
    topic: String,
    slide_count: String,
    tone: &str,
    language: &str,
    errors: Vec<String>,
) -> PromptTemplate {
    PromptTemplate {
        ctx: PageContext::build(session, config, deck, AppStep::Prompt),
        topic,
        slide_count,
        tones: SelectOption::from_values(&TONES, tone),
        languages: SelectOption::from_values(&LANGUAGES, language),
        min_slides: MIN_SLIDES,
        max_slides: MAX_SLIDES,
        errors,
    }
}
