use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::{CsrfOnly, see_other, step_gate};
use crate::models::validate::validate_outline_title;
use crate::models::{AppStep, Deck, DeckStore, OutlineEdit, OutlineItem, SlideType};
use crate::pipeline;
use crate::providers::gemini::GeminiClient;
use crate::session::{csrf, current_deck, set_flash};
use crate::templates_structs::{OutlineRow, OutlineTemplate, PageContext, SelectOption};

/// What the outline form's submit button asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutlineAction {
    Save,
    Confirm,
    Move { index: usize, up: bool },
}

impl OutlineAction {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "save" => Some(Self::Save),
            "confirm" => Some(Self::Confirm),
            _ => {
                if let Some(i) = value.strip_prefix("up_") {
                    return i.parse().ok().map(|index| Self::Move { index, up: true });
                }
                let i = value.strip_prefix("down_")?;
                i.parse().ok().map(|index| Self::Move { index, up: false })
            }
        }
    }
}

pub async fn page(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (_, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Outline) {
        return Ok(redirect);
    }
    render(outline_template(&session, &config, &deck, &deck.outline, Vec::new()))
}

pub async fn save(
    config: web::Data<AppConfig>,
    store: web::Data<DeckStore>,
    session: Session,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    csrf::validate_csrf(&session, form.get("csrf_token").map(String::as_str).unwrap_or(""))?;
    let (deck_id, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Outline) {
        return Ok(redirect);
    }

    let action = match form.get("action") {
        None => OutlineAction::Save,
        Some(a) => OutlineAction::parse(a)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown outline action: {a}")))?,
    };
    let edits = parse_edits(&form, deck.outline.len());

    let errors: Vec<String> = edits
        .iter()
        .filter(|e| !e.remove)
        .filter_map(|e| validate_outline_title(&e.title, e.index + 1))
        .collect();
    if !errors.is_empty() {
        let mut preview = deck.outline.clone();
        for edit in &edits {
            if let Some(item) = preview.get_mut(edit.index) {
                item.title = edit.title.clone();
                item.description = edit.description.clone();
                item.slide_type = edit.slide_type;
            }
        }
        return render(outline_template(&session, &config, &deck, &preview, errors));
    }

    let outcome = store.update(&deck_id, |d| {
        d.edit_outline(&edits);
        match action {
            OutlineAction::Save => Ok(None),
            OutlineAction::Move { index, up } => {
                d.move_outline_item(index, up);
                Ok(None)
            }
            OutlineAction::Confirm => d.confirm_outline().map(|_| Some(AppStep::Theme)),
        }
    });

    match outcome {
        Some(Ok(Some(next))) => Ok(see_other(next.path())),
        Some(Ok(None)) => {
            if action == OutlineAction::Save {
                set_flash(&session, "Outline saved");
            }
            Ok(see_other(AppStep::Outline.path()))
        }
        Some(Err(e)) => {
            set_flash(&session, e.to_string());
            Ok(see_other(AppStep::Outline.path()))
        }
        None => Err(AppError::NotFound),
    }
}

/// Ask for a fresh outline from the stored request.
pub async fn regenerate(
    store: web::Data<DeckStore>,
    gemini: web::Data<GeminiClient>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let (deck_id, deck) = current_deck(&session, &store)?;
    if let Some(redirect) = step_gate(&deck, AppStep::Outline) {
        return Ok(redirect);
    }

    match pipeline::generate_outline(gemini.get_ref(), &deck.request).await {
        Ok(outline) => {
            store.update(&deck_id, |d| d.set_outline(outline));
            set_flash(&session, "Outline regenerated");
        }
        Err(e) => {
            log::error!("Outline regeneration failed: {e}");
            set_flash(&session, e.user_message());
        }
    }
    Ok(see_other(AppStep::Outline.path()))
}

/// Read `title_N`, `description_N`, `type_N` and `remove_N` fields for each
/// outline row. Rows without a title field were not submitted and are skipped.
fn parse_edits(form: &HashMap<String, String>, rows: usize) -> Vec<OutlineEdit> {
    (0..rows)
        .filter_map(|index| {
            let title = form.get(&format!("title_{index}"))?;
            let slide_type = form
                .get(&format!("type_{index}"))
                .and_then(|t| SlideType::parse(t))
                .unwrap_or(SlideType::Content);
            Some(OutlineEdit {
                index,
                title: title.clone(),
                description: form
                    .get(&format!("description_{index}"))
                    .cloned()
                    .unwrap_or_default(),
                slide_type,
                remove: form.contains_key(&format!("remove_{index}")),
            })
        })
        .collect()
}

fn outline_template(
    session: &Session,
    config: &AppConfig,
    deck: &Deck,
    items: &[OutlineItem],
    errors: Vec<String>,
) -> OutlineTemplate {
    let last = items.len().saturating_sub(1);
    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| OutlineRow {
            index,
            position: index + 1,
            title: item.title.clone(),
            description: item.description.clone(),
            type_options: SlideType::ALL
                .iter()
                .map(|t| SelectOption::new(t.as_str(), t.label(), *t == item.slide_type))
                .collect(),
            is_first: index == 0,
            is_last: index == last,
        })
        .collect();
    OutlineTemplate {
        ctx: PageContext::build(session, config, deck, AppStep::Outline),
        topic: deck.request.topic.clone(),
        rows,
        errors,
    }
}
