use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::handlers::{CsrfOnly, see_other};
use crate::models::{AppStep, DeckStore};
use crate::session::{csrf, ensure_deck};

/// Go back to an earlier step. Later-step data stays until regenerated.
pub async fn back(
    store: web::Data<DeckStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let step = AppStep::from_slug(&path.into_inner()).ok_or(AppError::NotFound)?;
    let deck_id = ensure_deck(&session, &store)?;

    store
        .update(&deck_id, |d| d.back_to(step))
        .ok_or(AppError::NotFound)??;
    Ok(see_other(step.path()))
}

/// Start over from the prompt, keeping the last request as form defaults.
pub async fn reset(
    store: web::Data<DeckStore>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let deck_id = ensure_deck(&session, &store)?;
    store.update(&deck_id, |d| d.reset());
    log::info!("Deck {deck_id} reset");
    Ok(see_other(AppStep::Prompt.path()))
}
