use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::DeckStore;
use crate::models::theme::THEMES;
use crate::session::current_deck;

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// The session's presentation in its wire format.
pub async fn presentation(
    store: web::Data<DeckStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (_, deck) = current_deck(&session, &store)?;
    match deck.presentation {
        Some(p) => Ok(HttpResponse::Ok().json(p)),
        None => Ok(HttpResponse::NotFound().json(ApiErrorResponse {
            error: "No presentation has been generated yet".to_string(),
        })),
    }
}

pub async fn themes() -> HttpResponse {
    HttpResponse::Ok().json(&THEMES)
}
