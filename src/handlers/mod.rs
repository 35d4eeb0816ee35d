pub mod api_handlers;
pub mod gamma_handlers;
pub mod viewer_handlers;
pub mod wizard_handlers;

use actix_web::{HttpResponse, web};
use askama::Template;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{AppStep, Deck};
use crate::templates_structs::NotFoundTemplate;

/// Body of forms that carry nothing but the CSRF token.
#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Register every route. `/outline/...` literals before parameterised paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Wizard
        .route("/", web::get().to(wizard_handlers::prompt::page))
        .route("/outline", web::post().to(wizard_handlers::prompt::submit))
        .route("/outline", web::get().to(wizard_handlers::outline::page))
        .route("/outline/save", web::post().to(wizard_handlers::outline::save))
        .route("/outline/regenerate", web::post().to(wizard_handlers::outline::regenerate))
        .route("/theme", web::get().to(wizard_handlers::theme::page))
        .route("/theme", web::post().to(wizard_handlers::theme::submit))
        .route("/back/{step}", web::post().to(wizard_handlers::nav::back))
        .route("/reset", web::post().to(wizard_handlers::nav::reset))
        // Viewer
        .route("/viewer", web::get().to(viewer_handlers::page))
        .route("/viewer/slides/{n}", web::get().to(viewer_handlers::fragment))
        .route("/viewer/theme", web::post().to(viewer_handlers::switch_theme))
        .route("/viewer/regenerate", web::post().to(viewer_handlers::regenerate))
        // JSON
        .route("/api/presentation", web::get().to(api_handlers::presentation))
        .route("/api/themes", web::get().to(api_handlers::themes))
        // Gamma
        .route("/gamma", web::get().to(gamma_handlers::page))
        .route("/gamma", web::post().to(gamma_handlers::submit));
}

/// Default service: the 404 page.
pub async fn not_found(config: web::Data<AppConfig>) -> Result<HttpResponse, AppError> {
    let body = NotFoundTemplate {
        app_name: config.app_name.clone(),
    }
    .render()?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Redirect to the deck's current step when `wanted` is not reachable yet.
pub(crate) fn step_gate(deck: &Deck, wanted: AppStep) -> Option<HttpResponse> {
    let reachable = deck.reachable(wanted);
    if reachable == wanted {
        None
    } else {
        log::debug!("Step {} not reached yet, showing {}", wanted.slug(), reachable.slug());
        Some(see_other(reachable.path()))
    }
}
