use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use deckgen::config::AppConfig;
use deckgen::handlers;
use deckgen::models::DeckStore;
use deckgen::models::store::spawn_eviction;
use deckgen::providers::gamma::GammaClient;
use deckgen::providers::gemini::GeminiClient;

const EVICTION_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10 * 60);
const DECK_IDLE_HOURS: i64 = 6;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env is loaded first so a RUST_LOG set there applies
    let config = AppConfig::from_env();
    env_logger::init();

    // Session encryption key: load from SESSION_KEY for sessions that survive restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    if config.gemini.api_key.is_none() {
        log::warn!("GEMINI_API_KEY is not set; generation requests will fail");
    }
    log::info!(
        "Text model {}, image model {}, images {}",
        config.gemini.text_model,
        config.gemini.image_model,
        if config.generate_images { "on" } else { "off" }
    );

    let store = DeckStore::new();
    spawn_eviction(store.clone(), EVICTION_INTERVAL, chrono::Duration::hours(DECK_IDLE_HOURS));

    let gemini = web::Data::new(GeminiClient::new(config.gemini.clone()));
    let gamma = web::Data::new(GammaClient::new(config.gamma.clone()));
    let store = web::Data::new(store);
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(store.clone())
            .app_data(gemini.clone())
            .app_data(gamma.clone())
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
