//! Shared test infrastructure for client and handler tests.
//!
//! - `spawn_fake_gemini()` / `spawn_fake_gamma()` start local stand-ins for
//!   the remote APIs and return their base URL.
//! - `test_app!` builds the full application around a [`TestDeps`].
//! - [`Browser`] carries the session cookie between requests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use regex::Regex;
use serde_json::{Value, json};

use deckgen::config::AppConfig;
use deckgen::models::DeckStore;
use deckgen::providers::gamma::{GammaClient, GammaConfig};
use deckgen::providers::gemini::{GeminiClient, GeminiConfig};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const GEMINI_KEY: &str = "test-gemini-key";
pub const GAMMA_KEY: &str = "test-gamma-key";
pub const TEXT_MODEL: &str = "text-model";
pub const IMAGE_MODEL: &str = "image-model";
/// Base64 of `PNG`.
pub const IMAGE_B64: &str = "UE5H";

// ============================================================================
// FAKE GEMINI
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiMode {
    Ok,
    /// Every call answers 500.
    ServerError,
    /// Text calls answer with text that is not JSON.
    Garbage,
    /// Text works, image calls answer 500.
    ImageFails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiCall {
    pub model: String,
    pub api_key: String,
    pub body: String,
}

pub struct FakeGemini {
    pub base_url: String,
    pub calls: Arc<Mutex<Vec<GeminiCall>>>,
}

impl FakeGemini {
    pub fn calls(&self) -> Vec<GeminiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: Some(GEMINI_KEY.to_string()),
            base_url: self.base_url.clone(),
            text_model: TEXT_MODEL.to_string(),
            image_model: IMAGE_MODEL.to_string(),
        }
    }

    pub fn client(&self) -> GeminiClient {
        GeminiClient::new(self.config())
    }
}

struct GeminiState {
    mode: GeminiMode,
    calls: Arc<Mutex<Vec<GeminiCall>>>,
}

pub fn outline_fixture() -> Value {
    json!([
        { "id": "0", "title": "Ocean Cleanup", "description": "Opening", "slideType": "title" },
        { "id": "1", "title": "Agenda", "description": "Plan for the day", "slideType": "agenda" },
        { "id": "2", "title": "Why It Matters", "description": "Scale of the problem", "slideType": "content" },
        { "id": "3", "title": "Thanks", "description": "Wrap up", "slideType": "closing" }
    ])
}

pub fn content_fixture() -> Value {
    json!([
        { "id": "0", "type": "title", "title": "Ocean Cleanup", "points": ["A plan for cleaner seas"], "imagePrompt": "waves" },
        { "id": "1", "type": "agenda", "title": "Agenda", "points": ["09:00: Introduction", "10:30: Field work"], "imagePrompt": "a calendar" },
        { "id": "2", "type": "content", "title": "Why It Matters", "points": ["8M tonnes a year", "Fisheries at risk"], "imagePrompt": "plastic in the sea" },
        { "id": "3", "type": "closing", "title": "Thanks", "points": [], "imagePrompt": "" }
    ])
}

fn text_response(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
}

async fn gemini_generate(
    state: web::Data<GeminiState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    let call = path.into_inner();
    let model = call.trim_end_matches(":generateContent").to_string();
    let api_key = req
        .headers()
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    state.calls.lock().unwrap().push(GeminiCall {
        model: model.clone(),
        api_key,
        body: body.to_string(),
    });

    let is_image = model == IMAGE_MODEL;
    match state.mode {
        GeminiMode::ServerError => {
            return HttpResponse::InternalServerError().body("upstream exploded");
        }
        GeminiMode::ImageFails if is_image => {
            return HttpResponse::InternalServerError().body("no images today");
        }
        _ => {}
    }

    if is_image {
        return HttpResponse::Ok().json(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Here you go" },
                { "inlineData": { "mimeType": "image/png", "data": IMAGE_B64 } }
            ] } }]
        }));
    }
    if state.mode == GeminiMode::Garbage {
        return HttpResponse::Ok().json(text_response("I cannot do that"));
    }

    let wants_outline = body["generationConfig"]["responseSchema"]["items"]["properties"]
        .get("slideType")
        .is_some();
    let payload = if wants_outline {
        outline_fixture()
    } else {
        content_fixture()
    };
    // Wrapped in a code fence the way models sometimes answer.
    let text = format!("```json\n{payload}\n```");
    HttpResponse::Ok().json(text_response(&text))
}

pub async fn spawn_fake_gemini(mode: GeminiMode) -> FakeGemini {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(GeminiState {
        mode,
        calls: calls.clone(),
    });
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/models/{call}", web::post().to(gemini_generate))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake gemini");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    FakeGemini {
        base_url: format!("http://{addr}"),
        calls,
    }
}

// ============================================================================
// FAKE GAMMA
// ============================================================================

pub struct FakeGamma {
    pub base_url: String,
    pub generations: Arc<Mutex<Vec<Value>>>,
}

impl FakeGamma {
    pub fn config(&self) -> GammaConfig {
        GammaConfig::new(Some(GAMMA_KEY.to_string())).with_base_url(self.base_url.clone())
    }

    pub fn client(&self) -> GammaClient {
        GammaClient::new(self.config())
    }

    pub fn generations(&self) -> Vec<Value> {
        self.generations.lock().unwrap().clone()
    }
}

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        == Some(GAMMA_KEY)
}

async fn gamma_themes(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    if req.query_string() != "limit=50" {
        return HttpResponse::BadRequest().body("missing limit");
    }
    HttpResponse::Ok().json(json!({
        "data": [
            { "id": "chisel", "name": "Chisel", "type": "standard", "colorKeywords": ["gray"], "toneKeywords": ["calm"] },
            { "id": "brand-1", "name": "Acme Brand", "type": "custom" }
        ],
        "hasMore": false
    }))
}

async fn gamma_folders(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(json!({ "data": [{ "id": "fld_1", "name": "Board decks" }] }))
}

async fn gamma_generate(
    generations: web::Data<Arc<Mutex<Vec<Value>>>>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().body("bad key");
    }
    if body["themeId"] == "broken" {
        return HttpResponse::UnprocessableEntity().body("theme not found");
    }
    generations.lock().unwrap().push(body.into_inner());
    HttpResponse::Ok().json(json!({ "generationId": "gen_123" }))
}

pub async fn spawn_fake_gamma() -> FakeGamma {
    let generations = Arc::new(Mutex::new(Vec::new()));
    let data = web::Data::new(generations.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/themes", web::get().to(gamma_themes))
            .route("/folders", web::get().to(gamma_folders))
            .route("/generations", web::post().to(gamma_generate))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake gamma");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    FakeGamma {
        base_url: format!("http://{addr}"),
        generations,
    }
}

// ============================================================================
// APPLICATION
// ============================================================================

/// Everything the application needs from the outside.
pub struct TestDeps {
    pub config: web::Data<AppConfig>,
    pub store: web::Data<DeckStore>,
    pub gemini: web::Data<GeminiClient>,
    pub gamma: web::Data<GammaClient>,
}

impl TestDeps {
    pub fn new(gemini: GeminiConfig, gamma: GammaConfig) -> Self {
        let config = AppConfig {
            app_name: "deckgen".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            session_key: None,
            generate_images: true,
            gemini: gemini.clone(),
            gamma: gamma.clone(),
        };
        Self {
            config: web::Data::new(config),
            store: web::Data::new(DeckStore::new()),
            gemini: web::Data::new(GeminiClient::new(gemini)),
            gamma: web::Data::new(GammaClient::new(gamma)),
        }
    }

    /// Dependencies with no API keys at all.
    pub fn offline() -> Self {
        Self::new(GeminiConfig::new(None), GammaConfig::new(None))
    }
}

/// Build and initialise the full application service.
#[macro_export]
macro_rules! test_app {
    ($deps:expr) => {{
        let deps = &$deps;
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::from(&[7u8; 64]),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(deps.config.clone())
                .app_data(deps.store.clone())
                .app_data(deps.gemini.clone())
                .app_data(deps.gamma.clone())
                .configure(deckgen::handlers::configure)
                .default_service(actix_web::web::to(deckgen::handlers::not_found)),
        )
        .await
    }};
}

// ============================================================================
// BROWSER
// ============================================================================

/// Keeps the session cookie between requests, like a browser would.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uri: &str) -> actix_http::Request {
        self.with_cookie(TestRequest::get().uri(uri)).to_request()
    }

    pub fn post_form(&self, uri: &str, form: &[(&str, &str)]) -> actix_http::Request {
        self.with_cookie(TestRequest::post().uri(uri).set_form(form))
            .to_request()
    }

    fn with_cookie(&self, req: TestRequest) -> TestRequest {
        match &self.cookie {
            Some(c) => req.cookie(c.clone()),
            None => req,
        }
    }

    /// Keep the session cookie from a response, if it set one.
    pub fn remember<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(c) = resp.response().cookies().find(|c| c.name() == "id") {
            self.cookie = Some(c.into_owned());
        }
    }
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Pull the CSRF token out of a rendered form.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .map(|c| c[1].to_string())
        .expect("page has a CSRF token")
}
