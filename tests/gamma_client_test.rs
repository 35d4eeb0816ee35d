//! Gamma client against a local stand-in for the public API.

mod common;

use common::*;
use deckgen::models::gamma::{GammaGenerationRequest, GammaThemeKind};
use deckgen::providers::ProviderError;
use deckgen::providers::gamma::{GammaClient, GammaConfig};

fn request(theme_id: &str, folder_id: Option<&str>) -> GammaGenerationRequest {
    GammaGenerationRequest {
        topic: "Quarterly review".to_string(),
        slide_count: 8,
        tone: "Professional".to_string(),
        language: "Spanish".to_string(),
        theme_id: theme_id.to_string(),
        folder_id: folder_id.map(str::to_string),
    }
}

#[actix_web::test]
async fn lists_themes_and_folders() {
    let fake = spawn_fake_gamma().await;
    let client = fake.client();

    let themes = client.list_themes().await;
    assert_eq!(themes.len(), 2);
    assert_eq!(themes[0].name, "Chisel");
    assert_eq!(themes[0].color_keywords, vec!["gray".to_string()]);
    assert_eq!(themes[1].kind, GammaThemeKind::Custom);
    assert!(themes[1].tone_keywords.is_empty());

    let folders = client.list_folders().await;
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].id, "fld_1");
}

#[actix_web::test]
async fn listings_are_empty_without_a_key() {
    let fake = spawn_fake_gamma().await;
    let client = GammaClient::new(GammaConfig::new(None).with_base_url(fake.base_url.clone()));
    assert!(!client.is_configured());
    assert!(client.list_themes().await.is_empty());
    assert!(client.list_folders().await.is_empty());
}

#[actix_web::test]
async fn listings_are_empty_on_rejected_key() {
    let fake = spawn_fake_gamma().await;
    let client = GammaClient::new(
        GammaConfig::new(Some("wrong".to_string())).with_base_url(fake.base_url.clone()),
    );
    assert!(client.list_themes().await.is_empty());
}

#[actix_web::test]
async fn creates_a_generation() {
    let fake = spawn_fake_gamma().await;
    let generation = fake
        .client()
        .create_generation(&request("chisel", Some("fld_1")))
        .await
        .expect("generation");
    assert_eq!(generation.generation_id, "gen_123");

    let sent = fake.generations();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["themeId"], "chisel");
    assert_eq!(sent[0]["numCards"], 8);
    assert_eq!(sent[0]["textOptions"]["language"], "es");
    assert_eq!(sent[0]["folderIds"][0], "fld_1");
}

#[actix_web::test]
async fn generation_errors_include_the_reason() {
    let fake = spawn_fake_gamma().await;
    let err = fake
        .client()
        .create_generation(&request("broken", None))
        .await
        .unwrap_err();

    match err {
        ProviderError::Http { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("Unprocessable Entity"));
            assert!(body.contains("theme not found"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}
