//! Linear generation pipeline: outline, content expansion, then images.

use crate::models::store::generate_id;
use crate::models::{DeckRequest, OutlineItem, Presentation, SlideContent};
use crate::providers::ProviderError;
use crate::providers::gemini::GeminiClient;

/// The three generation calls the pipeline needs.
#[allow(async_fn_in_trait)]
pub trait DeckGenerator {
    async fn outline(&self, request: &DeckRequest) -> Result<Vec<OutlineItem>, ProviderError>;

    async fn expand(
        &self,
        outline: &[OutlineItem],
        tone: &str,
        language: &str,
    ) -> Result<Vec<SlideContent>, ProviderError>;

    /// Returns a displayable image URL, or None when nothing was produced.
    async fn image(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}

impl DeckGenerator for GeminiClient {
    async fn outline(&self, request: &DeckRequest) -> Result<Vec<OutlineItem>, ProviderError> {
        self.generate_outline(
            request.topic.trim(),
            request.slide_count,
            &request.tone,
            &request.language,
        )
        .await
    }

    async fn expand(
        &self,
        outline: &[OutlineItem],
        tone: &str,
        language: &str,
    ) -> Result<Vec<SlideContent>, ProviderError> {
        self.generate_slide_content(outline, tone, language).await
    }

    async fn image(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.generate_image(prompt).await?.map(|img| img.data_url()))
    }
}

pub async fn generate_outline<G: DeckGenerator>(
    generator: &G,
    request: &DeckRequest,
) -> Result<Vec<OutlineItem>, ProviderError> {
    log::info!(
        "Generating outline: {} slides, tone={}, language={}",
        request.slide_count,
        request.tone,
        request.language
    );
    let outline = generator.outline(request).await?;
    if outline.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(outline)
}

/// Expand `outline` into a presentation and, when asked, attach images.
pub async fn build_presentation<G: DeckGenerator>(
    generator: &G,
    request: &DeckRequest,
    outline: &[OutlineItem],
    theme_id: &str,
    with_images: bool,
) -> Result<Presentation, ProviderError> {
    log::info!("Expanding outline of {} slides", outline.len());
    let slides = generator
        .expand(outline, &request.tone, &request.language)
        .await?;
    if slides.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let mut presentation = Presentation::new(generate_id(), request, theme_id, slides);
    if with_images {
        let attached = attach_images(generator, &mut presentation.slides).await;
        log::info!("Attached {attached} generated image(s)");
    }
    Ok(presentation)
}

/// Generate images one slide at a time, in slide order. A failed image is
/// logged and skipped; the layouts have fallbacks for missing images.
pub async fn attach_images<G: DeckGenerator>(generator: &G, slides: &mut [SlideContent]) -> usize {
    let mut attached = 0;
    for slide in slides.iter_mut() {
        let Some(prompt) = slide.pending_image_prompt().map(str::to_string) else {
            continue;
        };
        match generator.image(&prompt).await {
            Ok(Some(url)) => {
                slide.image_url = Some(url);
                attached += 1;
            }
            Ok(None) => log::warn!("No image returned for slide {}", slide.id),
            Err(e) => log::warn!("Image generation failed for slide {}: {e}", slide.id),
        }
    }
    attached
}
