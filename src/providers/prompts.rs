//! Prompt text and response schemas for the text-generation calls.

use serde_json::{Value, json};

use crate::models::{OutlineItem, SlideType};

fn slide_type_enum() -> Value {
    Value::Array(
        SlideType::ALL
            .iter()
            .map(|t| Value::String(t.as_str().to_string()))
            .collect(),
    )
}

pub fn outline_prompt(topic: &str, slide_count: u32, tone: &str, language: &str) -> String {
    format!(
        r#"Create a professional presentation outline for: "{topic}".
Total slides: {slide_count}. Tone: {tone}. Language: {language}.

CRITICAL RULES:
1. Use a mix of layout types for variety.
2. 'title' for the first slide.
3. 'agenda' should be the second slide to outline the schedule.
4. 'section' for introducing new chapters.
5. 'split' for comparison or balanced data.
6. 'image' for visual emphasis.
7. 'quote' for key insights.
8. 'highlight' for punchy 3-5 word statements.
9. 'content' for standard lists.
10. 'closing' for the final slide."#
    )
}

pub fn outline_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "slideType": { "type": "STRING", "enum": slide_type_enum() }
            },
            "required": ["id", "title", "description", "slideType"]
        }
    })
}

pub fn content_prompt(outline: &[OutlineItem], tone: &str, language: &str) -> String {
    let outline_json = serde_json::to_string(outline).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"Transform this outline into slide content: {outline_json}.
Tone: {tone}, Language: {language}.
Provide:
- Title: High-impact header.
- Points: 3-5 concise bullets.
  - For 'agenda' slides: Points MUST be formatted as "Time: Description" (e.g., "09:00: Introduction").
  - For 'section' slides: First point is a summary paragraph.
- imagePrompt: A professional, minimalistic prompt. For 'agenda', suggest an illustration of a calendar or clock."#
    )
}

pub fn content_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "points": { "type": "ARRAY", "items": { "type": "STRING" } },
                "type": { "type": "STRING", "enum": slide_type_enum() },
                "imagePrompt": { "type": "STRING" }
            },
            "required": ["id", "title", "points", "type", "imagePrompt"]
        }
    })
}

pub fn image_prompt(prompt: &str) -> String {
    format!(
        "Professional vector illustration or 3D render for presentation: {prompt}. Flat design, corporate colors, clean lines, minimalist background."
    )
}
