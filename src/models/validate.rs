use super::theme;

pub const MIN_SLIDES: u32 = 3;
pub const MAX_SLIDES: u32 = 20;
pub const MAX_TOPIC_LEN: usize = 500;
pub const MAX_OUTLINE_TITLE_LEN: usize = 200;
pub const MAX_LOGO_URL_LEN: usize = 2048;

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

pub fn validate_topic(topic: &str) -> Option<String> {
    validate_required(topic, "Topic", MAX_TOPIC_LEN)
}

/// Parse and range-check the requested slide count.
pub fn parse_slide_count(raw: &str) -> Result<u32, String> {
    let count: u32 = raw
        .trim()
        .parse()
        .map_err(|_| "Slide count must be a whole number".to_string())?;
    if !(MIN_SLIDES..=MAX_SLIDES).contains(&count) {
        return Err(format!("Slide count must be between {MIN_SLIDES} and {MAX_SLIDES}"));
    }
    Ok(count)
}

pub fn validate_tone(tone: &str) -> Option<String> {
    if theme::is_known_tone(tone) {
        None
    } else {
        Some(format!("Unknown tone: {tone}"))
    }
}

pub fn validate_language(language: &str) -> Option<String> {
    if theme::is_known_language(language) {
        None
    } else {
        Some(format!("Unknown language: {language}"))
    }
}

/// Logo URLs are optional; when given they must be http(s) or an inline image.
pub fn validate_logo_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() > MAX_LOGO_URL_LEN {
        return Some(format!("Logo URL must be at most {MAX_LOGO_URL_LEN} characters"));
    }
    let allowed = ["http://", "https://", "data:image/"];
    if !allowed.iter().any(|prefix| trimmed.starts_with(prefix)) {
        return Some("Logo URL must start with http://, https:// or data:image/".to_string());
    }
    None
}

pub fn validate_outline_title(title: &str, position: usize) -> Option<String> {
    validate_required(title, &format!("Slide {position} title"), MAX_OUTLINE_TITLE_LEN)
}
