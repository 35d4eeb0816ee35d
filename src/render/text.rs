//! Small text transforms used by the slide layouts.

pub const DEFAULT_TITLE_THRESHOLD: usize = 30;

/// Pick the smaller font class once the text outgrows `max_len` characters.
pub fn dynamic_title_size<'a>(text: &str, base: &'a str, long: &'a str, max_len: usize) -> &'a str {
    if text.chars().count() > max_len { long } else { base }
}

/// Split an agenda bullet such as `"09:00: Introduction"` into its time and
/// description. Splits on the first `": "`, then on the first `:`; a bullet
/// with no colon is all time.
pub fn split_agenda_point(point: &str) -> (String, String) {
    let split_at = point
        .find(": ")
        .or_else(|| point.find(':'));
    match split_at {
        Some(pos) => {
            let time = point[..pos].trim().to_string();
            let description = point[pos + 1..].trim().to_string();
            (time, description)
        }
        None => (point.trim().to_string(), String::new()),
    }
}

/// Split a paragraph into its first sentence (terminated with a period) and
/// whatever follows.
pub fn split_first_sentence(paragraph: &str) -> (String, Option<String>) {
    let paragraph = paragraph.trim();
    let (lead, rest) = match paragraph.split_once(". ") {
        Some((lead, rest)) => (lead.trim(), rest.trim()),
        None => (paragraph, ""),
    };
    let mut lead = lead.to_string();
    if !lead.is_empty() && !lead.ends_with(['.', '!', '?']) {
        lead.push('.');
    }
    let rest = if rest.is_empty() { None } else { Some(rest.to_string()) };
    (lead, rest)
}

/// First word of a title and the remainder.
pub fn split_highlight(title: &str) -> (String, String) {
    let mut words = title.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let rest = words.collect::<Vec<_>>().join(" ");
    (first, rest)
}

pub fn title_words(title: &str) -> Vec<String> {
    title.split_whitespace().map(str::to_string).collect()
}

/// Two-digit, 1-based slide number for a zero-based index.
pub fn slide_number_label(index: usize) -> String {
    format!("{:02}", index + 1)
}
