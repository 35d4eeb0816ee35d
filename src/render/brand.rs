pub const BRAND_NAME: &str = "deckgen";
pub const BRAND_TAGLINE: &str = "Built with Gemini";

/// Inline SVG for the brand mark.
pub fn brand_mark_svg(color: &str, size: u32) -> String {
    format!(
        r#"<svg width="{size}" height="{size}" viewBox="0 0 100 100" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M20 25C20 20 25 15 50 15C75 15 80 20 80 25V35C80 40 75 45 50 45C25 45 20 40 20 35V25Z" fill="{color}" fill-opacity="0.8"/><path d="M35 45V75C35 80 40 85 50 85C60 85 65 80 65 75V45H35Z" fill="{color}"/></svg>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_uses_size_and_color() {
        let svg = brand_mark_svg("white", 64);
        assert!(svg.starts_with("<svg width=\"64\" height=\"64\""));
        assert_eq!(svg.matches("fill=\"white\"").count(), 2);
    }
}
