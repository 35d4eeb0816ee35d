use serde::Serialize;

pub const DEFAULT_THEME_ID: &str = "fearless";

pub const TONES: [&str; 5] = ["Professional", "Creative", "Casual", "Academic", "Sales Pitch"];
pub const LANGUAGES: [&str; 6] = ["English", "Spanish", "French", "German", "Chinese", "Japanese"];

/// CSS class tokens (Tailwind utility classes) plus the two raw colours the
/// layouts need for inline accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyles {
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub card: &'static str,
    pub title_font: &'static str,
    pub body_font: &'static str,
    pub primary_hex: &'static str,
    pub accent_hex: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub preview_color: &'static str,
    /// Draws the grid overlay and vertical slide counter.
    pub decor: bool,
    pub styles: ThemeStyles,
}

pub static THEMES: [ThemeConfig; 3] = [
    ThemeConfig {
        id: "fearless",
        name: "Fearless",
        preview_color: "#5C3977",
        decor: true,
        styles: ThemeStyles {
            background: "bg-[#5C3977]",
            text: "text-white",
            accent: "text-[#EE5340]",
            card: "bg-white/10 backdrop-blur-sm",
            title_font: "font-montserrat font-extrabold tracking-tighter",
            body_font: "font-montserrat",
            primary_hex: "#5C3977",
            accent_hex: "#EE5340",
        },
    },
    ThemeConfig {
        id: "midnight",
        name: "Midnight",
        preview_color: "#0F172A",
        decor: false,
        styles: ThemeStyles {
            background: "bg-[#0F172A]",
            text: "text-slate-100",
            accent: "text-[#38BDF8]",
            card: "bg-slate-800/60 backdrop-blur-sm",
            title_font: "font-montserrat font-bold tracking-tight",
            body_font: "font-montserrat",
            primary_hex: "#0F172A",
            accent_hex: "#38BDF8",
        },
    },
    ThemeConfig {
        id: "paper",
        name: "Paper",
        preview_color: "#F5F0E6",
        decor: false,
        styles: ThemeStyles {
            background: "bg-[#F5F0E6]",
            text: "text-[#2C1810]",
            accent: "text-[#B4472F]",
            card: "bg-white/70",
            title_font: "font-serif font-bold tracking-tight",
            body_font: "font-serif",
            primary_hex: "#2C1810",
            accent_hex: "#B4472F",
        },
    },
];

pub fn find(id: &str) -> Option<&'static ThemeConfig> {
    THEMES.iter().find(|t| t.id == id)
}

/// Look up a theme, falling back to the default when the id is unknown.
pub fn find_or_default(id: &str) -> &'static ThemeConfig {
    find(id).unwrap_or(&THEMES[0])
}

pub fn is_known_tone(tone: &str) -> bool {
    TONES.contains(&tone)
}

pub fn is_known_language(language: &str) -> bool {
    LANGUAGES.contains(&language)
}
