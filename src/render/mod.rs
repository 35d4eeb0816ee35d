//! Slide layout: a pure mapping from slide content and theme to a
//! [`SlideView`] ready for the `partials/slide.html` template.

pub mod brand;
pub mod text;
pub mod view;

use crate::models::{SlideContent, SlideLayout, SlideType, ThemeConfig};
use self::brand::{BRAND_NAME, BRAND_TAGLINE, brand_mark_svg};
use self::text::{
    DEFAULT_TITLE_THRESHOLD, dynamic_title_size, slide_number_label, split_agenda_point,
    split_first_sentence, split_highlight, title_words,
};
pub use self::view::*;

const TITLE_FALLBACK_SUBTITLE: &str = "Strategic Presentation Architecture";
const AGENDA_FALLBACK_HEADING: &str = "Agenda";
const SECTION_FALLBACK_BODY: &str =
    "Exploring the core components and strategic vision of this initiative.";
const SPLIT_MAX_POINTS: usize = 5;
const CONTENT_MAX_POINTS: usize = 4;
const SPLIT_INDENT_STEP: usize = 16;
const SPLIT_INDENT_MAX: usize = 48;
const GRID_ROWS: [u8; 4] = [0, 25, 50, 75];

/// Where a slide sits in the deck and how it is being shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideFrame {
    pub index: usize,
    pub is_active: bool,
    pub logo_url: Option<String>,
}

impl SlideFrame {
    pub fn new(index: usize, is_active: bool, logo_url: Option<String>) -> Self {
        Self { index, is_active, logo_url }
    }
}

pub fn render_slide(slide: &SlideContent, theme: &ThemeConfig, frame: &SlideFrame) -> SlideView {
    let s = theme.styles;
    let visibility = if frame.is_active {
        "scale-100 opacity-100"
    } else {
        "scale-95 opacity-0"
    };
    let container_class = format!(
        "relative w-full aspect-video {} {} p-12 md:p-20 shadow-2xl transition-all duration-500 overflow-hidden {} {}",
        s.background, s.text, s.body_font, visibility
    );

    SlideView {
        id: slide.id.clone(),
        index: frame.index,
        archetype: slide.slide_type,
        is_active: frame.is_active,
        container_class,
        chrome: render_chrome(slide, theme, frame),
        body: render_body(slide, theme, frame),
    }
}

fn render_chrome(slide: &SlideContent, theme: &ThemeConfig, frame: &SlideFrame) -> Chrome {
    let bookend = slide.slide_type.is_bookend();
    let s = theme.styles;

    let badge = if bookend {
        None
    } else {
        Some(match &frame.logo_url {
            Some(url) => Badge::Logo(url.clone()),
            None => Badge::Mark(BrandMark {
                svg: brand_mark_svg("white", 24),
                background_hex: s.accent_hex.to_string(),
            }),
        })
    };

    if theme.decor {
        let (counter, brand_tile) = if bookend {
            (None, None)
        } else {
            let counter = format!("SLIDE {}", slide_number_label(frame.index));
            let tile = frame
                .logo_url
                .is_none()
                .then(|| brand_mark_svg("white", 40));
            (Some(counter), tile)
        };
        Chrome {
            badge,
            decor: Some(Decor {
                grid_rows: GRID_ROWS.to_vec(),
                counter,
                brand_tile,
                primary_hex: s.primary_hex.to_string(),
            }),
            corner: None,
        }
    } else {
        Chrome {
            badge,
            decor: None,
            corner: Some(Corner {
                accent_class: s.accent.to_string(),
                label: format!("{} • {}", theme.name.to_uppercase(), frame.index + 1),
            }),
        }
    }
}

fn render_body(slide: &SlideContent, theme: &ThemeConfig, frame: &SlideFrame) -> SlideBody {
    let s = theme.styles;
    let layout = slide.layout();
    let reversed = layout == SlideLayout::Inverted;
    let centered = layout == SlideLayout::Centered;
    let title = slide.title.trim();

    match slide.slide_type {
        SlideType::Title => {
            let size = dynamic_title_size(
                title,
                "text-6xl md:text-8xl lg:text-[90px]",
                "text-5xl md:text-6xl lg:text-7xl",
                DEFAULT_TITLE_THRESHOLD,
            );
            let align = if centered { "items-center text-center" } else { "items-start" };
            SlideBody::Title(TitleView {
                title: title.to_string(),
                title_class: format!(
                    "{} {size} max-w-5xl leading-[0.9] {} break-words",
                    s.title_font, s.text
                ),
                subtitle: slide
                    .first_point()
                    .unwrap_or(TITLE_FALLBACK_SUBTITLE)
                    .to_string(),
                subtitle_class: format!(
                    "{} text-lg md:text-2xl font-medium opacity-60 max-w-2xl",
                    s.body_font
                ),
                logo_url: frame.logo_url.clone(),
                wrapper_class: format!(
                    "flex flex-col h-full justify-center {align} pl-12 md:pl-24 space-y-8 pr-12"
                ),
            })
        }

        SlideType::Agenda => SlideBody::Agenda(AgendaView {
            heading: if title.is_empty() {
                AGENDA_FALLBACK_HEADING.to_string()
            } else {
                title.to_string()
            },
            heading_class: format!("{} text-5xl md:text-6xl tracking-tight", s.title_font),
            schedule_label: "Schedule".to_string(),
            schedule_class: format!(
                "{} text-xl md:text-2xl {} uppercase tracking-widest",
                s.title_font, s.accent
            ),
            logo_url: frame.logo_url.clone(),
            entries: slide
                .points
                .iter()
                .map(|p| {
                    let (time, description) = split_agenda_point(p);
                    AgendaEntry { time, description }
                })
                .collect(),
            image_url: slide.image_url.clone(),
            image_alt: "Agenda visual".to_string(),
            placeholder_svg: brand_mark_svg("white", 64),
            reversed,
        }),

        SlideType::Section => {
            let size = dynamic_title_size(
                title,
                "text-5xl md:text-7xl lg:text-8xl",
                "text-4xl md:text-5xl lg:text-6xl",
                15,
            );
            let (lead, body) = match slide.first_point() {
                Some(paragraph) => {
                    let (lead, rest) = split_first_sentence(paragraph);
                    (Some(lead), rest)
                }
                None => (None, None),
            };
            SlideBody::Section(SectionView {
                words: title_words(title),
                title_class: format!(
                    "{} {size} leading-[0.9] tracking-tighter break-words max-w-full",
                    s.title_font
                ),
                lead,
                lead_class: format!(
                    "{} text-xl md:text-3xl font-bold opacity-90 leading-tight",
                    s.body_font
                ),
                body: body.unwrap_or_else(|| SECTION_FALLBACK_BODY.to_string()),
                body_class: format!(
                    "{} text-lg md:text-xl font-medium opacity-50 leading-relaxed",
                    s.body_font
                ),
                reversed,
            })
        }

        SlideType::Highlight => {
            let (highlight, rest) = split_highlight(title);
            let align = if centered { "items-center text-center" } else { "items-start" };
            SlideBody::Highlight(HighlightView {
                highlight,
                rest,
                title_class: format!(
                    "{} text-5xl md:text-7xl lg:text-[100px] leading-[1.1]",
                    s.title_font
                ),
                highlight_style: format!("background-color: #ffffff; color: {};", s.primary_hex),
                subtitle: slide.first_point().map(str::to_string),
                wrapper_class: format!(
                    "flex flex-col h-full justify-center {align} pl-12 md:pl-24 pr-12"
                ),
            })
        }

        SlideType::Quote => {
            let size = dynamic_title_size(
                title,
                "text-4xl md:text-6xl lg:text-7xl",
                "text-2xl md:text-4xl lg:text-5xl",
                80,
            );
            SlideBody::Quote(QuoteView {
                quote: title.to_string(),
                quote_class: format!(
                    "{} {size} leading-[1.1] italic tracking-tight",
                    s.title_font
                ),
                attribution: slide
                    .first_point()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} Insight", theme.name)),
                attribution_class: format!(
                    "{} text-xl md:text-3xl font-bold opacity-60 tracking-widest uppercase",
                    s.body_font
                ),
                accent_hex: s.accent_hex.to_string(),
            })
        }

        SlideType::Split => {
            let size = dynamic_title_size(
                title,
                "text-4xl md:text-6xl lg:text-7xl",
                "text-3xl md:text-4xl lg:text-5xl",
                20,
            );
            SlideBody::Split(SplitView {
                title: title.to_string(),
                title_class: format!(
                    "{} {size} text-white leading-[0.95] tracking-tighter break-words",
                    s.title_font
                ),
                insight_label: "Strategic Insight".to_string(),
                takeaways_label: "Key Takeaways".to_string(),
                takeaways_class: format!(
                    "{} text-xl md:text-2xl opacity-40 uppercase tracking-[0.2em] font-black",
                    s.title_font
                ),
                takeaways: slide
                    .points
                    .iter()
                    .take(SPLIT_MAX_POINTS)
                    .enumerate()
                    .map(|(i, p)| Takeaway {
                        text: p.clone(),
                        indent_px: (i * SPLIT_INDENT_STEP).min(SPLIT_INDENT_MAX),
                        filled: i % 2 == 0,
                    })
                    .collect(),
                primary_hex: s.primary_hex.to_string(),
                accent_hex: s.accent_hex.to_string(),
                reversed,
            })
        }

        SlideType::Image => SlideBody::Image(ImageView {
            title: title.to_string(),
            title_class: format!(
                "{} {} text-white drop-shadow-2xl leading-[0.85] break-words",
                s.title_font,
                dynamic_title_size(
                    title,
                    "text-5xl md:text-8xl",
                    "text-4xl md:text-6xl",
                    DEFAULT_TITLE_THRESHOLD
                )
            ),
            image_url: slide.image_url.clone(),
            primary_hex: s.primary_hex.to_string(),
        }),

        SlideType::Content => SlideBody::Content(ContentView {
            title: title.to_string(),
            title_class: format!(
                "{} {} {} uppercase leading-tight",
                s.title_font,
                dynamic_title_size(
                    title,
                    "text-4xl md:text-6xl",
                    "text-3xl md:text-5xl",
                    DEFAULT_TITLE_THRESHOLD
                ),
                s.accent
            ),
            points: slide.points.iter().take(CONTENT_MAX_POINTS).cloned().collect(),
            point_class: format!(
                "{} text-lg md:text-2xl opacity-90 font-medium leading-snug",
                s.body_font
            ),
            image_url: slide.image_url.clone(),
            reversed,
        }),

        SlideType::Closing => {
            let (headline, tagline) = if frame.logo_url.is_some() {
                ("Thank You", "For Your Attention")
            } else {
                (BRAND_NAME, BRAND_TAGLINE)
            };
            SlideBody::Closing(ClosingView {
                logo_url: frame.logo_url.clone(),
                mark_svg: brand_mark_svg("white", 120),
                headline: headline.to_string(),
                tagline: tagline.to_string(),
            })
        }
    }
}
