pub mod gamma;
pub mod outline;
pub mod presentation;
pub mod slide;
pub mod store;
pub mod theme;
pub mod validate;
pub mod wizard;

pub use outline::{OutlineEdit, OutlineItem};
pub use presentation::Presentation;
pub use slide::{SlideContent, SlideLayout, SlideType};
pub use store::DeckStore;
pub use theme::ThemeConfig;
pub use wizard::{AppStep, Deck, DeckRequest, WizardError};
