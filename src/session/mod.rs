//! Browser session helpers. The cookie only carries the deck id, the CSRF
//! token and a one-shot flash message; deck contents live in [`DeckStore`].

pub mod csrf;

use actix_session::Session;

use crate::errors::AppError;
use crate::models::{Deck, DeckStore};

const DECK_KEY: &str = "deck_id";
const FLASH_KEY: &str = "flash";

pub fn get_deck_id(session: &Session) -> Option<String> {
    session.get::<String>(DECK_KEY).unwrap_or(None)
}

/// Return the session's deck id, creating a deck when the session has none
/// or its deck was evicted.
pub fn ensure_deck(session: &Session, store: &DeckStore) -> Result<String, AppError> {
    if let Some(id) = get_deck_id(session)
        && store.contains(&id)
    {
        return Ok(id);
    }
    let id = store.create();
    session
        .insert(DECK_KEY, &id)
        .map_err(|e| AppError::Session(format!("Failed to store deck id: {e}")))?;
    log::debug!("Created deck {id}");
    Ok(id)
}

/// The session's deck id and a snapshot of its state.
pub fn current_deck(session: &Session, store: &DeckStore) -> Result<(String, Deck), AppError> {
    let id = ensure_deck(session, store)?;
    let deck = store.get(&id).unwrap_or_default();
    Ok((id, deck))
}

pub fn set_flash(session: &Session, message: impl Into<String>) {
    if let Err(e) = session.insert(FLASH_KEY, message.into()) {
        log::warn!("Failed to store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
