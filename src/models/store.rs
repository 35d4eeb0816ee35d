use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use super::wizard::Deck;

/// In-memory wizard state, keyed by the deck id stored in the session cookie.
#[derive(Clone, Default)]
pub struct DeckStore {
    decks: Arc<Mutex<HashMap<String, Deck>>>,
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck and return its id.
    pub fn create(&self) -> String {
        let id = generate_id();
        let mut map = self.decks.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(id.clone(), Deck::new());
        id
    }

    /// Snapshot a deck. Reading counts as activity for eviction.
    pub fn get(&self, id: &str) -> Option<Deck> {
        let mut map = self.decks.lock().unwrap_or_else(|e| e.into_inner());
        let deck = map.get_mut(id)?;
        deck.touched_at = Utc::now();
        Some(deck.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        let map = self.decks.lock().unwrap_or_else(|e| e.into_inner());
        map.contains_key(id)
    }

    /// Mutate a deck in place and bump its last-touched time.
    /// Returns None when the deck does not exist.
    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut Deck) -> R) -> Option<R> {
        let mut map = self.decks.lock().unwrap_or_else(|e| e.into_inner());
        let deck = map.get_mut(id)?;
        deck.touched_at = Utc::now();
        Some(f(deck))
    }

    pub fn len(&self) -> usize {
        self.decks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop decks not touched since `now - ttl`. Returns how many were dropped.
    pub fn evict_idle(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> usize {
        let cutoff = now - ttl;
        let mut map = self.decks.lock().unwrap_or_else(|e| e.into_inner());
        let before = map.len();
        map.retain(|_, deck| deck.touched_at > cutoff);
        before - map.len()
    }
}

/// Random 16-byte hex id for decks and presentations.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}

/// Periodically evict idle decks so abandoned sessions do not pin memory.
pub fn spawn_eviction(store: DeckStore, every: Duration, ttl: chrono::Duration) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let dropped = store.evict_idle(Utc::now(), ttl);
            if dropped > 0 {
                log::info!("Evicted {dropped} idle deck(s), {} remaining", store.len());
            }
        }
    });
}
