//! In-memory adapter for DeckStore

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{Deck, DeckId};
use crate::domain::ports::DeckStore;
use crate::error::DomainError;

/// In-memory implementation of DeckStore
///
/// Decks live for the lifetime of the process unless a TTL is set, in which
/// case decks older than the TTL read as missing and are dropped on the next
/// save.
#[derive(Default)]
pub struct InMemoryDeckStore {
    decks: RwLock<HashMap<DeckId, Deck>>,
    ttl: Option<Duration>,
}

impl InMemoryDeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire decks `ttl` after their creation
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    fn is_expired(&self, deck: &Deck) -> bool {
        self.ttl
            .map(|ttl| Utc::now() - deck.created_at() >= ttl)
            .unwrap_or(false)
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.decks.read().await.len()
    }
}

#[async_trait]
impl DeckStore for InMemoryDeckStore {
    async fn save(&self, deck: &Deck) -> Result<(), DomainError> {
        let mut decks = self.decks.write().await;

        if self.ttl.is_some() {
            let before = decks.len();
            decks.retain(|_, d| !self.is_expired(d));
            let pruned = before - decks.len();
            if pruned > 0 {
                tracing::debug!(pruned, "Pruned expired decks");
            }
        }

        match decks.get(&deck.id()) {
            Some(stored) if stored.version() != deck.version() => {
                return Err(DomainError::VersionConflict(deck.id()));
            }
            None if deck.version() != 0 => {
                return Err(DomainError::DeckNotFound(deck.id()));
            }
            _ => {}
        }

        let mut committed = deck.clone();
        committed.advance_version();
        decks.insert(committed.id(), committed);

        Ok(())
    }

    async fn get(&self, id: &DeckId) -> Result<Deck, DomainError> {
        let decks = self.decks.read().await;

        decks
            .get(id)
            .filter(|d| !self.is_expired(d))
            .cloned()
            .ok_or(DomainError::DeckNotFound(*id))
    }
}
