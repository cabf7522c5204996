//! Deck store port
//!
//! Persistence contract for decks. Implementations are provided by adapters
//! (the in-memory store is the reference implementation).

use async_trait::async_trait;

use crate::domain::entities::{Deck, DeckId};
use crate::error::DomainError;

/// Repository for Deck entities
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Save a deck
    ///
    /// Saves are versioned: the write only succeeds when the stored deck is
    /// still at `deck.version()` (or absent, for a brand new deck at version
    /// 0). Otherwise `DomainError::VersionConflict` is returned and nothing
    /// is written.
    async fn save(&self, deck: &Deck) -> Result<(), DomainError>;

    /// Get a deck by ID, failing with `DomainError::DeckNotFound`
    async fn get(&self, id: &DeckId) -> Result<Deck, DomainError>;
}
