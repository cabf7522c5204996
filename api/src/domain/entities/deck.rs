//! Deck domain entity
//!
//! An identified, ordered sequence of cards. Cards are only ever removed
//! from the front (the top of the deck); a deck never grows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Card;
use crate::domain::ports::Shuffler;

/// Unique identifier for a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckId(pub Uuid);

impl DeckId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DeckId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A deck of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: DeckId,
    shuffled: bool,
    cards: Vec<Card>,
    version: u64,
    created_at: DateTime<Utc>,
}

impl Deck {
    /// Create a new deck from the given cards
    ///
    /// When `shuffled` is set the cards are permuted by `shuffler` before the
    /// deck is built. The card list is taken as is: it may be empty or hold
    /// duplicates.
    pub fn new<S>(shuffled: bool, mut cards: Vec<Card>, shuffler: &S) -> Self
    where
        S: Shuffler + ?Sized,
    {
        if shuffled {
            shuffler.shuffle(&mut cards);
        }

        Self {
            id: DeckId::new(),
            shuffled,
            cards,
            version: 0,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> DeckId {
        self.id
    }

    /// Whether the deck was shuffled when it was created
    pub fn shuffled(&self) -> bool {
        self.shuffled
    }

    /// Remaining cards, top of the deck first
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Number of committed saves of this deck
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Draw up to `amount` cards from the top of the deck
    ///
    /// Asking for more cards than remain draws everything; zero or a
    /// negative amount draws nothing.
    pub fn draw(&mut self, amount: i64) -> Vec<Card> {
        let amount = usize::try_from(amount).unwrap_or(0).min(self.cards.len());
        self.cards.drain(..amount).collect()
    }

    /// Record a committed save. Only stores call this.
    pub(crate) fn advance_version(&mut self) {
        self.version += 1;
    }
}
