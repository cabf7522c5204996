//! Domain entities
//!
//! Pure domain models for cards and decks.

pub mod card;
pub mod deck;

pub use card::{complete_deck, Card};
pub use deck::{Deck, DeckId};
