//! Shuffler port
//!
//! Source of randomness for shuffled decks. Production uses a thread-local
//! RNG; tests plug in deterministic orderings.

use crate::domain::entities::Card;

/// Permutes a sequence of cards in place
pub trait Shuffler: Send + Sync {
    fn shuffle(&self, cards: &mut [Card]);
}
