//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod deck_service;

pub use deck_service::{
    CreateDeckOutput, DeckCreationOptions, DeckService, DrawCardsOutput, OpenDeckOutput,
    DEFAULT_MAX_DRAW_ATTEMPTS,
};
