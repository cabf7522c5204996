//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod decks;

pub use decks::{create_deck, draw_cards, open_deck};
