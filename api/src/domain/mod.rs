//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Cards, decks and the card code
//! - `ports`: Trait definitions for persistence and shuffling

pub mod entities;
pub mod ports;
