//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod deck_store;
pub mod shuffler;

pub use deck_store::DeckStore;
pub use shuffler::Shuffler;
