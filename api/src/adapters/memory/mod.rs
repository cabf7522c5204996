//! In-memory adapters

mod deck_store;

pub use deck_store::InMemoryDeckStore;
