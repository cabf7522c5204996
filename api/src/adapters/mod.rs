//! Adapters layer
//!
//! Implementations of port traits.

pub mod memory;
pub mod shuffle;

pub use memory::InMemoryDeckStore;
pub use shuffle::ThreadRngShuffler;
