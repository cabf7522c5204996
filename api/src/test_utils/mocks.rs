//! Mock implementations of port traits
//!
//! Deterministic shufflers and a store wrapper that can be told to fail.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::adapters::InMemoryDeckStore;
use crate::domain::entities::{Card, Deck, DeckId};
use crate::domain::ports::{DeckStore, Shuffler};
use crate::error::DomainError;

// ============================================================================
// Shufflers
// ============================================================================

/// Leaves the cards in their original order
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&self, _cards: &mut [Card]) {}
}

/// Reverses the cards, so a shuffled deck is still predictable
#[derive(Debug, Default, Clone, Copy)]
pub struct ReverseShuffler;

impl Shuffler for ReverseShuffler {
    fn shuffle(&self, cards: &mut [Card]) {
        cards.reverse();
    }
}

// ============================================================================
// Mock Deck Store
// ============================================================================

/// In-memory deck store with injectable save failures
///
/// Clones share state, so a test can keep a handle after handing the store
/// to a service.
#[derive(Clone, Default)]
pub struct MockDeckStore {
    inner: Arc<InMemoryDeckStore>,
    fail_saves: Arc<AtomicBool>,
    pending_conflicts: Arc<AtomicUsize>,
    save_calls: Arc<AtomicUsize>,
}

impl MockDeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose saves always fail
    pub fn failing() -> Self {
        let store = Self::new();
        store.fail_saves();
        store
    }

    /// Make every following save fail with a persistence error
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// Make the next `count` saves fail with a version conflict
    pub fn conflict_next_saves(&self, count: usize) {
        self.pending_conflicts.store(count, Ordering::SeqCst);
    }

    /// Number of save calls seen so far
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeckStore for MockDeckStore {
    async fn save(&self, deck: &Deck) -> Result<(), DomainError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("mock save failure".to_string()));
        }

        let conflicted = self
            .pending_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if conflicted {
            return Err(DomainError::VersionConflict(deck.id()));
        }

        self.inner.save(deck).await
    }

    async fn get(&self, id: &DeckId) -> Result<Deck, DomainError> {
        self.inner.get(id).await
    }
}
