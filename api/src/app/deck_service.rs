//! Deck service
//!
//! Handles deck creation, inspection and drawing.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{complete_deck, Card, Deck, DeckId};
use crate::domain::ports::{DeckStore, Shuffler};
use crate::error::{AppError, DeckOperation, DomainError};

/// Default number of get-draw-save rounds before a contended draw gives up
pub const DEFAULT_MAX_DRAW_ATTEMPTS: usize = 8;

/// Options for creating a deck
///
/// Unset fields fall back to a shuffled, complete 52-card deck. `cards`
/// replaces the default set entirely.
#[derive(Debug, Clone, Default)]
pub struct DeckCreationOptions {
    pub shuffled: Option<bool>,
    pub cards: Option<Vec<Card>>,
}

/// Result of creating a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDeckOutput {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
}

impl From<&Deck> for CreateDeckOutput {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
        }
    }
}

/// Result of opening a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenDeckOutput {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<Card>,
}

impl From<Deck> for OpenDeckOutput {
    fn from(deck: Deck) -> Self {
        Self {
            deck_id: deck.id(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
            cards: deck.cards().to_vec(),
        }
    }
}

/// Result of drawing cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawCardsOutput {
    pub cards: Vec<Card>,
}

/// Service for managing decks
pub struct DeckService<DS, SH>
where
    DS: DeckStore,
    SH: Shuffler,
{
    decks: Arc<DS>,
    shuffler: Arc<SH>,
    max_draw_attempts: usize,
}

impl<DS, SH> DeckService<DS, SH>
where
    DS: DeckStore,
    SH: Shuffler,
{
    pub fn new(decks: Arc<DS>, shuffler: Arc<SH>) -> Self {
        Self {
            decks,
            shuffler,
            max_draw_attempts: DEFAULT_MAX_DRAW_ATTEMPTS,
        }
    }

    /// Set how many times a draw is retried when another draw on the same
    /// deck commits first. Clamped to at least one attempt.
    pub fn with_max_draw_attempts(mut self, attempts: usize) -> Self {
        self.max_draw_attempts = attempts.max(1);
        self
    }

    /// Create and persist a new deck
    pub async fn create_deck(
        &self,
        options: DeckCreationOptions,
    ) -> Result<CreateDeckOutput, AppError> {
        let shuffled = options.shuffled.unwrap_or(true);
        let cards = options.cards.unwrap_or_else(complete_deck);

        let deck = Deck::new(shuffled, cards, &*self.shuffler);

        self.decks
            .save(&deck)
            .await
            .map_err(|e| AppError::deck(DeckOperation::Create, e))?;

        tracing::info!(
            deck_id = %deck.id(),
            shuffled,
            remaining = deck.remaining(),
            "Created deck"
        );

        Ok(CreateDeckOutput::from(&deck))
    }

    /// Open a deck, returning every remaining card
    pub async fn open_deck(&self, id: &DeckId) -> Result<OpenDeckOutput, AppError> {
        let deck = self
            .decks
            .get(id)
            .await
            .map_err(|e| AppError::deck(DeckOperation::Open, e))?;

        Ok(OpenDeckOutput::from(deck))
    }

    /// Draw up to `amount` cards from the top of a deck
    ///
    /// The whole read-draw-save round is repeated when the save loses a race
    /// with another draw on the same deck, so concurrent draws never hand out
    /// the same card twice.
    pub async fn draw_cards(&self, id: &DeckId, amount: i64) -> Result<DrawCardsOutput, AppError> {
        let mut attempt = 1;

        loop {
            let mut deck = self
                .decks
                .get(id)
                .await
                .map_err(|e| AppError::deck(DeckOperation::Draw, e))?;

            let drawn = deck.draw(amount);

            match self.decks.save(&deck).await {
                Ok(()) => {
                    tracing::debug!(
                        deck_id = %id,
                        drawn = drawn.len(),
                        remaining = deck.remaining(),
                        "Drew cards"
                    );
                    return Ok(DrawCardsOutput { cards: drawn });
                }
                Err(DomainError::VersionConflict(_)) if attempt < self.max_draw_attempts => {
                    tracing::warn!(deck_id = %id, attempt, "Concurrent draw on deck, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(AppError::deck(DeckOperation::Draw, e)),
            }
        }
    }
}
