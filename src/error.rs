//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck from a card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards than a full deck holds.
    #[error("a deck holds at most 52 cards, got {0}")]
    TooManyCards(usize),
    /// The same card appears twice.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Fewer than two cards remain, so both players cannot draw.
    #[error("not enough cards in the deck to play a round")]
    NotEnoughCards,
}

impl From<DrawError> for PlayError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::NotEnoughCards,
        }
    }
}
