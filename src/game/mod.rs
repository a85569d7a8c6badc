//! Game engine.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::PlayError;
use crate::result::RoundResult;

mod delegate;

pub use delegate::{CardGame, CardGameDelegate};

/// A game of High Low.
///
/// Each call to [`HighLow::play`] draws one card for player 1, then one for
/// player 2, and the higher rank wins. The game owns its deck and borrows an
/// optional delegate that is told about each round.
///
/// The delegate hears about the start of the game exactly once, before the
/// first round is reported.
pub struct HighLow<'a> {
    /// Cards left to draw from.
    deck: Deck,
    /// Whether the start notification has been sent.
    started: bool,
    /// Observer notified of game events.
    delegate: Option<&'a mut dyn CardGameDelegate>,
}

impl<'a> HighLow<'a> {
    /// Creates a new game with a full deck and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use highlow::HighLow;
    ///
    /// let mut game = HighLow::new(42);
    /// let result = game.play().unwrap();
    /// assert_ne!(result.player1, result.player2);
    /// assert_eq!(game.cards_remaining(), 50);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::new(seed))
    }

    /// Creates a new game drawing from `deck`.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            started: false,
            delegate: None,
        }
    }

    /// Attaches a delegate, replacing any previous one.
    pub fn set_delegate(&mut self, delegate: &'a mut dyn CardGameDelegate) {
        self.delegate = Some(delegate);
    }

    /// Detaches the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Returns whether a delegate is attached.
    #[must_use]
    pub const fn delegate_attached(&self) -> bool {
        self.delegate.is_some()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the game has started.
    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }

    /// Starts the game, notifying the delegate.
    ///
    /// Only the first call has an effect. [`HighLow::play`] starts the game
    /// itself if this was never called, so a start notification is never
    /// sent after a round. Starting without a delegate attached sends no
    /// notification at all.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        if let Some(delegate) = self.delegate.take() {
            delegate.game_did_start(&*self);
            self.delegate = Some(delegate);
        }
    }

    /// Draws both cards, player 1 first.
    fn draw_pair(&mut self) -> Result<(Card, Card), PlayError> {
        let player1 = self.deck.draw()?;
        let player2 = self.deck.draw()?;
        Ok((player1, player2))
    }

    /// Plays one round.
    ///
    /// Two cards are drawn whether or not a delegate is attached. The
    /// delegate, if any, receives both cards once.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NotEnoughCards`] if fewer than two cards remain.
    /// Nothing is drawn in that case.
    pub fn play(&mut self) -> Result<RoundResult, PlayError> {
        if self.deck.len() < 2 {
            return Err(PlayError::NotEnoughCards);
        }

        self.start();
        let (player1, player2) = self.draw_pair()?;

        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.game_did_draw(player1, player2);
        }

        Ok(RoundResult::new(player1, player2))
    }
}

impl CardGame for HighLow<'_> {
    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn play(&mut self) -> Result<RoundResult, PlayError> {
        Self::play(self)
    }
}
