//! Game notification traits.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::PlayError;
use crate::result::RoundResult;

/// A card game played from a single deck.
pub trait CardGame {
    /// Returns the deck the game draws from.
    fn deck(&self) -> &Deck;

    /// Plays one round.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot supply the round.
    fn play(&mut self) -> Result<RoundResult, PlayError>;
}

/// Receives notifications from a [`CardGame`].
///
/// Notifications are delivered synchronously. Implementors only get shared
/// access to the game and copies of the drawn cards.
pub trait CardGameDelegate {
    /// Called when the game starts.
    fn game_did_start(&mut self, game: &dyn CardGame);

    /// Called once per round with the card each player drew.
    fn game_did_draw(&mut self, player1: Card, player2: Card);
}
