//! Round result types.

use core::cmp::Ordering;

use crate::card::Card;

/// Outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Both cards have the same rank.
    Tie,
    /// Player 1 drew the higher rank.
    Player1Wins,
    /// Player 2 drew the higher rank.
    Player2Wins,
}

/// The two cards drawn in a round and who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Player 1's card.
    pub player1: Card,
    /// Player 2's card.
    pub player2: Card,
    /// The outcome, decided by rank only.
    pub outcome: RoundOutcome,
}

impl RoundResult {
    /// Compares the two cards by rank and records the outcome.
    #[must_use]
    pub fn new(player1: Card, player2: Card) -> Self {
        let outcome = match player1.compare_rank(&player2) {
            Ordering::Equal => RoundOutcome::Tie,
            Ordering::Greater => RoundOutcome::Player1Wins,
            Ordering::Less => RoundOutcome::Player2Wins,
        };

        Self {
            player1,
            player2,
            outcome,
        }
    }

    /// Returns the card the outcome is announced with.
    ///
    /// A tie is announced with player 1's card.
    #[must_use]
    pub const fn winning_card(&self) -> Card {
        match self.outcome {
            RoundOutcome::Tie | RoundOutcome::Player1Wins => self.player1,
            RoundOutcome::Player2Wins => self.player2,
        }
    }
}
