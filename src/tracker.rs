//! A delegate that narrates the game as text.

use core::fmt::{self, Write};

use crate::card::Card;
use crate::game::{CardGame, CardGameDelegate};
use crate::result::{RoundOutcome, RoundResult};

/// Writes a line per game event to a text sink.
///
/// Any [`fmt::Write`] works as the sink: a `String` collects the lines, and
/// [`Stdout`] prints them.
///
/// ```
/// use highlow::{Card, CardGameDelegate, CardGameTracker, Rank, Suit};
///
/// let mut tracker = CardGameTracker::new(String::new());
/// tracker.game_did_draw(
///     Card::new(Rank::Two, Suit::Diamonds),
///     Card::new(Rank::Ace, Suit::Diamonds),
/// );
/// assert_eq!(
///     tracker.into_inner(),
///     "Player 1 drew a 2 of diamonds, player 2 drew a Ace of diamonds\n\
///      Player 1 wins with 2 of diamonds\n",
/// );
/// ```
#[derive(Debug, Default)]
pub struct CardGameTracker<W> {
    out: W,
}

impl<W: Write> CardGameTracker<W> {
    /// Creates a tracker writing to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the sink.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Consumes the tracker and returns the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn announce(&mut self, args: fmt::Arguments<'_>) {
        // Notifications cannot fail, so a broken sink only loses the line.
        let _ = self.out.write_fmt(args);
        let _ = self.out.write_char('\n');
    }
}

#[cfg(feature = "std")]
impl CardGameTracker<Stdout> {
    /// Creates a tracker printing to standard output.
    #[must_use]
    pub const fn stdout() -> Self {
        Self::new(Stdout)
    }
}

impl<W: Write> CardGameDelegate for CardGameTracker<W> {
    fn game_did_start(&mut self, _game: &dyn CardGame) {
        self.announce(format_args!("Started a new game of High Low"));
    }

    fn game_did_draw(&mut self, player1: Card, player2: Card) {
        self.announce(format_args!("Player 1 drew a {player1}, player 2 drew a {player2}"));

        let result = RoundResult::new(player1, player2);
        let card = result.winning_card();
        match result.outcome {
            RoundOutcome::Tie => self.announce(format_args!("Round ends in a tie with {card}")),
            RoundOutcome::Player1Wins => self.announce(format_args!("Player 1 wins with {card}")),
            RoundOutcome::Player2Wins => self.announce(format_args!("Player 2 wins with {card}")),
        }
    }
}

/// A [`fmt::Write`] sink for standard output.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

#[cfg(feature = "std")]
impl Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        use std::io::Write as _;

        std::io::stdout().write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
