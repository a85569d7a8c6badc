//! A 52-card deck with seeded random draws.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, DrawError};

/// A deck of cards.
///
/// The deck only shrinks: every [`Deck::draw`] removes a uniformly random
/// card and nothing is ever put back.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left in the deck.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck of 52 unique cards with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use highlow::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Self::create_cards(), seed)
    }

    /// Creates a deck holding exactly `cards`, drawn with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TooManyCards`] for more than [`DECK_SIZE`] cards
    /// and [`DeckError::DuplicateCard`] if any card appears twice.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Result<Self, DeckError> {
        if cards.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards(cards.len()));
        }

        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self::with_rng(cards, seed))
    }

    fn with_rng(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds every rank and suit pairing, rank outer and suit inner.
    fn create_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Removes and returns a random card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = self.rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards left, in construction order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn new_deck_holds_each_card_once() {
        let deck = Deck::new(1);
        assert_eq!(deck.len(), DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let card = Card::new(rank, suit);
                let count = deck.cards().iter().filter(|&&c| c == card).count();
                assert_eq!(count, 1, "{card} should appear once");
            }
        }
    }

    #[test]
    fn construction_order_is_rank_then_suit() {
        let deck = Deck::new(1);
        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck.cards()[3], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck.cards()[4], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn draw_removes_the_card() {
        let mut deck = Deck::new(3);
        let card = deck.draw().unwrap();
        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert!(!deck.contains(&card));
    }

    #[test]
    fn draw_uses_half_open_index_range() {
        let seed = 11;
        let mut deck = Deck::new(seed);
        let mut expected = Deck::create_cards();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        while !expected.is_empty() {
            let index = rng.random_range(0..expected.len());
            assert_eq!(deck.draw(), Ok(expected.remove(index)));
        }
        assert!(deck.is_empty());
    }

    #[test]
    fn empty_deck_reports_error() {
        let mut deck = Deck::from_cards(vec![Card::new(Rank::Nine, Suit::Spades)], 5).unwrap();
        assert_eq!(deck.draw(), Ok(Card::new(Rank::Nine, Suit::Spades)));
        assert_eq!(deck.draw(), Err(DrawError::EmptyDeck));
        assert_eq!(deck.draw(), Err(DrawError::EmptyDeck));
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn from_cards_rejects_duplicates() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        let two = Card::new(Rank::Two, Suit::Spades);

        assert_eq!(
            Deck::from_cards(vec![ace, two, ace], 0).unwrap_err(),
            DeckError::DuplicateCard(ace)
        );
    }

    #[test]
    fn from_cards_rejects_oversized_list() {
        let mut cards = Deck::create_cards();
        cards.extend(Deck::create_cards());
        cards.truncate(60);

        assert_eq!(
            Deck::from_cards(cards, 0).unwrap_err(),
            DeckError::TooManyCards(60)
        );
    }

    #[test]
    fn from_cards_accepts_full_and_partial_decks() {
        let full = Deck::from_cards(Deck::create_cards(), 0).unwrap();
        assert_eq!(full.len(), DECK_SIZE);

        let empty = Deck::from_cards(Vec::new(), 0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn same_seed_draws_same_sequence() {
        let mut a = Deck::new(99);
        let mut b = Deck::new(99);
        for _ in 0..DECK_SIZE {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
