//! A two-player High-Low card game engine with optional `no_std` support.
//!
//! The crate provides a [`HighLow`] type that draws one card per player from
//! a seeded 52-card [`Deck`] and declares the higher rank the winner. Aces
//! are low. Game events can be observed through a [`CardGameDelegate`], such
//! as the text-producing [`CardGameTracker`].
//!
//! # Example
//!
//! ```
//! use highlow::{CardGameTracker, HighLow};
//!
//! let mut tracker = CardGameTracker::new(String::new());
//! let mut game = HighLow::new(42);
//! game.set_delegate(&mut tracker);
//! game.start();
//! let result = game.play().unwrap();
//! drop(game);
//!
//! let text = tracker.into_inner();
//! assert!(text.starts_with("Started a new game of High Low\n"));
//! assert!(text.contains(&format!("Player 1 drew a {}", result.player1)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod result;
pub mod tracker;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, DrawError, PlayError};
pub use game::{CardGame, CardGameDelegate, HighLow};
pub use result::{RoundOutcome, RoundResult};
#[cfg(feature = "std")]
pub use tracker::Stdout;
pub use tracker::CardGameTracker;
