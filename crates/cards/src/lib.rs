// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fullhouse playing cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use fullhouse_cards::{Card, Rank, Suit};
//! let qs = Card::new(Rank::Queen, Suit::Spades);
//! let qc = Card::from_symbols("♣", "Q").unwrap();
//! assert!(qs.same_rank(&qc));
//! assert_eq!(qs.to_string(), "Q♠");
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use fullhouse_cards::{Deck, Error};
//! let mut deck = Deck::default();
//! deck.shuffle();
//!
//! for _ in 0..Deck::SIZE {
//!     deck.deal().unwrap();
//! }
//!
//! assert!(deck.is_empty());
//! assert_eq!(deck.deal(), Err(Error::EmptyDeck));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod error;
pub use error::{Error, Result};
