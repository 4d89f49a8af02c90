// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fullhouse poker hand classification.
//!
//! A [PokerHand] is dealt from a [Deck] and answers queries about the ranks
//! and suits of its five cards:
//!
//! ```
//! # use fullhouse_eval::*;
//! let hand = "2♣ 2♠ 2♥ 5♦ 5♣".parse::<PokerHand>().unwrap();
//! assert_eq!(hand.number_matches(), 8);
//! assert!(hand.is_full_house());
//! assert!(!hand.is_trips());
//! assert_eq!(hand.category(), HandCategory::FullHouse);
//!
//! let mut deck = Deck::default();
//! deck.shuffle();
//! let hand = PokerHand::deal(&mut deck).unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - PokerHand::SIZE);
//! ```
//!
//! The [simulation] module estimates a category probability by dealing
//! hands from fresh shuffled decks, or computes it exactly by enumerating
//! all the hands in a deck.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod hand;
pub use hand::{HandCategory, PokerHand};

pub mod simulation;

// Reexport cards types.
pub use fullhouse_cards::{Card, Deck, Error, Rank, Result, Suit};
