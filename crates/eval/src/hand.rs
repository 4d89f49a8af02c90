// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hand classification.
use std::{fmt, str::FromStr};

use fullhouse_cards::{Card, Deck, Error, Result};

/// Rank positions of the ace-low straight sorted ascending (2, 3, 4, 5, A).
const WHEEL: [usize; 5] = [0, 1, 2, 3, 12];

/// A poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the lowest to the highest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pairs",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        f.write_str(name)
    }
}

/// A five cards poker hand.
///
/// The hand keeps the cards in the order they were dealt, all the queries
/// are computed from the cards and never reorder them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PokerHand {
    cards: [Card; PokerHand::SIZE],
}

impl PokerHand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from the given cards.
    ///
    /// Fails with [Error::InvalidValue] if a card appears more than once.
    pub fn new(cards: [Card; PokerHand::SIZE]) -> Result<Self> {
        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(Error::InvalidValue(format!("duplicate card '{card}'")));
            }
        }

        Ok(Self { cards })
    }

    /// Creates a hand from cards taken from a single deck.
    pub(crate) fn from_deck_cards(cards: [Card; PokerHand::SIZE]) -> Self {
        Self { cards }
    }

    /// Deals a hand from the deck.
    ///
    /// Fails with [Error::EmptyDeck] if the deck has less than five cards,
    /// the cards dealt before the failure are not returned to the deck.
    pub fn deal(deck: &mut Deck) -> Result<Self> {
        let cards = [
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
        ];

        Ok(Self::from_deck_cards(cards))
    }

    /// The hand cards in dealing order.
    pub fn cards(&self) -> &[Card; PokerHand::SIZE] {
        &self.cards
    }

    /// Number of ordered pairs of distinct cards with the same rank.
    ///
    /// Each matching pair is counted twice, so a pair gives 2, two pairs 4,
    /// three of a kind 6, a full house 8 and four of a kind 12.
    pub fn number_matches(&self) -> usize {
        let mut matches = 0;
        for (i, c1) in self.cards.iter().enumerate() {
            for (j, c2) in self.cards.iter().enumerate() {
                if i != j && c1.same_rank(c2) {
                    matches += 1;
                }
            }
        }

        matches
    }

    /// The sizes of the same rank groups, largest first.
    pub fn rank_counts(&self) -> Vec<usize> {
        let mut counts = [0usize; 13];
        for card in &self.cards {
            counts[card.rank().position()] += 1;
        }

        let mut groups = counts.into_iter().filter(|&n| n > 0).collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        groups
    }

    /// Checks if all cards have the same suit.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// Checks if the hand has exactly one pair.
    pub fn is_pair(&self) -> bool {
        self.number_matches() == 2
    }

    /// Checks if the hand has two pairs.
    pub fn is_two_pair(&self) -> bool {
        self.number_matches() == 4
    }

    /// Checks if the hand has three of a kind and no pair.
    pub fn is_trips(&self) -> bool {
        self.number_matches() == 6
    }

    /// Checks if the hand has three of a kind and a pair.
    pub fn is_full_house(&self) -> bool {
        self.number_matches() == 8
    }

    /// Checks if the hand has four of a kind.
    pub fn is_quads(&self) -> bool {
        self.number_matches() == 12
    }

    /// Checks if the hand ranks are five consecutive ranks.
    ///
    /// The ace ranks high, except in the 5-4-3-2-A straight.
    pub fn is_straight(&self) -> bool {
        self.number_matches() == 0 && self.is_run()
    }

    /// The highest category this hand belongs to.
    pub fn category(&self) -> HandCategory {
        let matches = self.number_matches();
        let straight = matches == 0 && self.is_run();
        let flush = self.is_flush();

        match matches {
            _ if straight && flush => HandCategory::StraightFlush,
            12 => HandCategory::FourOfAKind,
            8 => HandCategory::FullHouse,
            _ if flush => HandCategory::Flush,
            _ if straight => HandCategory::Straight,
            6 => HandCategory::ThreeOfAKind,
            4 => HandCategory::TwoPair,
            2 => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    }

    /// Checks the distance between the lowest and highest rank, sorting a
    /// copy of the ranks so the hand order is preserved.
    fn is_run(&self) -> bool {
        let mut positions = self.cards.map(|c| c.rank().position());
        positions.sort_unstable();

        positions[4] - positions[0] == 4 || positions == WHEEL
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

impl FromStr for PokerHand {
    type Err = Error;

    /// Parses five whitespace or comma separated cards, e.g. `2♣ 2♠ 2♥ 5♦ 5♣`.
    fn from_str(s: &str) -> Result<Self> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|c| !c.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>>>()?;

        let cards = <[Card; PokerHand::SIZE]>::try_from(cards)
            .map_err(|cards| Error::InvalidValue(format!("hand of {} cards", cards.len())))?;

        Self::new(cards)
    }
}
