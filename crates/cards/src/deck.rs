// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards definitions.
use rand::prelude::*;
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::{Error, Result};

/// A playing card.
///
/// Two cards are equal only if both rank and suit are equal, use
/// [Card::same_rank] to compare ranks and [Card::cmp_rank] to order cards
/// by rank.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Create a card from a suit and a rank symbol, for example `("♠", "Q")`.
    ///
    /// Fails with [Error::InvalidValue] if the rank or the suit is not valid.
    pub fn from_symbols(suit: &str, rank: &str) -> Result<Card> {
        let rank = rank.parse::<Rank>()?;
        let suit = suit.parse::<Suit>()?;
        Ok(Card::new(rank, suit))
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Checks if this card has the same rank as the other card.
    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    /// Checks if this card rank is higher than the other card rank.
    pub fn is_higher_than(&self, other: &Card) -> bool {
        self.rank > other.rank
    }

    /// Compares two cards by rank only.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parses a card from its rank and suit symbols, e.g. `Q♠`, `10♥`, `TD`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((pos, _)) if pos > 0 => Card::from_symbols(&s[pos..], &s[..pos]),
            _ => Err(Error::InvalidValue(format!("card '{s}'"))),
        }
    }
}

/// Card rank, the discriminant is the rank strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from the lowest to the highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank position, 0 for a deuce and 12 for an ace.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// The rank symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rank = match s {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(Error::invalid_rank(s)),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
}

impl Suit {
    /// Returns all suits in deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds].into_iter()
    }

    /// The suit symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let suit = match s {
            "♣" | "C" | "c" => Suit::Clubs,
            "♠" | "S" | "s" => Suit::Spades,
            "♥" | "H" | "h" => Suit::Hearts,
            "♦" | "D" | "d" => Suit::Diamonds,
            _ => return Err(Error::invalid_suit(s)),
        };

        Ok(suit)
    }
}

/// A cards Deck.
///
/// Cards are dealt from the end of the deck, a new deck deals the ace of
/// diamonds first.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck in suit-major and rank-minor order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle_with(rng);
        deck
    }

    /// Shuffles the deck cards with the thread local generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffles the deck cards with the given generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(Error::EmptyDeck)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck, the last card is the next to be dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each 5-cards hand in the deck.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&[Card; 5]),
    {
        let c = &self.cards;
        let n = c.len();

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            f(&[c[c1], c[c2], c[c3], c[c4], c[c5]]);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl fmt::Display for Deck {
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

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn card_accessors() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::from_symbols(suit.symbol(), rank.symbol()).unwrap();
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                assert_eq!(card, Card::new(rank, suit));
            }
        }
    }

    #[test]
    fn card_invalid_values() {
        assert!(matches!(
            Card::from_symbols("♠", "1"),
            Err(Error::InvalidValue(v)) if v.contains("rank")
        ));
        assert!(matches!(
            Card::from_symbols("X", "Q"),
            Err(Error::InvalidValue(v)) if v.contains("suit")
        ));
        assert!(Card::from_symbols("♠", "").is_err());
        assert!(Card::from_symbols("♠♠", "Q").is_err());
        assert!(Card::from_symbols("♠", "11").is_err());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::Queen, Suit::Spades);
        assert_eq!(c.to_string(), "Q♠");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");

        let c = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(c.to_string(), "2♣");

        let c = Card::new(Rank::Ace, Suit::Diamonds);
        assert_eq!(c.to_string(), "A♦");
        assert_eq!(format!("{c:?}"), "Card(A♦)");
    }

    #[test]
    fn card_from_str() {
        let c = "Q♠".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Queen, Suit::Spades));

        let c = "10♥".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Hearts));

        let c = "TD".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Diamonds));

        let c = "Ac".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Clubs));

        // Rank symbols are upper case only.
        assert!(matches!(
            "a♠".parse::<Card>(),
            Err(Error::InvalidValue(v)) if v == "rank 'a'"
        ));
        assert!("q♥".parse::<Card>().is_err());
        assert!("tD".parse::<Card>().is_err());

        assert!("".parse::<Card>().is_err());
        assert!("♠".parse::<Card>().is_err());
        assert!("Q".parse::<Card>().is_err());
        assert!("1♠".parse::<Card>().is_err());
    }

    #[test]
    fn card_rank_ordering() {
        let c2 = Card::new(Rank::Deuce, Suit::Hearts);
        let c3 = Card::new(Rank::Trey, Suit::Clubs);
        assert!(c3.is_higher_than(&c2));
        assert!(!c2.is_higher_than(&c3));

        let ak = Card::new(Rank::Ace, Suit::Clubs);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert!(ak.is_higher_than(&kd));
        assert_eq!(ak.cmp_rank(&kd), Ordering::Greater);

        // Same rank different suit, equal by rank but not the same card.
        let qc = Card::new(Rank::Queen, Suit::Clubs);
        let qs = Card::new(Rank::Queen, Suit::Spades);
        assert!(qc.same_rank(&qs));
        assert!(!qc.is_higher_than(&qs));
        assert!(!qs.is_higher_than(&qc));
        assert_eq!(qc.cmp_rank(&qs), Ordering::Equal);
        assert_ne!(qc, qs);
    }

    #[test]
    fn rank_positions() {
        for (pos, rank) in Rank::ranks().enumerate() {
            assert_eq!(rank.position(), pos);
        }

        assert_eq!(Rank::ranks().count(), 13);
        assert_eq!(Suit::suits().count(), 4);
    }

    #[test]
    fn deck_new() {
        let deck = Deck::new();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.cards().iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        // Suit major, rank minor.
        assert_eq!(deck.cards()[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(deck.cards()[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck.cards()[13], Card::new(Rank::Deuce, Suit::Spades));
        assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Diamonds));

        let s = deck.to_string();
        assert!(s.starts_with("[2♣, 3♣, 4♣"));
        assert!(s.ends_with("K♦, A♦]"));
    }

    #[test]
    fn deck_shuffle() {
        let mut rng = StdRng::seed_from_u64(101);
        let ordered = Deck::new();

        let mut orders = HashSet::default();
        for _ in 0..100 {
            let mut deck = Deck::new();
            deck.shuffle_with(&mut rng);
            assert_eq!(deck.count(), Deck::SIZE);

            // Same cards in a different order.
            let cards = deck.cards().iter().copied().collect::<HashSet<_>>();
            assert_eq!(cards.len(), Deck::SIZE);
            assert!(ordered.cards().iter().all(|c| cards.contains(c)));
            assert_ne!(deck.cards(), ordered.cards());

            orders.insert(deck.cards().to_vec());
        }

        assert_eq!(orders.len(), 100);

        let mut deck = Deck::new();
        deck.shuffle();
        assert_eq!(deck.count(), Deck::SIZE);
        assert_ne!(deck.cards(), ordered.cards());
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::new();
        assert_eq!(deck.deal(), Ok(Card::new(Rank::Ace, Suit::Diamonds)));
        assert_eq!(deck.deal(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!(deck.count(), Deck::SIZE - 2);

        let mut dealt = HashSet::default();
        while deck.count() > 0 {
            let count = deck.count();
            dealt.insert(deck.deal().unwrap());
            assert_eq!(deck.count(), count - 1);
        }

        assert_eq!(dealt.len(), Deck::SIZE - 2);
        assert!(deck.is_empty());
        assert_eq!(deck.to_string(), "[]");
        assert_eq!(deck.deal(), Err(Error::EmptyDeck));
        assert_eq!(deck.deal(), Err(Error::EmptyDeck));
    }

    #[test]
    fn deck_deal_53() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        for _ in 0..Deck::SIZE {
            assert!(deck.deal().is_ok());
        }

        let err = deck.deal().unwrap_err();
        assert_eq!(err, Error::EmptyDeck);
        assert_eq!(err.to_string(), "Cannot deal from an empty deck");
    }

    #[test]
    fn deck_for_each_hand() {
        let mut deck = Deck::new();
        while deck.count() > 7 {
            deck.deal().unwrap();
        }

        let mut hands = HashSet::default();
        deck.for_each_hand(|hand| {
            hands.insert(*hand);
        });
        assert_eq!(hands.len(), 21);

        while deck.count() > 4 {
            deck.deal().unwrap();
        }

        let mut count = 0;
        deck.for_each_hand(|_| count += 1);
        assert_eq!(count, 0);
    }

    // This takes a while to run in debug mode as it goes through 2.6M hands.
    #[test]
    #[ignore]
    fn deck_for_each_hand_full() {
        let mut count = 0;
        Deck::new().for_each_hand(|_| count += 1);
        assert_eq!(count, 2_598_960);
    }
}
