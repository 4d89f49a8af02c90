// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte-Carlo estimation of hand categories probabilities.
//!
//! Each trial shuffles a fresh deck and deals a [PokerHand] from it, the
//! estimate is the fraction of hands that satisfy a predicate:
//!
//! ```
//! # use fullhouse_eval::{PokerHand, simulation};
//! let estimate = simulation::until_hits(&mut rand::rng(), 3, PokerHand::is_quads).unwrap();
//! assert_eq!(estimate.hits, 3);
//! assert!(estimate.trials >= 3);
//! ```
use log::{debug, info};
use rand::prelude::*;
use std::ops;

use crate::{Deck, HandCategory, PokerHand, Result};

/// Simulation configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Number of matching hands to deal before stopping.
    pub hits: u64,
    /// Deal this number of hands instead of stopping after `hits` matches.
    pub trials: Option<u64>,
    /// Seed for a reproducible run.
    pub seed: Option<u64>,
}

impl Config {
    /// Runs the simulation counting the hands that satisfy `predicate`.
    pub fn run<P>(&self, predicate: P) -> Result<Estimate>
    where
        P: FnMut(&PokerHand) -> bool,
    {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        match self.trials {
            Some(trials) => over_trials(&mut rng, trials, predicate),
            None => until_hits(&mut rng, self.hits, predicate),
        }
    }
}

/// The result of a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Estimate {
    /// Number of hands that satisfied the predicate.
    pub hits: u64,
    /// Number of hands dealt.
    pub trials: u64,
}

impl Estimate {
    /// The estimated probability, 0 if no hand was dealt.
    pub fn ratio(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.hits as f64 / self.trials as f64
        }
    }

    /// The estimated probability as a percentage.
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

/// Deals hands from fresh shuffled decks until `target` of them satisfy
/// `predicate`.
pub fn until_hits<R, P>(rng: &mut R, target: u64, mut predicate: P) -> Result<Estimate>
where
    R: Rng + ?Sized,
    P: FnMut(&PokerHand) -> bool,
{
    let mut estimate = Estimate::default();

    while estimate.hits < target {
        let hand = deal_fresh(rng)?;
        estimate.trials += 1;

        if predicate(&hand) {
            estimate.hits += 1;
            debug!("Hit {} after {} hands: {hand}", estimate.hits, estimate.trials);
        }
    }

    info!("Dealt {} hands, {} hits", estimate.trials, estimate.hits);
    Ok(estimate)
}

/// Deals `trials` hands from fresh shuffled decks and counts those that
/// satisfy `predicate`.
pub fn over_trials<R, P>(rng: &mut R, trials: u64, mut predicate: P) -> Result<Estimate>
where
    R: Rng + ?Sized,
    P: FnMut(&PokerHand) -> bool,
{
    let mut estimate = Estimate::default();

    for _ in 0..trials {
        let hand = deal_fresh(rng)?;
        estimate.trials += 1;

        if predicate(&hand) {
            estimate.hits += 1;
            debug!("Hit {} after {} hands: {hand}", estimate.hits, estimate.trials);
        }
    }

    info!("Dealt {} hands, {} hits", estimate.trials, estimate.hits);
    Ok(estimate)
}

fn deal_fresh<R: Rng + ?Sized>(rng: &mut R) -> Result<PokerHand> {
    let mut deck = Deck::new_and_shuffled(rng);
    PokerHand::deal(&mut deck)
}

/// Number of hands for each category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts([u64; HandCategory::COUNT]);

impl CategoryCounts {
    /// Total number of hands.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// The fraction of hands in the category as a percentage.
    pub fn percent(&self, category: HandCategory) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self[category] as f64 / total as f64 * 100.0
        }
    }
}

impl ops::Index<HandCategory> for CategoryCounts {
    type Output = u64;

    fn index(&self, category: HandCategory) -> &Self::Output {
        &self.0[category as usize]
    }
}

impl ops::IndexMut<HandCategory> for CategoryCounts {
    fn index_mut(&mut self, category: HandCategory) -> &mut Self::Output {
        &mut self.0[category as usize]
    }
}

/// Counts the categories of all the 5-cards hands in a full deck.
pub fn exact_frequencies() -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    Deck::default().for_each_hand(|cards| {
        counts[PokerHand::from_deck_cards(*cards).category()] += 1;
    });

    info!("Enumerated {} hands", counts.total());
    counts
}
