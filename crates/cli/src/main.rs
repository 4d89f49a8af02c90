// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fullhouse command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, value_parser};
use log::info;
use std::io::{self, Write};

use fullhouse_eval::{Deck, HandCategory, PokerHand, simulation};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Log each matching hand.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints a new deck, shuffles it and deals a card.
    Demo,
    /// Estimates the probability of dealing a full house.
    Simulate {
        /// Stop after dealing this number of full houses.
        #[clap(long, default_value_t = 10, value_parser = value_parser!(u64).range(1..))]
        hits: u64,
        /// Deal this number of hands instead of stopping after `hits`.
        #[clap(long, short, value_parser = value_parser!(u64).range(1..))]
        trials: Option<u64>,
        /// The random generator seed.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Counts every hand category over all the 5-cards hands.
    Enumerate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Demo => demo(&mut out),
        Command::Simulate { hits, trials, seed } => {
            let config = simulation::Config { hits, trials, seed };
            simulate(&config, &mut out)
        }
        Command::Enumerate => enumerate(&mut out),
    }
}

fn demo<W: Write>(out: &mut W) -> Result<()> {
    let mut deck = Deck::new();
    writeln!(out, "{deck}")?;

    deck.shuffle();
    writeln!(out, "{deck}")?;

    let card = deck.deal()?;
    writeln!(out, "{card}")?;
    Ok(())
}

fn simulate<W: Write>(config: &simulation::Config, out: &mut W) -> Result<()> {
    info!("Running simulation with {config:?}");

    let estimate = config.run(PokerHand::is_full_house)?;
    writeln!(out, "Probability of a full house is {}%", estimate.percent())?;
    Ok(())
}

fn enumerate<W: Write>(out: &mut W) -> Result<()> {
    let counts = simulation::exact_frequencies();

    for category in HandCategory::categories() {
        let label = format!("{category}:");
        writeln!(
            out,
            "{label:<17}{:>9}  {:.4}%",
            counts[category],
            counts.percent(category)
        )?;
    }

    writeln!(out, "{:<17}{:>9}", "Total:", counts.total())?;
    Ok(())
}
