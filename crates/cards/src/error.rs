// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck errors.
use thiserror::Error;

/// Errors returned by cards construction and deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rank or suit that is not one of the allowed values.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// A deal from a deck with no cards left.
    #[error("Cannot deal from an empty deck")]
    EmptyDeck,
}

impl Error {
    pub(crate) fn invalid_rank(rank: &str) -> Self {
        Error::InvalidValue(format!("rank '{rank}'"))
    }

    pub(crate) fn invalid_suit(suit: &str) -> Self {
        Error::InvalidValue(format!("suit '{suit}'"))
    }
}

/// Result type for cards operations.
pub type Result<T> = std::result::Result<T, Error>;
