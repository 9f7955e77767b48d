//! Error types for game operations.

use thiserror::Error;

/// Invalid game configuration, raised when building a deck or starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Pair count is zero.
    #[error("pair count must be at least one")]
    NoPairs,
    /// The symbol pool is smaller than the requested pair count.
    #[error("symbol pool has {available} symbols but {required} pairs were requested")]
    NotEnoughSymbols {
        /// Number of pairs requested.
        required: usize,
        /// Number of symbols in the pool.
        available: usize,
    },
    /// A symbol appears more than once among the symbols dealt.
    #[error("symbol {symbol} appears more than once in the pool")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: &'static str,
    },
    /// The layout has no columns.
    #[error("grid must have at least one column")]
    NoColumns,
    /// The deck holds a different number of cards than the layout needs.
    #[error("layout needs {expected} cards but the deck holds {found}")]
    CardCount {
        /// Cards the layout needs.
        expected: usize,
        /// Cards in the deck.
        found: usize,
    },
    /// A card's id does not match its position in the deck.
    #[error("card at position {position} has id {id}")]
    MisplacedCard {
        /// Position in the deck.
        position: usize,
        /// The id the card carries.
        id: usize,
    },
    /// A symbol does not occur exactly twice in the deck.
    #[error("symbol {symbol} does not occur exactly twice")]
    Unpaired {
        /// The offending symbol.
        symbol: &'static str,
    },
}
