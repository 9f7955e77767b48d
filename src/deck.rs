//! Deck construction.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Symbol};
use crate::error::ConfigError;

/// Builds a shuffled deck holding two copies of the first `pairs` symbols.
///
/// Pool order decides which symbols take part, the shuffle decides where they
/// land. Ids are assigned in final order, so `deck[i].id == i`.
///
/// # Errors
///
/// Returns an error if `pairs` is zero, the pool has fewer than `pairs`
/// symbols, or a symbol repeats among the first `pairs`.
///
/// # Example
///
/// ```
/// use pairs::deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let cards = deck::build(&["A", "B", "C"], 2, &mut rng).unwrap();
/// assert_eq!(cards.len(), 4);
/// assert!(cards.iter().all(|card| card.symbol != "C"));
/// ```
pub fn build<R: Rng + ?Sized>(
    symbols: &[Symbol],
    pairs: usize,
    rng: &mut R,
) -> Result<Vec<Card>, ConfigError> {
    if pairs == 0 {
        return Err(ConfigError::NoPairs);
    }
    if symbols.len() < pairs {
        return Err(ConfigError::NotEnoughSymbols {
            required: pairs,
            available: symbols.len(),
        });
    }

    let chosen = &symbols[..pairs];
    if let Some(symbol) = first_repeat(chosen) {
        return Err(ConfigError::DuplicateSymbol { symbol });
    }

    let mut faces: Vec<Symbol> = Vec::with_capacity(pairs * 2);
    faces.extend_from_slice(chosen);
    faces.extend_from_slice(chosen);
    faces.shuffle(rng);

    Ok(faces
        .into_iter()
        .enumerate()
        .map(|(id, symbol)| Card::new(id, symbol))
        .collect())
}

/// Checks a prebuilt deck: `pairs * 2` cards, ids equal to positions, and
/// every symbol exactly twice.
///
/// # Errors
///
/// Returns the first problem found.
pub fn validate(cards: &[Card], pairs: usize) -> Result<(), ConfigError> {
    if pairs == 0 {
        return Err(ConfigError::NoPairs);
    }
    if cards.len() != pairs * 2 {
        return Err(ConfigError::CardCount {
            expected: pairs * 2,
            found: cards.len(),
        });
    }
    if let Some((position, card)) = cards
        .iter()
        .enumerate()
        .find(|(position, card)| card.id != *position)
    {
        return Err(ConfigError::MisplacedCard {
            position,
            id: card.id,
        });
    }
    if let Some(card) = cards.iter().find(|card| occurrences(cards, card.symbol) != 2) {
        return Err(ConfigError::Unpaired {
            symbol: card.symbol,
        });
    }
    Ok(())
}

/// Returns whether every symbol in `cards` occurs exactly twice.
#[must_use]
pub fn is_well_paired(cards: &[Card]) -> bool {
    cards
        .iter()
        .all(|card| occurrences(cards, card.symbol) == 2)
}

fn occurrences(cards: &[Card], symbol: Symbol) -> usize {
    cards.iter().filter(|card| card.symbol == symbol).count()
}

fn first_repeat(symbols: &[Symbol]) -> Option<Symbol> {
    symbols
        .iter()
        .enumerate()
        .find(|(index, symbol)| symbols[..*index].contains(*symbol))
        .map(|(_, symbol)| *symbol)
}
