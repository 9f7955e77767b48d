//! Deck construction tests.

use pairs::{CardState, ConfigError, Theme, deck};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn rejects_zero_pairs() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(
        deck::build(&["🚀"], 0, &mut rng).unwrap_err(),
        ConfigError::NoPairs
    );
}

#[test]
fn rejects_small_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(
        deck::build(&["🚀", "🪐"], 3, &mut rng).unwrap_err(),
        ConfigError::NotEnoughSymbols {
            required: 3,
            available: 2
        }
    );
}

#[test]
fn rejects_repeated_symbols() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(
        deck::build(&["A", "A"], 2, &mut rng).unwrap_err(),
        ConfigError::DuplicateSymbol { symbol: "A" }
    );
    assert_eq!(
        deck::build(&["A", "B", "C", "B"], 4, &mut rng).unwrap_err(),
        ConfigError::DuplicateSymbol { symbol: "B" }
    );
    // Repeats past the dealt prefix are never used.
    assert!(deck::build(&["A", "B", "A"], 2, &mut rng).is_ok());
}

#[test]
fn validate_accepts_built_decks() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let cards = deck::build(Theme::Space.symbols(), 6, &mut rng).unwrap();
    assert_eq!(deck::validate(&cards, 6), Ok(()));
    assert_eq!(
        deck::validate(&cards, 5),
        Err(ConfigError::CardCount {
            expected: 10,
            found: 12
        })
    );
}

#[test]
fn single_pair_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let cards = deck::build(&["🚀"], 1, &mut rng).unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|card| card.symbol == "🚀"));
    assert_eq!(cards[0].id, 0);
    assert_eq!(cards[1].id, 1);
}

#[test]
fn only_leading_symbols_are_used() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let pool = Theme::Jungle.symbols();
    let cards = deck::build(pool, 4, &mut rng).unwrap();
    for card in &cards {
        assert!(pool[..4].contains(&card.symbol));
    }
}

#[test]
fn same_seed_same_deck() {
    let pool = Theme::Space.symbols();
    let a = deck::build(pool, 8, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    let b = deck::build(pool, 8, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn no_symbol_is_favoured_for_first_slot() {
    let runs = 2000;
    let mut first_is_a = 0;
    for seed in 0..runs {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = deck::build(&["A", "B"], 2, &mut rng).unwrap();
        if cards[0].symbol == "A" {
            first_is_a += 1;
        }
    }
    // Expected 1000, standard deviation about 22.
    assert!((850..=1150).contains(&first_is_a), "A first in {first_is_a} of {runs}");
}

proptest! {
    #[test]
    fn decks_are_well_paired(pairs in 1usize..=12, seed in any::<u64>()) {
        let pool = Theme::Space.symbols();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = deck::build(pool, pairs, &mut rng).unwrap();

        prop_assert_eq!(cards.len(), pairs * 2);
        prop_assert!(deck::is_well_paired(&cards));
        for (index, card) in cards.iter().enumerate() {
            prop_assert_eq!(card.id, index);
            prop_assert_eq!(card.state(), CardState::Hidden);
        }
    }

    #[test]
    fn shuffle_is_a_permutation(pairs in 1usize..=12, seed in any::<u64>()) {
        let pool = Theme::Jungle.symbols();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = deck::build(pool, pairs, &mut rng).unwrap();

        let mut dealt: Vec<&str> = cards.iter().map(|card| card.symbol).collect();
        let mut expected: Vec<&str> = pool[..pairs].iter().chain(&pool[..pairs]).copied().collect();
        dealt.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(dealt, expected);
    }
}
