//! A memory-matching card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a shuffled deck of symbol
//! pairs, runs the flip and match rules, counts moves and play time, and
//! detects when the board is cleared. Rendering is left to the caller, which
//! drives time with [`Game::advance`] and reads state through
//! [`Game::snapshot`].
//!
//! # Example
//!
//! ```
//! use pairs::{Difficulty, Game, GameOptions, Theme};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_new_game(Difficulty::Medium, Theme::Space).unwrap();
//! game.reveal(0);
//! game.reveal(1);
//! game.advance(1000);
//! assert_eq!(game.snapshot().unwrap().moves, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod clock;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, CardId, CardState, Symbol};
pub use clock::GameClock;
pub use error::ConfigError;
pub use game::{
    Game, Pending, RejectReason, Resolution, ResolutionTicket, Reveal, Session, SessionId,
};
pub use options::{Difficulty, GameOptions, Layout, Theme};
pub use snapshot::{CardView, Snapshot};
