//! A single play-through and its match rules.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, CardId, CardState, Symbol};
use crate::clock::GameClock;
use crate::deck;
use crate::error::ConfigError;
use crate::options::Layout;

use super::state::{Pending, RejectReason, Reveal, Resolution, SessionId};

/// One play-through: the deck, the pending pair, the move counter and the
/// clock. All game state lives here and is replaced wholesale on restart.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    layout: Layout,
    cards: Vec<Card>,
    pending: Pending,
    moves: u32,
    clock: GameClock,
    finished: bool,
}

impl Session {
    /// Deals a fresh deck for `layout` from `symbols` and starts the clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has no pairs or columns, the pool is
    /// too small, or the dealt symbols repeat.
    pub fn new<R: Rng + ?Sized>(
        id: SessionId,
        layout: Layout,
        symbols: &[Symbol],
        clock_interval_ms: u64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if layout.grid_columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        let cards = deck::build(symbols, layout.pairs, rng)?;
        Self::from_cards(id, layout, cards, clock_interval_ms)
    }

    /// Starts a session over an already-built deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has no columns or the deck does not
    /// fit it: wrong card count, ids out of position, or symbols not paired.
    pub fn from_cards(
        id: SessionId,
        layout: Layout,
        cards: Vec<Card>,
        clock_interval_ms: u64,
    ) -> Result<Self, ConfigError> {
        if layout.grid_columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        deck::validate(&cards, layout.pairs)?;

        let mut clock = GameClock::new(clock_interval_ms);
        clock.start();

        Ok(Self {
            id,
            layout,
            cards,
            pending: Pending::None,
            moves: 0,
            clock,
            finished: false,
        })
    }

    /// Returns the session id.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the board layout.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the pending pair state.
    #[must_use]
    pub const fn pending(&self) -> Pending {
        self.pending
    }

    /// Returns the number of completed pair attempts.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the elapsed whole seconds.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u32 {
        self.clock.current_seconds()
    }

    /// Returns the session clock.
    #[must_use]
    pub const fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Returns whether every card is matched.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the number of matched pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    /// Feeds elapsed time to the clock.
    pub fn advance_clock(&mut self, elapsed_ms: u64) {
        self.clock.advance(elapsed_ms);
    }

    /// Turns a card face up.
    ///
    /// The second accepted reveal of a pair attempt counts one move and
    /// leaves both cards pending until [`Session::resolve`] is called.
    /// Rejected requests change nothing.
    pub fn reveal(&mut self, card_id: CardId) -> Reveal {
        if self.finished {
            return Reveal::Rejected(RejectReason::Finished);
        }
        if matches!(self.pending, Pending::Two(_, _)) {
            return Reveal::Rejected(RejectReason::ResolutionPending);
        }

        let Some(card) = self.cards.get_mut(card_id) else {
            return Reveal::Rejected(RejectReason::UnknownCard);
        };
        match card.state() {
            CardState::Matched => return Reveal::Rejected(RejectReason::AlreadyMatched),
            CardState::Revealed => return Reveal::Rejected(RejectReason::AlreadyRevealed),
            CardState::Hidden => {}
        }
        card.reveal();

        match self.pending {
            Pending::None => {
                self.pending = Pending::One(card_id);
                Reveal::First(card_id)
            }
            Pending::One(first) => {
                self.pending = Pending::Two(first, card_id);
                self.moves += 1;
                Reveal::Second {
                    first,
                    second: card_id,
                    ticket: None,
                }
            }
            // Rejected above.
            Pending::Two(_, _) => Reveal::Rejected(RejectReason::ResolutionPending),
        }
    }

    /// Resolves the pending pair, if there is one.
    ///
    /// Matching cards become matched, others go face down. Completing the
    /// board finishes the session and stops the clock.
    pub fn resolve(&mut self) -> Option<Resolution> {
        let Pending::Two(first, second) = self.pending else {
            return None;
        };
        self.pending = Pending::None;

        let same = self.cards[first].symbol == self.cards[second].symbol;
        if same {
            self.cards[first].mark_matched();
            self.cards[second].mark_matched();

            // Both cards are marked before the board is checked.
            if self.cards.iter().all(Card::is_matched) {
                self.finished = true;
                self.clock.stop();
            }

            Some(Resolution::Matched {
                first,
                second,
                finished: self.finished,
            })
        } else {
            self.cards[first].hide();
            self.cards[second].hide();
            Some(Resolution::Mismatched { first, second })
        }
    }
}
