//! Read-only views handed to presentation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId, CardState, Symbol};
use crate::game::Session;
use crate::options::{Difficulty, Theme};

/// What presentation may see of a card. Hidden cards carry no symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    /// The card id.
    pub id: CardId,
    /// The symbol, present only for revealed and matched cards.
    pub symbol: Option<Symbol>,
    /// The card state.
    pub state: CardState,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            symbol: card.visible_symbol(),
            state: card.state(),
        }
    }
}

/// Copy of the active session at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Cards in deck order.
    pub cards: Vec<CardView>,
    /// Completed pair attempts.
    pub moves: u32,
    /// Whole seconds of play.
    pub elapsed_seconds: u32,
    /// Whether every card is matched.
    pub finished: bool,
    /// Pairs on the board.
    pub pairs: usize,
    /// Pairs matched so far.
    pub matched_pairs: usize,
    /// Columns to lay the cards out in.
    pub grid_columns: usize,
    /// The preset in play, `None` for a custom game.
    pub difficulty: Option<Difficulty>,
    /// The theme in play, `None` for a custom game.
    pub theme: Option<Theme>,
}

impl Snapshot {
    pub(crate) fn capture(
        session: &Session,
        difficulty: Option<Difficulty>,
        theme: Option<Theme>,
    ) -> Self {
        let layout = session.layout();
        Self {
            cards: session.cards().iter().map(CardView::from).collect(),
            moves: session.moves(),
            elapsed_seconds: session.elapsed_seconds(),
            finished: session.is_finished(),
            pairs: layout.pairs,
            matched_pairs: session.matched_pairs(),
            grid_columns: layout.grid_columns,
            difficulty,
            theme,
        }
    }

    /// Returns the view of a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardView> {
        self.cards.get(id)
    }
}
