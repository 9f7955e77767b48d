//! Card types.

/// A card face. Two cards of a well-formed deck share each symbol.
pub type Symbol = &'static str;

/// Position of a card within the deck, also its stable id for the session.
pub type CardId = usize;

/// Visibility state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up and waiting for its pair to be resolved.
    Revealed,
    /// Paired with its twin. Terminal.
    Matched,
}

/// A memory card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The card id (equal to its position in the deck).
    pub id: CardId,
    /// The symbol printed on the face.
    pub symbol: Symbol,
    state: CardState,
}

impl Card {
    /// Creates a face-down card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            state: CardState::Hidden,
        }
    }

    /// Returns the current state of the card.
    #[must_use]
    pub const fn state(&self) -> CardState {
        self.state
    }

    /// Returns whether the card is face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self.state, CardState::Hidden)
    }

    /// Returns whether the card has been matched.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self.state, CardState::Matched)
    }

    /// Returns the symbol if the card is face up or matched.
    #[must_use]
    pub const fn visible_symbol(&self) -> Option<Symbol> {
        match self.state {
            CardState::Hidden => None,
            CardState::Revealed | CardState::Matched => Some(self.symbol),
        }
    }

    /// Turns a hidden card face up. Returns `false` if the card was not hidden.
    pub(crate) const fn reveal(&mut self) -> bool {
        if self.is_hidden() {
            self.state = CardState::Revealed;
            true
        } else {
            false
        }
    }

    /// Turns a revealed card back face down. Matched cards are left alone.
    pub(crate) const fn hide(&mut self) {
        if matches!(self.state, CardState::Revealed) {
            self.state = CardState::Hidden;
        }
    }

    /// Marks the card as matched.
    pub(crate) const fn mark_matched(&mut self) {
        self.state = CardState::Matched;
    }
}
