//! Match state types.

use crate::card::CardId;

/// Identity of one play-through. Every start or restart gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Cards revealed but not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pending {
    /// Nothing face up.
    #[default]
    None,
    /// One card face up, waiting for a second.
    One(CardId),
    /// Two cards face up, waiting for resolution. New reveals are rejected.
    Two(CardId, CardId),
}

impl Pending {
    /// Returns the number of pending cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    /// Returns whether no card is pending.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Why a reveal request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No game has been started.
    NoSession,
    /// The game is already won.
    Finished,
    /// Two cards are waiting for resolution.
    ResolutionPending,
    /// No card has this id.
    UnknownCard,
    /// The card is already matched.
    AlreadyMatched,
    /// The card is already face up.
    AlreadyRevealed,
}

/// Handle for a scheduled pair resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionTicket {
    /// The session the resolution belongs to.
    pub session: SessionId,
    /// Timeline instant at which the resolution fires.
    pub due_at_ms: u64,
}

/// Effect of a reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// The request was a no-op.
    Rejected(RejectReason),
    /// The card is the first of a pair attempt.
    First(CardId),
    /// The card completed a pair attempt and a move was counted.
    Second {
        /// The card revealed first.
        first: CardId,
        /// The card revealed by this request.
        second: CardId,
        /// When the pair will be resolved. `None` when revealed on a bare
        /// session with no scheduler attached.
        ticket: Option<ResolutionTicket>,
    },
}

impl Reveal {
    /// Returns whether the request changed any state.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Outcome of resolving a pending pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The two cards share a symbol and are now matched.
    Matched {
        /// First card of the pair.
        first: CardId,
        /// Second card of the pair.
        second: CardId,
        /// Whether this match completed the board.
        finished: bool,
    },
    /// The two cards differ and are face down again.
    Mismatched {
        /// First card of the pair.
        first: CardId,
        /// Second card of the pair.
        second: CardId,
    },
}
