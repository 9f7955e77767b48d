//! Match rule tests against a session with a known deck.

use pairs::{
    Card, CardState, ConfigError, Layout, Pending, RejectReason, Resolution, Reveal, Session,
    SessionId,
};

/// Deck laid out as 🚀 🪐 🚀 🪐.
fn two_pair_session() -> Session {
    let cards = vec![
        Card::new(0, "🚀"),
        Card::new(1, "🪐"),
        Card::new(2, "🚀"),
        Card::new(3, "🪐"),
    ];
    Session::from_cards(SessionId(1), Layout::new(2, 2), cards, 1000).unwrap()
}

fn state(session: &Session, id: usize) -> CardState {
    session.cards()[id].state()
}

#[test]
fn first_reveal_counts_no_move() {
    let mut session = two_pair_session();
    assert_eq!(session.reveal(0), Reveal::First(0));
    assert_eq!(state(&session, 0), CardState::Revealed);
    assert_eq!(session.pending(), Pending::One(0));
    assert_eq!(session.moves(), 0);
}

#[test]
fn second_reveal_counts_one_move() {
    let mut session = two_pair_session();
    session.reveal(0);
    let outcome = session.reveal(1);
    assert_eq!(
        outcome,
        Reveal::Second {
            first: 0,
            second: 1,
            ticket: None
        }
    );
    assert_eq!(session.pending(), Pending::Two(0, 1));
    assert_eq!(session.moves(), 1);
}

#[test]
fn duplicate_click_on_pending_card_is_ignored() {
    let mut session = two_pair_session();
    session.reveal(0);
    assert_eq!(
        session.reveal(0),
        Reveal::Rejected(RejectReason::AlreadyRevealed)
    );
    assert_eq!(session.pending(), Pending::One(0));
    assert_eq!(session.moves(), 0);
}

#[test]
fn third_reveal_is_rejected_while_pair_pending() {
    let mut session = two_pair_session();
    session.reveal(0);
    session.reveal(1);

    assert_eq!(
        session.reveal(2),
        Reveal::Rejected(RejectReason::ResolutionPending)
    );
    assert_eq!(state(&session, 2), CardState::Hidden);
    assert_eq!(session.moves(), 1);
}

#[test]
fn unknown_card_is_rejected() {
    let mut session = two_pair_session();
    assert_eq!(
        session.reveal(4),
        Reveal::Rejected(RejectReason::UnknownCard)
    );
    assert_eq!(session.pending(), Pending::None);
}

#[test]
fn mismatch_hides_both_cards() {
    let mut session = two_pair_session();
    session.reveal(0);
    session.reveal(1);

    assert_eq!(
        session.resolve(),
        Some(Resolution::Mismatched {
            first: 0,
            second: 1
        })
    );
    assert_eq!(state(&session, 0), CardState::Hidden);
    assert_eq!(state(&session, 1), CardState::Hidden);
    assert_eq!(session.pending(), Pending::None);
    assert!(!session.is_finished());
    assert_eq!(session.moves(), 1);
}

#[test]
fn match_is_terminal() {
    let mut session = two_pair_session();
    session.reveal(0);
    session.reveal(2);
    assert_eq!(
        session.resolve(),
        Some(Resolution::Matched {
            first: 0,
            second: 2,
            finished: false
        })
    );

    assert_eq!(
        session.reveal(0),
        Reveal::Rejected(RejectReason::AlreadyMatched)
    );
    session.reveal(1);
    session.reveal(3);
    session.resolve();

    assert_eq!(state(&session, 0), CardState::Matched);
    assert_eq!(state(&session, 2), CardState::Matched);
    assert_eq!(session.matched_pairs(), 2);
}

#[test]
fn finishes_only_on_last_match() {
    let mut session = two_pair_session();

    session.reveal(1);
    session.reveal(3);
    session.resolve();
    assert!(!session.is_finished());
    assert!(session.clock().is_running());

    session.reveal(2);
    session.reveal(0);
    assert_eq!(
        session.resolve(),
        Some(Resolution::Matched {
            first: 2,
            second: 0,
            finished: true
        })
    );
    assert!(session.is_finished());
    assert!(!session.clock().is_running());
    assert_eq!(session.moves(), 2);

    assert_eq!(
        session.reveal(1),
        Reveal::Rejected(RejectReason::Finished)
    );
}

#[test]
fn resolve_without_pair_does_nothing() {
    let mut session = two_pair_session();
    assert_eq!(session.resolve(), None);
    session.reveal(0);
    assert_eq!(session.resolve(), None);
    assert_eq!(session.pending(), Pending::One(0));
    assert_eq!(state(&session, 0), CardState::Revealed);
}

#[test]
fn session_clock_starts_running() {
    let mut session = two_pair_session();
    session.advance_clock(2999);
    assert_eq!(session.elapsed_seconds(), 2);
}

#[test]
fn from_cards_checks_card_count() {
    let cards = vec![Card::new(0, "🚀"), Card::new(1, "🚀")];
    assert_eq!(
        Session::from_cards(SessionId(1), Layout::new(2, 2), cards, 1000).unwrap_err(),
        ConfigError::CardCount {
            expected: 4,
            found: 2
        }
    );
}

#[test]
fn from_cards_checks_ids_follow_positions() {
    let cards = vec![
        Card::new(0, "🚀"),
        Card::new(2, "🪐"),
        Card::new(1, "🚀"),
        Card::new(3, "🪐"),
    ];
    assert_eq!(
        Session::from_cards(SessionId(1), Layout::new(2, 2), cards, 1000).unwrap_err(),
        ConfigError::MisplacedCard { position: 1, id: 2 }
    );
}

#[test]
fn from_cards_checks_pairing() {
    let cards = vec![
        Card::new(0, "🚀"),
        Card::new(1, "🚀"),
        Card::new(2, "🚀"),
        Card::new(3, "🪐"),
    ];
    assert_eq!(
        Session::from_cards(SessionId(1), Layout::new(2, 2), cards, 1000).unwrap_err(),
        ConfigError::Unpaired { symbol: "🚀" }
    );
}

#[test]
fn from_cards_checks_columns() {
    let cards = vec![Card::new(0, "🚀"), Card::new(1, "🚀")];
    assert_eq!(
        Session::from_cards(SessionId(1), Layout::new(1, 0), cards, 1000).unwrap_err(),
        ConfigError::NoColumns
    );
}
