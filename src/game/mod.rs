//! Session controller and match engine.

use core::sync::atomic::{AtomicU64, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{CardId, Symbol};
use crate::error::ConfigError;
use crate::options::{Difficulty, GameOptions, Layout, Theme};
use crate::snapshot::Snapshot;

mod schedule;
mod session;
pub mod state;

use schedule::Scheduler;
pub use session::Session;
pub use state::{Pending, RejectReason, Resolution, ResolutionTicket, Reveal, SessionId};

/// What a restart rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setup {
    Preset { difficulty: Difficulty, theme: Theme },
    Custom { layout: Layout, symbols: &'static [Symbol] },
}

impl Setup {
    const fn board(self) -> (Layout, &'static [Symbol]) {
        match self {
            Self::Preset { difficulty, theme } => (difficulty.layout(), theme.symbols()),
            Self::Custom { layout, symbols } => (layout, symbols),
        }
    }

    const fn labels(self) -> (Option<Difficulty>, Option<Theme>) {
        match self {
            Self::Preset { difficulty, theme } => (Some(difficulty), Some(theme)),
            Self::Custom { .. } => (None, None),
        }
    }
}

/// A memory game controller that owns the active session.
///
/// Time is driven by the caller: [`Game::advance`] moves a logical timeline
/// forward, ticking the clock and firing pair resolutions that have come due.
/// Presentation reads state only through [`Game::snapshot`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The active session, `None` until the first game starts.
    session: Mutex<Option<Session>>,
    /// Setup of the active session, reused by [`Game::restart`].
    setup: Mutex<Setup>,
    /// Last preset chosen, used when switching one axis.
    selection: Mutex<(Difficulty, Theme)>,
    /// Resolutions waiting to fire.
    scheduler: Mutex<Scheduler>,
    /// Current instant on the logical timeline.
    now_ms: Mutex<u64>,
    /// Next session id to assign.
    next_session: AtomicU64,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a controller with the given seed. No game is running yet.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::{Difficulty, Game, GameOptions, Theme};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.start_new_game(Difficulty::Easy, Theme::Jungle).unwrap();
    /// assert_eq!(game.snapshot().unwrap().cards.len(), 12);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            session: Mutex::new(None),
            setup: Mutex::new(Setup::Preset {
                difficulty: options.difficulty,
                theme: options.theme,
            }),
            selection: Mutex::new((options.difficulty, options.theme)),
            scheduler: Mutex::new(Scheduler::new()),
            now_ms: Mutex::new(0),
            next_session: AtomicU64::new(1),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Discards the current session and deals a new game.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot fill the preset's pairs. The
    /// current session is left untouched in that case.
    pub fn start_new_game(&self, difficulty: Difficulty, theme: Theme) -> Result<(), ConfigError> {
        self.install(Setup::Preset { difficulty, theme })
    }

    /// Discards the current session and deals a game from an explicit layout
    /// and symbol pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has no pairs or columns, the pool holds
    /// fewer symbols than pairs, or the leading symbols repeat. The current
    /// session is left untouched in that case.
    pub fn start_custom_game(
        &self,
        layout: Layout,
        symbols: &'static [Symbol],
    ) -> Result<(), ConfigError> {
        self.install(Setup::Custom { layout, symbols })
    }

    /// Deals a new game with the same setup as the current one.
    ///
    /// Before any game has started this uses the difficulty and theme from
    /// [`GameOptions`].
    ///
    /// # Errors
    ///
    /// Returns an error if the setup is invalid.
    pub fn restart(&self) -> Result<(), ConfigError> {
        let setup = *self.setup.lock();
        self.install(setup)
    }

    /// Switches difficulty, keeping the last theme, and starts a new game.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot fill the preset's pairs.
    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), ConfigError> {
        let (_, theme) = *self.selection.lock();
        self.start_new_game(difficulty, theme)
    }

    /// Switches theme, keeping the last difficulty, and starts a new game.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot fill the preset's pairs.
    pub fn set_theme(&self, theme: Theme) -> Result<(), ConfigError> {
        let (difficulty, _) = *self.selection.lock();
        self.start_new_game(difficulty, theme)
    }

    fn install(&self, setup: Setup) -> Result<(), ConfigError> {
        let (layout, symbols) = setup.board();
        let id = SessionId(self.next_session.fetch_add(1, Ordering::SeqCst));

        let built = {
            let mut rng = self.rng.lock();
            Session::new(id, layout, symbols, self.options.clock_interval_ms, &mut *rng)
        };
        let session = match built {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(pairs = layout.pairs, symbols = symbols.len(), %err, "rejected game setup");
                return Err(err);
            }
        };

        *self.session.lock() = Some(session);
        *self.setup.lock() = setup;
        if let Setup::Preset { difficulty, theme } = setup {
            *self.selection.lock() = (difficulty, theme);
        }

        tracing::debug!(
            session = id.0,
            pairs = layout.pairs,
            columns = layout.grid_columns,
            "started session"
        );
        Ok(())
    }

    /// Requests that a card be turned face up.
    ///
    /// Invalid requests are no-ops reported as [`Reveal::Rejected`]. The
    /// second card of a pair attempt schedules a resolution
    /// [`GameOptions::observation_delay_ms`] from now.
    pub fn reveal(&self, card_id: CardId) -> Reveal {
        let mut guard = self.session.lock();
        let Some(session) = guard.as_mut() else {
            tracing::trace!(card_id, "reveal without a session");
            return Reveal::Rejected(RejectReason::NoSession);
        };

        match session.reveal(card_id) {
            Reveal::Second { first, second, .. } => {
                let due_at_ms = self
                    .now_ms
                    .lock()
                    .saturating_add(self.options.observation_delay_ms);
                let ticket = self.scheduler.lock().schedule(session.id(), due_at_ms);
                tracing::trace!(session = session.id().0, first, second, due_at_ms, "pair pending");
                Reveal::Second {
                    first,
                    second,
                    ticket: Some(ticket),
                }
            }
            Reveal::Rejected(reason) => {
                tracing::trace!(session = session.id().0, card_id, ?reason, "reveal rejected");
                Reveal::Rejected(reason)
            }
            first @ Reveal::First(_) => first,
        }
    }

    /// Moves the timeline forward by `elapsed_ms`.
    ///
    /// Resolutions fire in due order, each at its own instant, so a winning
    /// match stops the clock at the second it happened rather than at the end
    /// of the step. Resolutions scheduled by a replaced session are dropped.
    ///
    /// Returns the resolutions applied to the active session.
    pub fn advance(&self, elapsed_ms: u64) -> Vec<Resolution> {
        let start = *self.now_ms.lock();
        let target = start.saturating_add(elapsed_ms);
        let mut now = start;
        let mut applied = Vec::new();

        loop {
            let next = self.scheduler.lock().pop_due(target);
            let Some(ticket) = next else {
                break;
            };

            let mut guard = self.session.lock();
            let step = ticket.due_at_ms.saturating_sub(now);
            now = now.max(ticket.due_at_ms);

            match guard.as_mut() {
                Some(session) if session.id() == ticket.session => {
                    session.advance_clock(step);
                    if let Some(resolution) = session.resolve() {
                        log_resolution(session, resolution);
                        applied.push(resolution);
                    }
                }
                Some(session) => {
                    session.advance_clock(step);
                    tracing::trace!(stale = ticket.session.0, "discarding stale resolution");
                }
                None => {
                    tracing::trace!(stale = ticket.session.0, "discarding stale resolution");
                }
            }
        }

        if let Some(session) = self.session.lock().as_mut() {
            session.advance_clock(target - now);
        }
        *self.now_ms.lock() = target;

        applied
    }

    /// Returns a read-only copy of the active session.
    ///
    /// Returns `None` if no game has been started.
    pub fn snapshot(&self) -> Option<Snapshot> {
        let guard = self.session.lock();
        let session = guard.as_ref()?;
        let (difficulty, theme) = self.setup.lock().labels();
        Some(Snapshot::capture(session, difficulty, theme))
    }

    /// Returns the id of the active session.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.lock().as_ref().map(Session::id)
    }

    /// Returns the last chosen difficulty and theme.
    pub fn selection(&self) -> (Difficulty, Theme) {
        *self.selection.lock()
    }

    /// Returns the current instant on the timeline.
    pub fn now_ms(&self) -> u64 {
        *self.now_ms.lock()
    }

    /// Returns whether the active session is won.
    pub fn is_finished(&self) -> bool {
        self.session
            .lock()
            .as_ref()
            .is_some_and(Session::is_finished)
    }

    /// Returns the number of resolutions still queued, stale ones included.
    pub fn queued_resolutions(&self) -> usize {
        self.scheduler.lock().len()
    }
}

fn log_resolution(session: &Session, resolution: Resolution) {
    match resolution {
        Resolution::Matched {
            finished: true, ..
        } => tracing::info!(
            session = session.id().0,
            moves = session.moves(),
            seconds = session.elapsed_seconds(),
            "board cleared"
        ),
        Resolution::Matched { first, second, .. } => {
            tracing::debug!(session = session.id().0, first, second, "pair matched");
        }
        Resolution::Mismatched { first, second } => {
            tracing::debug!(session = session.id().0, first, second, "pair mismatched");
        }
    }
}
