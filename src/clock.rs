//! Elapsed-time counter for a session.

/// Counts whole seconds of play on the caller's timeline.
///
/// The clock never reads wall time. The owner feeds it elapsed milliseconds
/// through [`GameClock::advance`], and every full interval while running adds
/// one second.
///
/// ```
/// use pairs::GameClock;
///
/// let mut clock = GameClock::new(1000);
/// clock.start();
/// clock.advance(2500);
/// assert_eq!(clock.current_seconds(), 2);
/// clock.stop();
/// clock.advance(5000);
/// assert_eq!(clock.current_seconds(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameClock {
    interval_ms: u64,
    running: bool,
    seconds: u32,
    /// Milliseconds accumulated toward the next tick.
    carry_ms: u64,
}

impl GameClock {
    /// Creates a stopped clock at zero. A zero interval is treated as 1 ms.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            running: false,
            seconds: 0,
            carry_ms: 0,
        }
    }

    /// Starts ticking. Does nothing if already running.
    pub const fn start(&mut self) {
        self.running = true;
    }

    /// Stops ticking and keeps the current count.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Returns whether the clock is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the elapsed whole seconds.
    #[must_use]
    pub const fn current_seconds(&self) -> u32 {
        self.seconds
    }

    /// Feeds elapsed time to the clock. Ignored while stopped.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if !self.running {
            return;
        }

        self.carry_ms = self.carry_ms.saturating_add(elapsed_ms);
        let ticks = self.carry_ms / self.interval_ms;
        self.carry_ms %= self.interval_ms;
        self.seconds = self
            .seconds
            .saturating_add(u32::try_from(ticks).unwrap_or(u32::MAX));
    }
}
