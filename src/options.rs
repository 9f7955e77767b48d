//! Game configuration options and preset tables.

use crate::card::Symbol;

/// Board dimensions for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Number of symbol pairs on the board.
    pub pairs: usize,
    /// Number of columns presentation should lay the cards out in.
    pub grid_columns: usize,
}

impl Layout {
    /// Creates a layout.
    #[must_use]
    pub const fn new(pairs: usize, grid_columns: usize) -> Self {
        Self {
            pairs,
            grid_columns,
        }
    }

    /// Returns the number of cards on the board.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.pairs * 2
    }
}

/// Difficulty preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// 6 pairs in 3 columns.
    Easy,
    /// 8 pairs in 4 columns.
    #[default]
    Medium,
    /// 12 pairs in 4 columns.
    Hard,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the board layout for this preset.
    #[must_use]
    pub const fn layout(self) -> Layout {
        match self {
            Self::Easy => Layout::new(6, 3),
            Self::Medium => Layout::new(8, 4),
            Self::Hard => Layout::new(12, 4),
        }
    }

    /// Returns the lowercase name of the preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parses a preset name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name.trim()))
    }
}

const SPACE: [Symbol; 12] = [
    "🚀", "🛸", "🪐", "🌎", "🌙", "☄️", "👽", "🌟", "🌠", "🌌", "🔭", "🛰️",
];

const JUNGLE: [Symbol; 12] = [
    "🐒", "🦁", "🐘", "🦒", "🦜", "🐍", "🦋", "🌴", "🍌", "🥥", "🌺", "🦚",
];

/// Symbol theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Rockets, planets and stars.
    #[default]
    Space,
    /// Animals and fruit.
    Jungle,
}

impl Theme {
    /// All themes.
    pub const ALL: [Self; 2] = [Self::Space, Self::Jungle];

    /// Returns the symbol pool. Only the first `pairs` symbols of the pool
    /// take part in a game.
    #[must_use]
    pub const fn symbols(self) -> &'static [Symbol] {
        match self {
            Self::Space => &SPACE,
            Self::Jungle => &JUNGLE,
        }
    }

    /// Returns the lowercase name of the theme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Jungle => "jungle",
        }
    }

    /// Parses a theme name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pairs::{Difficulty, GameOptions, Theme};
///
/// let options = GameOptions::default()
///     .with_difficulty(Difficulty::Hard)
///     .with_theme(Theme::Jungle)
///     .with_observation_delay_ms(600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// How long two revealed cards stay face up before the pair is resolved.
    pub observation_delay_ms: u64,
    /// Length of one clock second on the caller's timeline.
    pub clock_interval_ms: u64,
    /// Difficulty used by [`Game::restart`](crate::Game::restart) before any
    /// game has been started.
    pub difficulty: Difficulty,
    /// Theme used by [`Game::restart`](crate::Game::restart) before any game
    /// has been started.
    pub theme: Theme,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            observation_delay_ms: 1000,
            clock_interval_ms: 1000,
            difficulty: Difficulty::Medium,
            theme: Theme::Space,
        }
    }
}

impl GameOptions {
    /// Sets the observation delay.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::GameOptions;
    ///
    /// let options = GameOptions::default().with_observation_delay_ms(250);
    /// assert_eq!(options.observation_delay_ms, 250);
    /// ```
    #[must_use]
    pub const fn with_observation_delay_ms(mut self, delay_ms: u64) -> Self {
        self.observation_delay_ms = delay_ms;
        self
    }

    /// Sets the clock interval.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::GameOptions;
    ///
    /// let options = GameOptions::default().with_clock_interval_ms(10);
    /// assert_eq!(options.clock_interval_ms, 10);
    /// ```
    #[must_use]
    pub const fn with_clock_interval_ms(mut self, interval_ms: u64) -> Self {
        self.clock_interval_ms = interval_ms;
        self
    }

    /// Sets the initial difficulty.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the initial theme.
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
