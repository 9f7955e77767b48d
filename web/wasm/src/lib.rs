use pairs::{CardState, CardView, Difficulty, Game, GameOptions, Resolution, Snapshot, Theme};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn start_new_game(&self, difficulty: &str, theme: &str) -> Result<(), JsValue> {
        let difficulty = Difficulty::from_name(difficulty)
            .ok_or_else(|| JsValue::from_str("unknown difficulty"))?;
        let theme = Theme::from_name(theme).ok_or_else(|| JsValue::from_str("unknown theme"))?;
        self.game.start_new_game(difficulty, theme).map_err(js_err)
    }

    pub fn restart(&self) -> Result<(), JsValue> {
        self.game.restart().map_err(js_err)
    }

    /// Returns whether the reveal was accepted.
    pub fn reveal(&self, card_id: u32) -> bool {
        self.game.reveal(card_id as usize).is_accepted()
    }

    /// Advances the timeline and returns the resolutions that fired.
    pub fn advance(&self, elapsed_ms: u32) -> Result<JsValue, JsValue> {
        let resolutions: Vec<JsResolution> = self
            .game
            .advance(u64::from(elapsed_ms))
            .into_iter()
            .map(JsResolution::from)
            .collect();
        to_js_value(&resolutions)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.game.snapshot().map(JsSnapshot::from);
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    cards: Vec<JsCard>,
    moves: u32,
    elapsed_seconds: u32,
    finished: bool,
    pairs: u32,
    matched_pairs: u32,
    grid_columns: u32,
    difficulty: Option<&'static str>,
    theme: Option<&'static str>,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            cards: snapshot.cards.iter().map(JsCard::from).collect(),
            moves: snapshot.moves,
            elapsed_seconds: snapshot.elapsed_seconds,
            finished: snapshot.finished,
            pairs: snapshot.pairs as u32,
            matched_pairs: snapshot.matched_pairs as u32,
            grid_columns: snapshot.grid_columns as u32,
            difficulty: snapshot.difficulty.map(Difficulty::name),
            theme: snapshot.theme.map(Theme::name),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    id: u32,
    symbol: Option<&'static str>,
    state: &'static str,
}

impl From<&CardView> for JsCard {
    fn from(card: &CardView) -> Self {
        Self {
            id: card.id as u32,
            symbol: card.symbol,
            state: state_to_str(card.state),
        }
    }
}

#[derive(Serialize)]
struct JsResolution {
    matched: bool,
    first: u32,
    second: u32,
    finished: bool,
}

impl From<Resolution> for JsResolution {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Matched {
                first,
                second,
                finished,
            } => Self {
                matched: true,
                first: first as u32,
                second: second as u32,
                finished,
            },
            Resolution::Mismatched { first, second } => Self {
                matched: false,
                first: first as u32,
                second: second as u32,
                finished: false,
            },
        }
    }
}

fn state_to_str(state: CardState) -> &'static str {
    match state {
        CardState::Hidden => "Hidden",
        CardState::Revealed => "Revealed",
        CardState::Matched => "Matched",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
