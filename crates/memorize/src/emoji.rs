//! Emoji deck on top of the matching engine.

use crate::config::Config;
use memory_game::{Card, CardId, CardView, ChooseOutcome, Clock, MemoryGame, MonotonicClock};

/// Built-in deck.
pub const VEHICLES: [&str; 20] = [
    "🚂", "🚀", "🚁", "🚜", "🚕", "🏎️", "🚑", "🚓", "🚒", "✈️",
    "🚲", "🛸", "⛵️", "🛶", "🚚", "🛵", "🏍️", "🛺", "🚢", "🛰️",
];

/// Shown when the deck has more pairs than emojis.
pub const FALLBACK_EMOJI: &str = "⁉️";

pub type EmojiCard = Card<String>;

/// Emoji memory game with the intents a front end invokes.
#[derive(Debug, Clone)]
pub struct EmojiMemoryGame<K = MonotonicClock> {
    config: Config,
    clock: K,
    model: MemoryGame<String, K>,
}

impl EmojiMemoryGame<MonotonicClock> {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, MonotonicClock)
    }
}

impl Default for EmojiMemoryGame<MonotonicClock> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<K: Clock + Clone> EmojiMemoryGame<K> {
    pub fn with_clock(config: Config, clock: K) -> Self {
        let model = Self::create_memory_game(&config, clock.clone());
        Self { config, clock, model }
    }

    fn create_memory_game(config: &Config, clock: K) -> MemoryGame<String, K> {
        let emojis: Vec<String> = match &config.theme.emojis {
            Some(custom) => custom.clone(),
            None => VEHICLES.iter().map(|e| e.to_string()).collect(),
        };
        MemoryGame::with_options(&config.game.to_options(), clock, |pair_index| {
            emojis
                .get(pair_index)
                .cloned()
                .unwrap_or_else(|| FALLBACK_EMOJI.to_string())
        })
    }

    pub fn cards(&self) -> &[EmojiCard] {
        self.model.cards()
    }

    pub fn snapshot(&self) -> Vec<CardView<String>> {
        self.model.snapshot()
    }

    pub fn is_complete(&self) -> bool {
        self.model.is_complete()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn model(&self) -> &MemoryGame<String, K> {
        &self.model
    }

    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        self.model.choose(id)
    }

    pub fn shuffle(&mut self) {
        self.model.shuffle();
    }

    /// Throw away the board and deal a new one.
    pub fn restart(&mut self) {
        tracing::info!(theme = %self.config.theme.name, "restarting game");
        self.model = Self::create_memory_game(&self.config, self.clock.clone());
    }
}
