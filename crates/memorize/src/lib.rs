//! Memorize - emoji memory game.
//!
//! Wraps the [`memory_game`] engine with an emoji deck, TOML configuration
//! and the restart/shuffle/choose intents a front end calls.

pub mod config;
pub mod emoji;
pub mod error;

pub use config::{Config, GameConfig, ThemeConfig};
pub use emoji::{EmojiCard, EmojiMemoryGame, FALLBACK_EMOJI, VEHICLES};
pub use error::{ConfigError, ConfigResult};
