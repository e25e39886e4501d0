//! # memory-game
//!
//! Engine for a card-matching game of pairs.
//!
//! ## Features
//!
//! - Generic card content, anything with `PartialEq + Clone`
//! - Pending-card matching with a visible mismatch step
//! - Per-card bonus timer driven by a pluggable monotonic [`Clock`]
//! - Seedable deals for reproducible games
//!
//! ```
//! use memory_game::{ChooseOutcome, MemoryGame};
//!
//! let mut game = MemoryGame::new(2, |i| ["A", "B"][i]);
//! assert_eq!(game.choose(0), ChooseOutcome::Flipped(0));
//! assert_eq!(game.choose(1), ChooseOutcome::Matched(0, 1));
//! ```

mod card;
mod clock;
mod game;

pub use card::{Card, CardId, CardView, DEFAULT_BONUS_TIME_LIMIT};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use game::{ChooseOutcome, GameOptions, MemoryGame, MAX_PAIRS, MIN_PAIRS};
