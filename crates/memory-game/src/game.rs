//! The matching game state machine.

use crate::card::{Card, CardId, CardView, DEFAULT_BONUS_TIME_LIMIT};
use crate::clock::{Clock, MonotonicClock};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Smallest playable deck, in pairs.
pub const MIN_PAIRS: usize = 2;

/// Largest deck, in pairs. Larger requests are lowered to this.
pub const MAX_PAIRS: usize = 4096;

/// Options for dealing a new game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of pairs, clamped to [`MIN_PAIRS`]`..=`[`MAX_PAIRS`].
    pub number_of_pairs: usize,
    /// Bonus window per card. Zero disables bonus.
    pub bonus_time_limit: Duration,
    /// Seed for deterministic deals.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            number_of_pairs: MIN_PAIRS,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
            seed: None,
        }
    }
}

impl GameOptions {
    /// Options for `number_of_pairs` pairs with default timing.
    pub fn with_pairs(number_of_pairs: usize) -> Self {
        Self {
            number_of_pairs,
            ..Self::default()
        }
    }

    /// Set the bonus window.
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Set the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// What a call to [`MemoryGame::choose`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Unknown, face-up or matched card; nothing changed.
    Ignored,
    /// The card became the only face-up card.
    Flipped(CardId),
    /// The card matched the pending one.
    Matched(CardId, CardId),
    /// The card did not match; both stay face-up until the next choice.
    Mismatched(CardId, CardId),
}

/// A game of pairs over content `C`, timed by clock `K`.
#[derive(Debug, Clone)]
pub struct MemoryGame<C, K = MonotonicClock> {
    cards: Vec<Card<C>>,
    clock: K,
    rng: StdRng,
}

impl<C: PartialEq + Clone> MemoryGame<C, MonotonicClock> {
    /// Deal `number_of_pairs` pairs with default timing and a random order.
    pub fn new(number_of_pairs: usize, content_at: impl FnMut(usize) -> C) -> Self {
        Self::with_options(&GameOptions::with_pairs(number_of_pairs), MonotonicClock, content_at)
    }
}

impl<C: PartialEq + Clone, K: Clock> MemoryGame<C, K> {
    /// Deal a game. `content_at` is called once per pair index.
    pub fn with_options(
        options: &GameOptions,
        clock: K,
        mut content_at: impl FnMut(usize) -> C,
    ) -> Self {
        let number_of_pairs = options.number_of_pairs.clamp(MIN_PAIRS, MAX_PAIRS);
        let mut cards = Vec::with_capacity(number_of_pairs * 2);
        for pair_index in 0..number_of_pairs {
            let content = content_at(pair_index);
            cards.push(Card::new(pair_index * 2, content.clone(), options.bonus_time_limit));
            cards.push(Card::new(pair_index * 2 + 1, content, options.bonus_time_limit));
        }

        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut game = Self { cards, clock, rng };
        game.shuffle();
        tracing::debug!(pairs = number_of_pairs, "dealt new game");
        game
    }

    /// Cards in deal order.
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Look up a card by id.
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Position of a card in deal order.
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// Current time as seen by the game's clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Number of resolved pairs.
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }

    /// Every card has been matched.
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched())
    }

    /// Render-ready copy of the board at the current instant.
    pub fn snapshot(&self) -> Vec<CardView<C>> {
        let now = self.now();
        self.cards.iter().map(|c| CardView::capture(c, now)).collect()
    }

    /// Reorder the cards uniformly at random. Card state is untouched.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        tracing::debug!(cards = self.cards.len(), "shuffled");
    }

    /// Flip the card with `id`, resolving it against the pending card if any.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        let Some(chosen) = self.index_of(id) else {
            tracing::debug!(card = id, "choose ignored: unknown card");
            return ChooseOutcome::Ignored;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            tracing::debug!(card = id, "choose ignored: card already in play");
            return ChooseOutcome::Ignored;
        }

        let now = self.now();
        let outcome = match self.pending_index() {
            Some(pending) => {
                let pending_id = self.cards[pending].id();
                let matched = self.cards[chosen].content() == self.cards[pending].content();
                if matched {
                    self.cards[chosen].mark_matched(now);
                    self.cards[pending].mark_matched(now);
                }
                self.cards[chosen].set_face_up(true, now);
                if matched {
                    ChooseOutcome::Matched(pending_id, id)
                } else {
                    ChooseOutcome::Mismatched(pending_id, id)
                }
            }
            None => {
                self.set_sole_face_up(chosen, now);
                ChooseOutcome::Flipped(id)
            }
        };

        tracing::debug!(card = id, ?outcome, "chose card");
        outcome
    }

    /// Index of the one and only face-up, unmatched card.
    fn pending_index(&self) -> Option<usize> {
        let mut pending = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_pending())
            .map(|(i, _)| i);
        match (pending.next(), pending.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// Turn every card face-down except the one at `index`.
    fn set_sole_face_up(&mut self, index: usize, now: Instant) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.set_face_up(i == index, now);
        }
    }
}
