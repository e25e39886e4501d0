//! Cards and their bonus timers.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Card identifier, unique within one game.
pub type CardId = usize;

/// Default window during which a match earns bonus credit.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// A single card on the board.
///
/// Face-up and matched flags only change through [`Card::set_face_up`] and
/// [`Card::mark_matched`], which keep the bonus timer in step with them.
#[derive(Debug, Clone)]
pub struct Card<C> {
    id: CardId,
    content: C,
    is_face_up: bool,
    is_matched: bool,
    bonus_time_limit: Duration,
    /// Face-up time accumulated before the current interval.
    past_face_up_time: Duration,
    /// Start of the open face-up interval, if any.
    last_face_up_at: Option<Instant>,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched card.
    pub fn new(id: CardId, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
            bonus_time_limit,
            past_face_up_time: Duration::ZERO,
            last_face_up_at: None,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// Whether this card is the kind that can be pending: up and unresolved.
    pub fn is_pending(&self) -> bool {
        self.is_face_up && !self.is_matched
    }

    /// Total time spent face-up, including any open interval.
    pub fn face_up_time(&self, now: Instant) -> Duration {
        match self.last_face_up_at {
            Some(since) => self.past_face_up_time + now.saturating_duration_since(since),
            None => self.past_face_up_time,
        }
    }

    /// Bonus time left before the window closes.
    pub fn bonus_time_remaining(&self, now: Instant) -> Duration {
        self.bonus_time_limit.saturating_sub(self.face_up_time(now))
    }

    /// Fraction of the bonus window still available, in `[0, 1]`.
    pub fn bonus_remaining(&self, now: Instant) -> f64 {
        let remaining = self.bonus_time_remaining(now);
        if self.bonus_time_limit.is_zero() || remaining.is_zero() {
            return 0.0;
        }
        (remaining.as_secs_f64() / self.bonus_time_limit.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Matched while some bonus window was still open.
    pub fn has_earned_bonus(&self, now: Instant) -> bool {
        self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Face-up, unmatched and with bonus time left.
    pub fn is_consuming_bonus_time(&self, now: Instant) -> bool {
        self.is_face_up && !self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Flip the card, opening or closing its bonus interval.
    pub fn set_face_up(&mut self, face_up: bool, now: Instant) {
        self.is_face_up = face_up;
        if face_up {
            self.start_using_bonus_time(now);
        } else {
            self.stop_using_bonus_time(now);
        }
    }

    /// Resolve the card. Matching is permanent and freezes the bonus timer.
    pub fn mark_matched(&mut self, now: Instant) {
        self.is_matched = true;
        self.stop_using_bonus_time(now);
    }

    fn start_using_bonus_time(&mut self, now: Instant) {
        if self.is_consuming_bonus_time(now) && self.last_face_up_at.is_none() {
            tracing::trace!(card = self.id, "bonus interval opened");
            self.last_face_up_at = Some(now);
        }
    }

    fn stop_using_bonus_time(&mut self, now: Instant) {
        if let Some(since) = self.last_face_up_at.take() {
            self.past_face_up_time += now.saturating_duration_since(since);
            tracing::trace!(
                card = self.id,
                face_up = ?self.past_face_up_time,
                "bonus interval closed"
            );
        }
    }
}

// Timer bookkeeping is not part of a card's identity.
impl<C: PartialEq> PartialEq for Card<C> {
    fn eq(&self, other: &Self) -> bool {
        self.is_face_up == other.is_face_up
            && self.is_matched == other.is_matched
            && self.content == other.content
            && self.id == other.id
    }
}

impl<C: Eq> Eq for Card<C> {}

/// Read-only view of a card for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView<C> {
    pub id: CardId,
    pub content: C,
    pub is_face_up: bool,
    pub is_matched: bool,
    /// Fraction of bonus left, `0.0..=1.0`.
    pub bonus_remaining: f64,
}

impl<C: Clone> CardView<C> {
    /// Capture a card as seen at `now`.
    pub fn capture(card: &Card<C>, now: Instant) -> Self {
        Self {
            id: card.id,
            content: card.content.clone(),
            is_face_up: card.is_face_up,
            is_matched: card.is_matched,
            bonus_remaining: card.bonus_remaining(now),
        }
    }
}
