//! The three-card draw.
//!
//! A draw is a small state machine: it starts [`DrawPhase::Idle`], moves
//! through one [`DrawPhase::Revealing`] step per spread position and ends
//! [`DrawPhase::Done`]. Pacing between reveals belongs to whoever drives the
//! sequence; see the session controller.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use shared::domain::{CardId, DrawnCard, LocalizedCard, SpreadPosition};

pub const SPREAD_SIZE: usize = SpreadPosition::ALL.len();
pub const REVERSED_PROBABILITY: f64 = 0.25;

/// Image location for a card, derived from its short code. No request is made.
pub fn image_url(image_base_url: &str, short_code: &str) -> String {
    format!(
        "{}/{}.jpg",
        image_base_url.trim_end_matches('/'),
        short_code.to_lowercase()
    )
}

/// Picks one card for `position`, uniformly from the whole deck.
///
/// Earlier positions do not remove cards from `deck`, so a reading may hold
/// the same card more than once.
pub fn draw_card<R: Rng>(
    deck: &[LocalizedCard],
    position: SpreadPosition,
    image_base_url: &str,
    rng: &mut R,
) -> Option<DrawnCard> {
    if deck.is_empty() {
        return None;
    }

    let card = &deck[rng.random_range(0..deck.len())];
    let reversed = rng.random_bool(REVERSED_PROBABILITY);

    Some(DrawnCard {
        id: CardId::for_draw(card.name(), Utc::now(), position.index()),
        card: card.clone(),
        reversed,
        position,
        image_url: image_url(image_base_url, card.short_code()),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Revealing { next: SpreadPosition },
    Done,
}

/// One draw in flight over a fixed deck.
#[derive(Debug, Clone)]
pub struct DrawSequence {
    deck: Arc<[LocalizedCard]>,
    image_base_url: String,
    phase: DrawPhase,
}

impl DrawSequence {
    /// Returns `None` for an empty deck.
    pub fn new(deck: Arc<[LocalizedCard]>, image_base_url: impl Into<String>) -> Option<Self> {
        if deck.is_empty() {
            return None;
        }
        Some(Self {
            deck,
            image_base_url: image_base_url.into(),
            phase: DrawPhase::Idle,
        })
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == DrawPhase::Done
    }

    pub fn start(&mut self) {
        if self.phase == DrawPhase::Idle {
            self.phase = DrawPhase::Revealing {
                next: SpreadPosition::Past,
            };
        }
    }

    /// Draws the card for the pending position and advances the phase.
    /// Yields nothing unless the sequence is revealing.
    pub fn reveal_next<R: Rng>(&mut self, rng: &mut R) -> Option<DrawnCard> {
        let DrawPhase::Revealing { next } = self.phase else {
            return None;
        };

        let card = draw_card(&self.deck, next, &self.image_base_url, rng)?;
        self.phase = match SpreadPosition::from_index(next.index() + 1) {
            Some(following) => DrawPhase::Revealing { next: following },
            None => DrawPhase::Done,
        };
        Some(card)
    }
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
