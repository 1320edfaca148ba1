//! Tarot draw.

use rand::rngs::StdRng;
use tracing::warn;

use crate::roll::pick;

/// Draw one card uniformly, or `None` from an empty deck.
pub fn draw_tarot(deck: &[String], rng: &mut StdRng) -> Option<String> {
    let card = pick(deck, rng).cloned();
    if card.is_none() {
        warn!("tarot deck empty; no card drawn");
    }
    card
}
