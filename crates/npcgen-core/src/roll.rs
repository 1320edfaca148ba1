//! Shared random utilities: percentile rolls, uniform picks, shuffling, and
//! cumulative-threshold bucket tables.

use rand::Rng;
use rand::rngs::StdRng;

/// Roll a uniform value in `[0, 100)`.
pub fn percentile(rng: &mut StdRng) -> f64 {
    rng.random_range(0.0..100.0)
}

/// Flip a fair coin.
pub fn coin(rng: &mut StdRng) -> bool {
    rng.random_bool(0.5)
}

/// Pick a uniformly random element, or `None` if the slice is empty.
pub fn pick<'a, T>(items: &'a [T], rng: &mut StdRng) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}

/// Shuffle in place (Fisher-Yates, last index down to 1).
pub fn shuffle<T>(items: &mut [T], rng: &mut StdRng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// An ordered list of weighted outcomes selected by one percentile roll.
///
/// Weights accumulate in order; the first outcome whose running total
/// exceeds the roll wins. A roll that clears every threshold lands on the
/// fallback, which therefore receives whatever weight remains below 100.
#[derive(Debug, Clone)]
pub struct Buckets<T> {
    entries: Vec<(f64, T)>,
    fallback: T,
}

impl<T> Buckets<T> {
    /// Build a bucket table from `(weight, outcome)` pairs and a fallback.
    pub fn new(entries: Vec<(f64, T)>, fallback: T) -> Self {
        Self { entries, fallback }
    }

    /// Select the outcome for a roll in `[0, 100)`.
    pub fn select(&self, roll: f64) -> &T {
        let mut cumulative = 0.0;
        for (weight, outcome) in &self.entries {
            cumulative += weight;
            if roll < cumulative {
                return outcome;
            }
        }
        &self.fallback
    }

    /// Roll a percentile and select its outcome.
    pub fn roll(&self, rng: &mut StdRng) -> &T {
        self.select(percentile(rng))
    }
}
