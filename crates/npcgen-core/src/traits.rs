//! Virtue/vice trait pairs and quota-driven trait selection.
//!
//! Three pairs are drawn without replacement and each is resolved to one
//! pole. The alignment flavor sets how many virtues, vices, and coin-flip
//! poles the NPC should end up with; once a quota equals the number of pairs
//! left it is forced, so the final mix always matches the quota.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alignment::Flavor;
use crate::error::{NpcError, NpcResult};
use crate::roll::{coin, shuffle};

/// Number of traits rolled per NPC.
pub const TRAITS_PER_NPC: usize = 3;

/// One side of a trait pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pole {
    /// The admirable side ("Brave").
    Virtue,
    /// The flawed side ("Cowardly").
    Vice,
}

impl std::fmt::Display for Pole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Virtue => write!(f, "virtue"),
            Self::Vice => write!(f, "vice"),
        }
    }
}

/// A virtue/vice pair, written as `"Virtue / Vice"` in table files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TraitPair {
    virtue: String,
    vice: String,
}

impl TraitPair {
    /// Separator between the two poles.
    pub const DELIMITER: char = '/';

    /// Split `"Virtue / Vice"` into its two trimmed poles.
    ///
    /// Fails unless there is exactly one delimiter and both sides are
    /// non-empty.
    pub fn parse(s: &str) -> NpcResult<Self> {
        let mut parts = s.split(Self::DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(virtue), Some(vice), None) => {
                let (virtue, vice) = (virtue.trim(), vice.trim());
                if virtue.is_empty() || vice.is_empty() {
                    return Err(NpcError::InvalidTraitPair(s.to_string()));
                }
                Ok(Self::new(virtue, vice))
            }
            _ => Err(NpcError::InvalidTraitPair(s.to_string())),
        }
    }

    /// Build a pair from its two poles.
    pub fn new(virtue: impl Into<String>, vice: impl Into<String>) -> Self {
        Self {
            virtue: virtue.into(),
            vice: vice.into(),
        }
    }

    /// The virtue side.
    pub fn virtue(&self) -> &str {
        &self.virtue
    }

    /// The vice side.
    pub fn vice(&self) -> &str {
        &self.vice
    }

    /// The text of the given pole.
    pub fn side(&self, pole: Pole) -> &str {
        match pole {
            Pole::Virtue => &self.virtue,
            Pole::Vice => &self.vice,
        }
    }
}

impl std::fmt::Display for TraitPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.virtue, Self::DELIMITER, self.vice)
    }
}

impl TryFrom<String> for TraitPair {
    type Error = NpcError;

    fn try_from(s: String) -> NpcResult<Self> {
        Self::parse(&s)
    }
}

impl From<TraitPair> for String {
    fn from(pair: TraitPair) -> Self {
        pair.to_string()
    }
}

/// A resolved trait: the chosen text, which pole it is, and its source pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitPick {
    /// The chosen pole's text.
    pub text: String,
    /// Which pole was chosen.
    pub pole: Pole,
    /// The pair it was drawn from.
    pub pair: TraitPair,
}

/// How many virtues, vices, and coin-flip poles remain to be handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitQuota {
    /// Virtues still wanted.
    pub virtues: usize,
    /// Vices still wanted.
    pub vices: usize,
    /// Poles still to be decided by a coin flip.
    pub random: usize,
}

impl TraitQuota {
    /// Starting quota for an alignment flavor.
    pub fn for_flavor(flavor: Flavor) -> Self {
        let (virtues, vices, random) = match flavor {
            Flavor::Good => (2, 1, 0),
            Flavor::Evil => (1, 2, 0),
            Flavor::Neutral => (1, 1, 1),
        };
        Self {
            virtues,
            vices,
            random,
        }
    }

    /// Choose the pole for the next pair, with `remaining` pairs left
    /// including this one. Guards are tried in order.
    ///
    /// When the coin-flip guard's first flip fails, the pair falls through to
    /// the virtue and vice guards without spending the random quota.
    pub fn choose(&mut self, remaining: usize, rng: &mut StdRng) -> Pole {
        if self.virtues == remaining {
            self.virtues -= 1;
            return Pole::Virtue;
        }
        if self.vices == remaining {
            self.vices -= 1;
            return Pole::Vice;
        }
        if self.random > 0 && coin(rng) {
            self.random -= 1;
            return if coin(rng) { Pole::Virtue } else { Pole::Vice };
        }
        if self.virtues > 0 {
            self.virtues -= 1;
            return Pole::Virtue;
        }
        if self.vices > 0 {
            self.vices -= 1;
            return Pole::Vice;
        }
        Pole::Virtue
    }
}

/// Select up to three traits for an NPC of the given flavor.
///
/// Returns an empty list when the trait table is absent.
pub fn select_traits(
    flavor: Flavor,
    pairs: Option<&[TraitPair]>,
    rng: &mut StdRng,
) -> Vec<TraitPick> {
    let Some(pairs) = pairs else {
        warn!("trait table missing; no traits selected");
        return Vec::new();
    };

    let mut pool = pairs.to_vec();
    shuffle(&mut pool, rng);
    pool.truncate(TRAITS_PER_NPC);

    let mut quota = TraitQuota::for_flavor(flavor);
    let total = pool.len();
    pool.into_iter()
        .enumerate()
        .map(|(i, pair)| {
            let pole = quota.choose(total - i, rng);
            debug!(%pair, %pole, "resolved trait pair");
            TraitPick {
                text: pair.side(pole).to_string(),
                pole,
                pair,
            }
        })
        .collect()
}
