//! Alignment resolution.
//!
//! Half the time an NPC type with a scenario entry rolls its alignment from
//! that scenario's percentages; otherwise a random plane supplies one of its
//! alignment strings. Either way the display string is reduced to a coarse
//! [`Flavor`] that steers trait selection.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::{NpcError, NpcResult};
use crate::roll::{Buckets, pick};
use crate::tables::{AlignmentScenario, Plane, ScenarioTable};

/// Chance of taking the scenario path when the NPC type has a scenario.
pub const SCENARIO_CHANCE: f64 = 0.5;

/// Plane label reported for scenario-based alignments.
pub const SCENARIO_PLANE_LABEL: &str = "Scenario-based, not a specific plane";

/// Display string when both axes roll Neutral.
pub const TRUE_NEUTRAL: &str = "True Neutral";

/// Coarse moral category of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Contains "good".
    Good,
    /// Contains "evil".
    Evil,
    /// Neither.
    Neutral,
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Evil => write!(f, "evil"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Derive the flavor of an alignment string by substring.
///
/// "evil" is checked before "good", so a compound string such as
/// `"Neutral Good Lawful Evil"` is evil.
pub fn derive_flavor(alignment: &str) -> Flavor {
    let lower = alignment.to_lowercase();
    if lower.contains("evil") {
        Flavor::Evil
    } else if lower.contains("good") {
        Flavor::Good
    } else {
        Flavor::Neutral
    }
}

/// Good/evil axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoralAxis {
    /// Good.
    Good,
    /// Neutral.
    Neutral,
    /// Evil.
    Evil,
}

impl std::fmt::Display for MoralAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Evil => write!(f, "Evil"),
        }
    }
}

/// Lawful/chaotic axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EthicalAxis {
    /// Lawful.
    Lawful,
    /// Neutral.
    Neutral,
    /// Chaotic.
    Chaotic,
}

impl std::fmt::Display for EthicalAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lawful => write!(f, "Lawful"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Chaotic => write!(f, "Chaotic"),
        }
    }
}

/// Where a resolved alignment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentSource {
    /// Rolled from the NPC type's scenario percentages.
    Scenario,
    /// Taken from a random plane.
    Plane,
}

/// The outcome of alignment resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAlignment {
    /// Display string, e.g. "Lawful Good" or a compound plane alignment.
    pub display: String,
    /// Coarse flavor derived from `display`.
    pub flavor: Flavor,
    /// Plane name, or [`SCENARIO_PLANE_LABEL`].
    pub plane: String,
    /// Which path produced the alignment.
    pub source: AlignmentSource,
}

/// Roll a two-axis alignment from scenario percentages.
pub fn pick_scenario_alignment(scenario: &AlignmentScenario, rng: &mut StdRng) -> String {
    let moral = *Buckets::new(
        vec![
            (scenario.good, MoralAxis::Good),
            (scenario.neutral, MoralAxis::Neutral),
        ],
        MoralAxis::Evil,
    )
    .roll(rng);
    let ethical = *Buckets::new(
        vec![
            (scenario.lawful, EthicalAxis::Lawful),
            (scenario.neutral_ethic, EthicalAxis::Neutral),
        ],
        EthicalAxis::Chaotic,
    )
    .roll(rng);

    match (ethical, moral) {
        (EthicalAxis::Neutral, MoralAxis::Neutral) => TRUE_NEUTRAL.to_string(),
        _ => format!("{ethical} {moral}"),
    }
}

/// Resolve an alignment for an NPC type.
///
/// The scenario path is only possible when `scenarios` has an entry for
/// `npc_type`; otherwise the plane path is taken regardless of the draw.
pub fn resolve_alignment(
    npc_type: &str,
    scenarios: &ScenarioTable,
    planes: &[Plane],
    rng: &mut StdRng,
) -> NpcResult<ResolvedAlignment> {
    let draw: f64 = rng.random();

    match scenarios.get(npc_type) {
        Some(scenario) if draw < SCENARIO_CHANCE => {
            let alignment = pick_scenario_alignment(scenario, rng);
            debug!(npc_type, display = %alignment, "scenario alignment");
            Ok(ResolvedAlignment {
                flavor: derive_flavor(&alignment),
                display: alignment,
                plane: SCENARIO_PLANE_LABEL.to_string(),
                source: AlignmentSource::Scenario,
            })
        }
        _ => {
            let plane = pick(planes, rng).ok_or(NpcError::NoPlanes)?;
            let alignment = pick(&plane.alignment, rng)
                .ok_or_else(|| NpcError::EmptyPlane(plane.plane.clone()))?
                .clone();
            debug!(npc_type, plane = %plane.plane, display = %alignment, "plane alignment");
            Ok(ResolvedAlignment {
                flavor: derive_flavor(&alignment),
                display: alignment,
                plane: plane.plane.clone(),
                source: AlignmentSource::Plane,
            })
        }
    }
}
