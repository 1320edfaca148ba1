//! Lookup tables and the loader that reads them.
//!
//! Six JSON documents feed the generator:
//!
//! | file              | shape                                         |
//! |-------------------|-----------------------------------------------|
//! | `alignments.json` | NPC type -> `{good, neutral, lawful, neutralEthic}` |
//! | `planes.json`     | `[{plane, alignment: [..]}]`                  |
//! | `species.json`    | fixed weights plus two species lists          |
//! | `traits.json`     | `["Virtue / Vice", ..]`                       |
//! | `classes.json`    | class buckets with spellcasting sub-buckets   |
//! | `tarot.json`      | `["The Fool", ..]`                            |
//!
//! Built-in copies of all six are compiled into the crate and available
//! through [`TableBundle::builtin`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{NpcError, NpcResult};
use crate::traits::TraitPair;

/// File name of the alignment scenario table.
pub const ALIGNMENTS_FILE: &str = "alignments.json";
/// File name of the plane table.
pub const PLANES_FILE: &str = "planes.json";
/// File name of the species weight table.
pub const SPECIES_FILE: &str = "species.json";
/// File name of the trait pair table.
pub const TRAITS_FILE: &str = "traits.json";
/// File name of the class category table.
pub const CLASSES_FILE: &str = "classes.json";
/// File name of the tarot deck.
pub const TAROT_FILE: &str = "tarot.json";

const BUILTIN_ALIGNMENTS: &str = include_str!("../data/alignments.json");
const BUILTIN_PLANES: &str = include_str!("../data/planes.json");
const BUILTIN_SPECIES: &str = include_str!("../data/species.json");
const BUILTIN_TRAITS: &str = include_str!("../data/traits.json");
const BUILTIN_CLASSES: &str = include_str!("../data/classes.json");
const BUILTIN_TAROT: &str = include_str!("../data/tarot.json");

/// Percentages for a scenario-based alignment roll.
///
/// `Evil` and `Chaotic` are not stored; they take whatever remains of 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentScenario {
    /// Chance of Good.
    pub good: f64,
    /// Chance of Neutral on the good/evil axis.
    pub neutral: f64,
    /// Chance of Lawful.
    pub lawful: f64,
    /// Chance of Neutral on the lawful/chaotic axis.
    pub neutral_ethic: f64,
}

/// Alignment scenarios keyed by NPC type.
pub type ScenarioTable = BTreeMap<String, AlignmentScenario>;

/// A plane of existence and the alignments it can impart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Plane name.
    pub plane: String,
    /// Candidate alignment strings; compound strings are allowed.
    pub alignment: Vec<String>,
}

/// Species weights. The remainder of 100 goes to `weird_shapechanged`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesWeights {
    /// Chance of Human.
    pub human: f64,
    /// Chance of Dwarf.
    pub dwarf: f64,
    /// Chance of Orc.
    pub orc: f64,
    /// Chance of Halfling.
    pub halfling: f64,
    /// Chance of drawing from `phb_spellcasters`.
    pub phb_spellcasters_percent: f64,
    /// Spellcasting species from the player's handbook.
    pub phb_spellcasters: Vec<String>,
    /// Fallback bucket of unusual or shapechanged species.
    pub weird_shapechanged: Vec<String>,
}

/// Class names grouped by play style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCategories {
    /// Front-line fighters.
    pub combat: Vec<String>,
    /// Sneaks and scouts.
    pub stealth: Vec<String>,
    /// Scholars and experts.
    pub knowledge: Vec<String>,
    /// Casters, split by casting ability.
    pub spellcasting: SpellcastingClasses,
}

/// Spellcasting classes split by casting ability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellcastingClasses {
    /// Intelligence casters.
    pub int: Vec<String>,
    /// Wisdom casters.
    pub wis: Vec<String>,
    /// Charisma casters.
    pub cha: Vec<String>,
    /// Multiclass casters.
    pub multi: Vec<String>,
}

/// The frozen set of tables a generator rolls against.
///
/// `species`, `traits`, and `classes` are optional: when absent, the matching
/// picker yields nothing and generation carries on.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBundle {
    /// Alignment scenarios by NPC type.
    pub scenarios: ScenarioTable,
    /// Planes of existence.
    pub planes: Vec<Plane>,
    /// Species weights.
    pub species: Option<SpeciesWeights>,
    /// Virtue/vice trait pairs.
    pub traits: Option<Vec<TraitPair>>,
    /// Class categories.
    pub classes: Option<ClassCategories>,
    /// Tarot deck.
    pub tarot: Vec<String>,
}

impl TableBundle {
    /// Parse the built-in tables shipped with the crate.
    pub fn builtin() -> NpcResult<Self> {
        Ok(Self {
            scenarios: parse_table(ALIGNMENTS_FILE, BUILTIN_ALIGNMENTS)?,
            planes: parse_table(PLANES_FILE, BUILTIN_PLANES)?,
            species: Some(parse_table(SPECIES_FILE, BUILTIN_SPECIES)?),
            traits: Some(parse_table(TRAITS_FILE, BUILTIN_TRAITS)?),
            classes: Some(parse_table(CLASSES_FILE, BUILTIN_CLASSES)?),
            tarot: parse_table(TAROT_FILE, BUILTIN_TAROT)?,
        })
    }

    /// Load all six tables from a directory.
    ///
    /// Every file must be present and well-formed; the first failure aborts
    /// the load.
    pub fn load_dir(dir: &Path) -> NpcResult<Self> {
        let bundle = Self {
            scenarios: read_table(dir, ALIGNMENTS_FILE)?,
            planes: read_table(dir, PLANES_FILE)?,
            species: Some(read_table(dir, SPECIES_FILE)?),
            traits: Some(read_table(dir, TRAITS_FILE)?),
            classes: Some(read_table(dir, CLASSES_FILE)?),
            tarot: read_table(dir, TAROT_FILE)?,
        };
        info!(
            dir = %dir.display(),
            npc_types = bundle.scenarios.len(),
            planes = bundle.planes.len(),
            tarot = bundle.tarot.len(),
            "loaded tables"
        );
        Ok(bundle)
    }

    /// NPC types with a scenario entry, in sorted order.
    pub fn npc_types(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }
}

fn read_table<T: DeserializeOwned>(dir: &Path, name: &str) -> NpcResult<T> {
    let path = dir.join(name);
    let text = std::fs::read_to_string(&path).map_err(|source| NpcError::TableRead {
        path: path.clone(),
        source,
    })?;
    parse_table(name, &text)
}

fn parse_table<T: DeserializeOwned>(name: &str, text: &str) -> NpcResult<T> {
    serde_json::from_str(text).map_err(|source| NpcError::TableParse {
        table: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_builtin(dir: &Path) {
        for (name, text) in [
            (ALIGNMENTS_FILE, BUILTIN_ALIGNMENTS),
            (PLANES_FILE, BUILTIN_PLANES),
            (SPECIES_FILE, BUILTIN_SPECIES),
            (TRAITS_FILE, BUILTIN_TRAITS),
            (CLASSES_FILE, BUILTIN_CLASSES),
            (TAROT_FILE, BUILTIN_TAROT),
        ] {
            std::fs::write(dir.join(name), text).unwrap();
        }
    }

    #[test]
    fn builtin_tables_parse() {
        let tables = TableBundle::builtin().unwrap();
        assert!(!tables.scenarios.is_empty());
        assert!(!tables.planes.is_empty());
        assert!(tables.species.is_some());
        assert!(tables.traits.as_ref().is_some_and(|t| t.len() >= 3));
        assert!(tables.classes.is_some());
        assert_eq!(tables.tarot.len(), 22);
    }

    #[test]
    fn load_dir_matches_builtin() {
        let dir = TempDir::new().unwrap();
        write_builtin(dir.path());
        let loaded = TableBundle::load_dir(dir.path()).unwrap();
        assert_eq!(loaded, TableBundle::builtin().unwrap());
    }

    #[test]
    fn load_dir_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        write_builtin(dir.path());
        std::fs::remove_file(dir.path().join(TAROT_FILE)).unwrap();
        let err = TableBundle::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, NpcError::TableRead { .. }));
        assert!(err.to_string().contains("tarot.json"));
    }

    #[test]
    fn load_dir_bad_json_fails() {
        let dir = TempDir::new().unwrap();
        write_builtin(dir.path());
        std::fs::write(dir.path().join(CLASSES_FILE), "{ not json").unwrap();
        let err = TableBundle::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, NpcError::TableParse { ref table, .. } if table == CLASSES_FILE));
    }

    #[test]
    fn load_dir_rejects_malformed_trait_pair() {
        let dir = TempDir::new().unwrap();
        write_builtin(dir.path());
        std::fs::write(dir.path().join(TRAITS_FILE), r#"["Brave / Cowardly", "Sneaky"]"#)
            .unwrap();
        let err = TableBundle::load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Sneaky"));
    }

    #[test]
    fn scenario_uses_camel_case_keys() {
        let s: AlignmentScenario = serde_json::from_str(
            r#"{"good": 10, "neutral": 20, "lawful": 30, "neutralEthic": 40}"#,
        )
        .unwrap();
        assert!((s.neutral_ethic - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn npc_types_are_sorted() {
        let tables = TableBundle::builtin().unwrap();
        let types: Vec<_> = tables.npc_types().collect();
        let mut sorted = types.clone();
        sorted.sort_unstable();
        assert_eq!(types, sorted);
        assert!(types.contains(&"guard"));
    }
}
