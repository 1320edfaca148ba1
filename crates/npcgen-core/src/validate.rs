//! Consistency checks over a loaded table bundle.
//!
//! Loading only rejects files that fail to parse. These checks look for
//! tables that parse but would roll oddly: percentages that overflow 100,
//! empty buckets, or planes with nothing to offer.

use crate::tables::TableBundle;
use crate::traits::TRAITS_PER_NPC;

/// A warning or error found while checking tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIssue {
    /// The table (and entry, if any) the issue belongs to.
    pub table: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl TableIssue {
    fn warning(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            message: message.into(),
            is_error: false,
        }
    }

    fn error(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            message: message.into(),
            is_error: true,
        }
    }
}

impl std::fmt::Display for TableIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.table, self.message)
    }
}

impl TableBundle {
    /// Check the bundle for inconsistencies.
    pub fn validate(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();
        self.validate_scenarios(&mut issues);
        self.validate_planes(&mut issues);
        self.validate_species(&mut issues);
        self.validate_traits(&mut issues);
        self.validate_classes(&mut issues);
        if self.tarot.is_empty() {
            issues.push(TableIssue::warning("tarot", "deck is empty"));
        }
        issues
    }

    fn validate_scenarios(&self, issues: &mut Vec<TableIssue>) {
        for (npc_type, s) in &self.scenarios {
            let table = format!("alignments '{npc_type}'");
            if [s.good, s.neutral, s.lawful, s.neutral_ethic]
                .iter()
                .any(|p| *p < 0.0)
            {
                issues.push(TableIssue::warning(&table, "negative percentage"));
            }
            if s.good + s.neutral > 100.0 {
                issues.push(TableIssue::warning(
                    &table,
                    format!("good + neutral = {} exceeds 100", s.good + s.neutral),
                ));
            }
            if s.lawful + s.neutral_ethic > 100.0 {
                issues.push(TableIssue::warning(
                    &table,
                    format!(
                        "lawful + neutralEthic = {} exceeds 100",
                        s.lawful + s.neutral_ethic
                    ),
                ));
            }
        }
    }

    fn validate_planes(&self, issues: &mut Vec<TableIssue>) {
        if self.planes.is_empty() {
            issues.push(TableIssue::error("planes", "no planes defined"));
        }
        for plane in &self.planes {
            if plane.alignment.is_empty() {
                issues.push(TableIssue::error(
                    format!("planes '{}'", plane.plane),
                    "no alignments",
                ));
            }
        }
    }

    fn validate_species(&self, issues: &mut Vec<TableIssue>) {
        let Some(w) = &self.species else {
            issues.push(TableIssue::warning("species", "table missing"));
            return;
        };
        let total = w.human + w.dwarf + w.orc + w.halfling + w.phb_spellcasters_percent;
        if total > 100.0 {
            issues.push(TableIssue::warning(
                "species",
                format!("weights sum to {total}, leaving nothing for weirdShapechanged"),
            ));
        }
        if w.phb_spellcasters_percent > 0.0 && w.phb_spellcasters.is_empty() {
            issues.push(TableIssue::warning("species", "phbSpellcasters is empty"));
        }
        if total < 100.0 && w.weird_shapechanged.is_empty() {
            issues.push(TableIssue::warning("species", "weirdShapechanged is empty"));
        }
    }

    fn validate_traits(&self, issues: &mut Vec<TableIssue>) {
        match &self.traits {
            None => issues.push(TableIssue::warning("traits", "table missing")),
            Some(pairs) if pairs.len() < TRAITS_PER_NPC => issues.push(TableIssue::warning(
                "traits",
                format!(
                    "only {} pairs; NPCs will get fewer than {TRAITS_PER_NPC} traits",
                    pairs.len()
                ),
            )),
            Some(_) => {}
        }
    }

    fn validate_classes(&self, issues: &mut Vec<TableIssue>) {
        let Some(c) = &self.classes else {
            issues.push(TableIssue::warning("classes", "table missing"));
            return;
        };
        let buckets = [
            ("combat", &c.combat),
            ("stealth", &c.stealth),
            ("knowledge", &c.knowledge),
            ("spellcasting.int", &c.spellcasting.int),
            ("spellcasting.wis", &c.spellcasting.wis),
            ("spellcasting.cha", &c.spellcasting.cha),
            ("spellcasting.multi", &c.spellcasting.multi),
        ];
        for (name, names) in buckets {
            if names.is_empty() {
                issues.push(TableIssue::warning(
                    "classes",
                    format!("bucket '{name}' is empty"),
                ));
            }
        }
    }
}
