//! Class picker.
//!
//! One percentile roll chooses combat, stealth, knowledge (30% each) or
//! spellcasting (10%); spellcasting rolls again over int/wis/cha (30% each)
//! and multiclass (10%).

use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::roll::{Buckets, pick};
use crate::tables::ClassCategories;

/// Top-level class bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassBucket {
    /// Front-line fighters.
    Combat,
    /// Sneaks and scouts.
    Stealth,
    /// Scholars and experts.
    Knowledge,
    /// Casters; resolved by a second roll.
    Spellcasting,
}

/// Spellcasting sub-bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasterBucket {
    /// Intelligence.
    Int,
    /// Wisdom.
    Wis,
    /// Charisma.
    Cha,
    /// Multiclass.
    Multi,
}

fn class_buckets() -> Buckets<ClassBucket> {
    Buckets::new(
        vec![
            (30.0, ClassBucket::Combat),
            (30.0, ClassBucket::Stealth),
            (30.0, ClassBucket::Knowledge),
        ],
        ClassBucket::Spellcasting,
    )
}

fn caster_buckets() -> Buckets<CasterBucket> {
    Buckets::new(
        vec![
            (30.0, CasterBucket::Int),
            (30.0, CasterBucket::Wis),
            (30.0, CasterBucket::Cha),
        ],
        CasterBucket::Multi,
    )
}

/// Pick a class, or `None` if the table is absent or the chosen bucket is
/// empty.
pub fn pick_class(classes: Option<&ClassCategories>, rng: &mut StdRng) -> Option<String> {
    let Some(classes) = classes else {
        warn!("class table missing; no class selected");
        return None;
    };

    let bucket = *class_buckets().roll(rng);
    let names = match bucket {
        ClassBucket::Combat => &classes.combat,
        ClassBucket::Stealth => &classes.stealth,
        ClassBucket::Knowledge => &classes.knowledge,
        ClassBucket::Spellcasting => {
            let caster = *caster_buckets().roll(rng);
            debug!(?caster, "spellcasting sub-bucket");
            match caster {
                CasterBucket::Int => &classes.spellcasting.int,
                CasterBucket::Wis => &classes.spellcasting.wis,
                CasterBucket::Cha => &classes.spellcasting.cha,
                CasterBucket::Multi => &classes.spellcasting.multi,
            }
        }
    };
    debug!(?bucket, "class bucket");
    pick(names, rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::SpellcastingClasses;
    use rand::SeedableRng;

    fn one_each() -> ClassCategories {
        ClassCategories {
            combat: vec!["Fighter".to_string()],
            stealth: vec!["Rogue".to_string()],
            knowledge: vec!["Bard".to_string()],
            spellcasting: SpellcastingClasses {
                int: vec!["Wizard".to_string()],
                wis: vec!["Cleric".to_string()],
                cha: vec!["Sorcerer".to_string()],
                multi: vec!["Cleric / Wizard".to_string()],
            },
        }
    }

    #[test]
    fn bucket_thresholds() {
        let b = class_buckets();
        assert_eq!(*b.select(29.9), ClassBucket::Combat);
        assert_eq!(*b.select(30.0), ClassBucket::Stealth);
        assert_eq!(*b.select(60.0), ClassBucket::Knowledge);
        assert_eq!(*b.select(90.0), ClassBucket::Spellcasting);
        let c = caster_buckets();
        assert_eq!(*c.select(0.0), CasterBucket::Int);
        assert_eq!(*c.select(45.0), CasterBucket::Wis);
        assert_eq!(*c.select(89.9), CasterBucket::Cha);
        assert_eq!(*c.select(95.0), CasterBucket::Multi);
    }

    #[test]
    fn missing_table_yields_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_class(None, &mut rng), None);
    }

    #[test]
    fn every_bucket_reachable() {
        let classes = one_each();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..5000 {
            seen.insert(pick_class(Some(&classes), &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 7, "missing classes: {seen:?}");
    }

    #[test]
    fn spellcasting_is_rare() {
        let classes = one_each();
        let mut rng = StdRng::seed_from_u64(7);
        let casters = ["Wizard", "Cleric", "Sorcerer", "Cleric / Wizard"];
        let hits = (0..10_000)
            .filter(|_| {
                let class = pick_class(Some(&classes), &mut rng).unwrap();
                casters.contains(&class.as_str())
            })
            .count();
        assert!((700..1300).contains(&hits), "spellcasters: {hits}");
    }

    #[test]
    fn empty_bucket_yields_none() {
        let classes = ClassCategories {
            combat: Vec::new(),
            stealth: Vec::new(),
            knowledge: Vec::new(),
            spellcasting: SpellcastingClasses {
                int: Vec::new(),
                wis: Vec::new(),
                cha: Vec::new(),
                multi: Vec::new(),
            },
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_class(Some(&classes), &mut rng), None);
    }
}
