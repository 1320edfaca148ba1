//! Species picker.

use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::roll::{Buckets, pick};
use crate::tables::SpeciesWeights;

/// Species bucket, in the order weights accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesBucket {
    /// "Human".
    Human,
    /// "Dwarf".
    Dwarf,
    /// "Orc".
    Orc,
    /// "Halfling".
    Halfling,
    /// A pick from the spellcaster species list.
    PhbSpellcaster,
    /// A pick from the shapechanged list; takes the remainder of 100.
    Shapechanged,
}

impl SpeciesBucket {
    /// The fixed label for single-species buckets.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Human => Some("Human"),
            Self::Dwarf => Some("Dwarf"),
            Self::Orc => Some("Orc"),
            Self::Halfling => Some("Halfling"),
            Self::PhbSpellcaster | Self::Shapechanged => None,
        }
    }
}

fn species_buckets(weights: &SpeciesWeights) -> Buckets<SpeciesBucket> {
    Buckets::new(
        vec![
            (weights.human, SpeciesBucket::Human),
            (weights.dwarf, SpeciesBucket::Dwarf),
            (weights.orc, SpeciesBucket::Orc),
            (weights.halfling, SpeciesBucket::Halfling),
            (weights.phb_spellcasters_percent, SpeciesBucket::PhbSpellcaster),
        ],
        SpeciesBucket::Shapechanged,
    )
}

/// Pick a species, or `None` if the table is absent or the chosen list is
/// empty.
pub fn pick_species(weights: Option<&SpeciesWeights>, rng: &mut StdRng) -> Option<String> {
    let Some(weights) = weights else {
        warn!("species table missing; no species selected");
        return None;
    };

    let bucket = *species_buckets(weights).roll(rng);
    debug!(?bucket, "species bucket");
    match bucket {
        SpeciesBucket::PhbSpellcaster => pick(&weights.phb_spellcasters, rng).cloned(),
        SpeciesBucket::Shapechanged => pick(&weights.weird_shapechanged, rng).cloned(),
        fixed => fixed.label().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn weights(human: f64, dwarf: f64, orc: f64, halfling: f64, phb: f64) -> SpeciesWeights {
        SpeciesWeights {
            human,
            dwarf,
            orc,
            halfling,
            phb_spellcasters_percent: phb,
            phb_spellcasters: vec!["Elf".to_string(), "Gnome".to_string()],
            weird_shapechanged: vec!["Changeling".to_string()],
        }
    }

    #[test]
    fn all_human() {
        let w = weights(100.0, 0.0, 0.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert_eq!(pick_species(Some(&w), &mut rng).as_deref(), Some("Human"));
        }
    }

    #[test]
    fn all_zero_falls_back_to_shapechanged() {
        let w = weights(0.0, 0.0, 0.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(
                pick_species(Some(&w), &mut rng).as_deref(),
                Some("Changeling")
            );
        }
    }

    #[test]
    fn spellcaster_bucket_draws_from_list() {
        let w = weights(0.0, 0.0, 0.0, 0.0, 100.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let s = pick_species(Some(&w), &mut rng).unwrap();
            assert!(w.phb_spellcasters.contains(&s));
        }
    }

    #[test]
    fn cumulative_order() {
        let w = weights(10.0, 10.0, 10.0, 10.0, 10.0);
        let b = species_buckets(&w);
        assert_eq!(*b.select(5.0), SpeciesBucket::Human);
        assert_eq!(*b.select(15.0), SpeciesBucket::Dwarf);
        assert_eq!(*b.select(25.0), SpeciesBucket::Orc);
        assert_eq!(*b.select(35.0), SpeciesBucket::Halfling);
        assert_eq!(*b.select(45.0), SpeciesBucket::PhbSpellcaster);
        assert_eq!(*b.select(50.0), SpeciesBucket::Shapechanged);
    }

    #[test]
    fn missing_table_yields_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_species(None, &mut rng), None);
    }

    #[test]
    fn empty_fallback_list_yields_none() {
        let mut w = weights(0.0, 0.0, 0.0, 0.0, 0.0);
        w.weird_shapechanged.clear();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_species(Some(&w), &mut rng), None);
    }

    #[test]
    fn labels() {
        assert_eq!(SpeciesBucket::Orc.label(), Some("Orc"));
        assert_eq!(SpeciesBucket::Shapechanged.label(), None);
    }
}
