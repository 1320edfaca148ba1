//! Random NPC generation from weighted tables.
//!
//! Rolls an alignment (scenario- or plane-based), a set of three
//! virtue/vice traits shaped by that alignment, a class, a species, and a
//! tarot card, then assembles them into a [`GeneratedNpc`].

pub mod alignment;
pub mod class;
pub mod config;
pub mod error;
pub mod generator;
pub mod roll;
pub mod species;
pub mod tables;
pub mod tarot;
pub mod traits;
pub mod validate;

pub use alignment::{Flavor, ResolvedAlignment, derive_flavor, resolve_alignment};
pub use config::GeneratorConfig;
pub use error::{NpcError, NpcResult};
pub use generator::{GeneratedNpc, Generator};
pub use tables::TableBundle;
pub use traits::{Pole, TraitPair, TraitPick, select_traits};
pub use validate::TableIssue;
