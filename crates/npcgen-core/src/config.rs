//! Configuration for an NPC generator.

/// Configuration for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
