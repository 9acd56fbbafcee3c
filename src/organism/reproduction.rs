use super::Organism;
use crate::config::Config;
use rand::Rng;

impl Organism {
    /// A fresh juvenile of the same species, or `None` when this organism is
    /// not ready to breed. The parent's countdown is reset once the newborn
    /// is actually placed.
    pub fn offspring(&self, config: &Config, rng: &mut impl Rng) -> Option<Organism> {
        if !self.can_reproduce() {
            return None;
        }

        Some(Organism::spawn(self.species(), config, rng))
    }
}
