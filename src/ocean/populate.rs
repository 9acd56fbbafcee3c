use super::Ocean;
use crate::config::{Config, PopulationMix};
use crate::organism::{Organism, Species};
use rand::Rng;

impl Ocean {
    /// Fills every cell with a random occupant drawn from the population mix.
    pub fn populate(&mut self, config: &Config, rng: &mut impl Rng) {
        let mix = config.ocean.population;

        for idx in 0..self.len() {
            let pos = self.position(idx);
            let species = pick_species(&mix, rng);
            let organism = Organism::spawn(species, config, rng);
            self.place(pos, organism);
        }
    }
}

pub fn pick_species(mix: &PopulationMix, rng: &mut impl Rng) -> Species {
    let roll = rng.gen_range(0..100);
    let bands = [
        (Species::Stone, mix.stone_percent),
        (Species::Reef, mix.reef_percent),
        (Species::Prey, mix.prey_percent),
        (Species::Predator, mix.predator_percent),
        (Species::Apex, mix.apex_percent),
    ];

    let mut upper = 0;
    for (species, percent) in bands {
        upper += percent;
        if roll < upper {
            return species;
        }
    }

    Species::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_populate_fills_every_cell() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(21);
        let mut ocean = Ocean::new(40, 40);
        ocean.populate(&config, &mut rng);

        let census = ocean.census();
        assert_eq!(census.total(), 1600);
        assert!(census.prey > 0);
        assert!(census.empty > 0);
    }

    #[test]
    fn test_populate_follows_mix() {
        let mut config = Config::default();
        config.ocean.population = PopulationMix {
            stone_percent: 0,
            reef_percent: 0,
            prey_percent: 50,
            predator_percent: 0,
            apex_percent: 0,
        };

        let mut rng = StdRng::seed_from_u64(22);
        let mut ocean = Ocean::new(100, 100);
        ocean.populate(&config, &mut rng);

        let census = ocean.census();
        assert_eq!(census.stone + census.reef + census.predator + census.apex, 0);
        let ratio = census.prey as f64 / 10000.0;
        assert!(ratio > 0.45 && ratio < 0.55);
    }

    #[test]
    fn test_pick_species_full_mix() {
        let mix = PopulationMix {
            stone_percent: 0,
            reef_percent: 100,
            prey_percent: 0,
            predator_percent: 0,
            apex_percent: 0,
        };
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..50 {
            assert_eq!(pick_species(&mix, &mut rng), Species::Reef);
        }
    }
}
