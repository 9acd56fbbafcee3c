use crate::error::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest accepted extent along either axis.
pub const MAX_EXTENT: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ocean: OceanConfig,
    pub terrain: TerrainConfig,
    pub prey: PreyConfig,
    pub predator: PredatorConfig,
    pub apex: ApexConfig,
    pub storm: StormConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OceanConfig {
    pub rows: usize,
    pub cols: usize,
    pub population: PopulationMix,
}

/// Percent of cells seeded with each species; whatever is left over stays empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PopulationMix {
    pub stone_percent: u32,
    pub reef_percent: u32,
    pub prey_percent: u32,
    pub predator_percent: u32,
    pub apex_percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainConfig {
    pub stone_to_reef: TickRange,
    pub reef_to_stone: TickRange,
    /// Prey next to a reef cannot be targeted by predators.
    pub reef_shelter: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreyConfig {
    pub max_age: TickRange,
    pub maturity_divisor: u32,
    pub breed_interval: u32,
    pub sight: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredatorConfig {
    pub max_age: TickRange,
    pub maturity_divisor: u32,
    pub hunger_limit: TickRange,
    /// Above this many ticks without food the predator sprints and stops breeding.
    pub hungry_threshold: u32,
    pub breed_interval: u32,
    pub sight: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApexConfig {
    pub max_age: TickRange,
    pub maturity_divisor: u32,
    pub hunger_limit: TickRange,
    pub breed_interval: u32,
    /// Hungry ticks needed per speed level gained.
    pub speedup_every: u32,
    pub max_speed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormConfig {
    /// Per-tick probability of a storm.
    pub chance: f64,
    pub radius: TickRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub frame_millis: u64,
    pub max_iterations: u64,
    pub stagnation_limit: u64,
    pub log_interval_ticks: u64,
}

/// Inclusive range a randomized threshold is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRange {
    pub min: u32,
    pub max: u32,
}

impl TickRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: u32) -> Self {
        Self { min: value, max: value }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    fn check(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl PopulationMix {
    pub fn total(&self) -> u32 {
        self.stone_percent
            + self.reef_percent
            + self.prey_percent
            + self.predator_percent
            + self.apex_percent
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocean: OceanConfig {
                rows: 30,
                cols: 30,
                population: PopulationMix {
                    stone_percent: 3,
                    reef_percent: 4,
                    prey_percent: 25,
                    predator_percent: 6,
                    apex_percent: 2,
                },
            },
            terrain: TerrainConfig {
                stone_to_reef: TickRange::new(150, 199),
                reef_to_stone: TickRange::new(150, 199),
                reef_shelter: true,
            },
            prey: PreyConfig {
                max_age: TickRange::new(12, 17),
                maturity_divisor: 3,
                breed_interval: 3,
                sight: 1,
            },
            predator: PredatorConfig {
                max_age: TickRange::new(60, 89),
                maturity_divisor: 3,
                hunger_limit: TickRange::new(20, 29),
                hungry_threshold: 10,
                breed_interval: 8,
                sight: 1,
            },
            apex: ApexConfig {
                max_age: TickRange::new(90, 119),
                maturity_divisor: 3,
                hunger_limit: TickRange::new(30, 39),
                breed_interval: 12,
                speedup_every: 5,
                max_speed: 3,
            },
            storm: StormConfig {
                chance: 0.01,
                radius: TickRange::new(1, 2),
            },
            simulation: SimulationConfig {
                frame_millis: 250,
                max_iterations: 1000,
                stagnation_limit: 20,
                log_interval_ticks: 50,
            },
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (rows, cols) = (self.ocean.rows, self.ocean.cols);
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyOcean { rows, cols });
        }
        if let Some(&extent) = [rows, cols].iter().find(|&&e| e > MAX_EXTENT) {
            return Err(ConfigError::OversizedOcean {
                extent,
                max: MAX_EXTENT,
            });
        }

        let mix = self.ocean.population.total();
        if mix > 100 {
            return Err(ConfigError::PopulationMix(mix));
        }

        self.terrain.stone_to_reef.check("terrain.stone_to_reef")?;
        self.terrain.reef_to_stone.check("terrain.reef_to_stone")?;
        self.prey.max_age.check("prey.max_age")?;
        self.predator.max_age.check("predator.max_age")?;
        self.predator.hunger_limit.check("predator.hunger_limit")?;
        self.apex.max_age.check("apex.max_age")?;
        self.apex.hunger_limit.check("apex.hunger_limit")?;
        self.storm.radius.check("storm.radius")?;

        for (name, divisor) in [
            ("prey", self.prey.maturity_divisor),
            ("predator", self.predator.maturity_divisor),
            ("apex", self.apex.maturity_divisor),
        ] {
            if divisor == 0 {
                return Err(ConfigError::ZeroMaturityDivisor(name));
            }
        }

        if self.apex.max_speed == 0 || self.apex.speedup_every == 0 {
            return Err(ConfigError::ZeroSpeed);
        }

        if !(0.0..=1.0).contains(&self.storm.chance) {
            return Err(ConfigError::StormChance(self.storm.chance));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ocean.rows, 30);
        assert_eq!(config.ocean.cols, 30);
        assert!(config.ocean.population.total() <= 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_cycle_ordering() {
        // terrain outlasts predator hunger, which outlasts prey lifetimes
        let config = Config::default();
        assert!(config.terrain.stone_to_reef.min > config.predator.hunger_limit.max);
        assert!(config.predator.hunger_limit.min > config.prey.max_age.max);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.ocean.rows, deserialized.ocean.rows);
        assert_eq!(config.prey.max_age, deserialized.prey.max_age);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("ocean_config_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();

        let mut config = Config::default();
        config.ocean.rows = 12;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.ocean.rows, 12);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_rejects_bad_extents() {
        let mut config = Config::default();
        config.ocean.rows = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyOcean { rows: 0, cols: 30 })
        );

        config.ocean.rows = MAX_EXTENT + 1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::OversizedOcean {
                extent: MAX_EXTENT + 1,
                max: MAX_EXTENT
            })
        );
    }

    #[test]
    fn test_rejects_overfull_population() {
        let mut config = Config::default();
        config.ocean.population.prey_percent = 95;
        assert!(matches!(config.validate(), Err(ConfigError::PopulationMix(_))));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut config = Config::default();
        config.prey.max_age = TickRange::new(10, 5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { name: "prey.max_age", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_storm_chance() {
        let mut config = Config::default();
        config.storm.chance = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::StormChance(1.5)));
    }

    #[test]
    fn test_tick_range_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = TickRange::new(150, 199);
        for _ in 0..200 {
            let value = range.sample(&mut rng);
            assert!((150..=199).contains(&value));
        }
        assert_eq!(TickRange::fixed(4).sample(&mut rng), 4);
    }
}
