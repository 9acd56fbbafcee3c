pub mod action;
pub mod decision;
pub mod tick;

use crate::config::Config;
use crate::ocean::Ocean;
use crate::render::Frame;
use crate::stats::{SimulationMetrics, Totals};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Why the driver should stop ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Stagnated { ticks: u64 },
    IterationCap { iterations: u64 },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Stagnated { ticks } => {
                write!(f, "ocean unchanged for {} consecutive ticks", ticks)
            }
            Termination::IterationCap { iterations } => {
                write!(f, "reached iteration cap of {}", iterations)
            }
        }
    }
}

/// The ocean plus everything that evolves with it: the random source, the
/// tick and stagnation counters, and the running totals.
#[derive(Debug, Clone)]
pub struct Simulation {
    ocean: Ocean,
    config: Config,
    rng: StdRng,
    iteration: u64,
    stagnation: u64,
    totals: Totals,
}

impl Simulation {
    /// Builds a randomly populated ocean. `None` seeds from system entropy.
    pub fn new(config: &Config, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut ocean = Ocean::new(config.ocean.rows, config.ocean.cols);
        ocean.populate(config, &mut rng);

        Self::from_parts(config, ocean, rng)
    }

    /// Runs a hand-built ocean.
    pub fn with_ocean(config: &Config, ocean: Ocean, seed: u64) -> Self {
        Self::from_parts(config, ocean, StdRng::seed_from_u64(seed))
    }

    fn from_parts(config: &Config, ocean: Ocean, rng: StdRng) -> Self {
        Self {
            ocean,
            config: config.clone(),
            rng,
            iteration: 0,
            stagnation: 0,
            totals: Totals::default(),
        }
    }

    pub fn ocean(&self) -> &Ocean {
        &self.ocean
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn stagnation(&self) -> u64 {
        self.stagnation
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn metrics(&self) -> SimulationMetrics {
        SimulationMetrics::compute(
            self.iteration,
            self.stagnation,
            self.ocean.census(),
            &self.totals,
        )
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(self)
    }

    /// Checked by the driver between ticks.
    pub fn termination(&self) -> Option<Termination> {
        let limits = &self.config.simulation;
        if self.stagnation >= limits.stagnation_limit {
            return Some(Termination::Stagnated {
                ticks: self.stagnation,
            });
        }
        if self.iteration >= limits.max_iterations {
            return Some(Termination::IterationCap {
                iterations: self.iteration,
            });
        }
        None
    }
}
