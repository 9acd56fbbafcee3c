use crate::ocean::cell::Cell;
use crate::organism::Species;
use serde::{Deserialize, Serialize};

/// Number of cells held by each species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub empty: usize,
    pub stone: usize,
    pub reef: usize,
    pub prey: usize,
    pub predator: usize,
    pub apex: usize,
}

impl Census {
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut census = Census::default();
        for cell in cells {
            census.record(cell.species());
        }
        census
    }

    pub fn record(&mut self, species: Species) {
        match species {
            Species::Empty => self.empty += 1,
            Species::Stone => self.stone += 1,
            Species::Reef => self.reef += 1,
            Species::Prey => self.prey += 1,
            Species::Predator => self.predator += 1,
            Species::Apex => self.apex += 1,
        }
    }

    pub fn get(&self, species: Species) -> usize {
        match species {
            Species::Empty => self.empty,
            Species::Stone => self.stone,
            Species::Reef => self.reef,
            Species::Prey => self.prey,
            Species::Predator => self.predator,
            Species::Apex => self.apex,
        }
    }

    pub fn total(&self) -> usize {
        self.empty + self.stone + self.reef + self.prey + self.predator + self.apex
    }

    pub fn fauna(&self) -> usize {
        self.prey + self.predator + self.apex
    }
}

/// Running event counters since the simulation started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub births: u64,
    pub deaths: u64,
    pub meals: u64,
    pub storms: u64,
    pub storm_casualties: u64,
    pub transforms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationMetrics {
    pub iteration: u64,
    pub stagnation: u64,
    pub census: Census,
    pub population: usize,
    pub total_births: u64,
    pub total_deaths: u64,
    pub total_meals: u64,
    pub total_storms: u64,
    pub storm_casualties: u64,
    pub terrain_transforms: u64,
    /// Prey per predator of either kind; `None` when no predators remain.
    pub prey_per_predator: Option<f64>,
}

impl SimulationMetrics {
    pub fn compute(iteration: u64, stagnation: u64, census: Census, totals: &Totals) -> Self {
        let hunters = census.predator + census.apex;
        let prey_per_predator = if hunters == 0 {
            None
        } else {
            Some(census.prey as f64 / hunters as f64)
        };

        Self {
            iteration,
            stagnation,
            census,
            population: census.fauna(),
            total_births: totals.births,
            total_deaths: totals.deaths,
            total_meals: totals.meals,
            total_storms: totals.storms,
            storm_casualties: totals.storm_casualties,
            terrain_transforms: totals.transforms,
            prey_per_predator,
        }
    }
}
