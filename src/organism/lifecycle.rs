use crate::config::TickRange;
use rand::Rng;

/// Age, maturity and breeding bookkeeping shared by all mobile species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    pub age: u32,
    pub maturity_age: u32,
    pub max_age: u32,
    pub breed_countdown: u32,
    pub breed_interval: u32,
}

impl Lifecycle {
    pub fn new(max_age: u32, maturity_divisor: u32, breed_interval: u32) -> Self {
        Self {
            age: 0,
            maturity_age: max_age / maturity_divisor.max(1),
            max_age,
            breed_countdown: breed_interval,
            breed_interval,
        }
    }

    pub fn sample(
        max_age: &TickRange,
        maturity_divisor: u32,
        breed_interval: u32,
        rng: &mut impl Rng,
    ) -> Self {
        Self::new(max_age.sample(rng), maturity_divisor, breed_interval)
    }

    pub fn advance(&mut self) {
        self.age = self.age.saturating_add(1);
        self.breed_countdown = self.breed_countdown.saturating_sub(1);
    }

    pub fn is_adult(&self) -> bool {
        self.age > self.maturity_age
    }

    pub fn is_expired(&self) -> bool {
        self.age > self.max_age
    }

    pub fn ready_to_breed(&self) -> bool {
        self.is_adult() && self.breed_countdown == 0
    }

    pub fn reset_breeding(&mut self) {
        self.breed_countdown = self.breed_interval;
    }
}

/// Ticks since the last meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunger {
    pub ticks: u32,
    pub limit: u32,
}

impl Hunger {
    pub fn new(limit: u32) -> Self {
        Self { ticks: 0, limit }
    }

    pub fn advance(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    pub fn feed(&mut self) {
        self.ticks = 0;
    }

    pub fn is_starved(&self) -> bool {
        self.ticks > self.limit
    }
}
