pub mod lifecycle;
pub mod reproduction;

use crate::config::{ApexConfig, Config, PredatorConfig, PreyConfig, TickRange};
use lifecycle::{Hunger, Lifecycle};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Empty,
    Stone,
    Reef,
    Prey,
    Predator,
    Apex,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Empty,
        Species::Stone,
        Species::Reef,
        Species::Prey,
        Species::Predator,
        Species::Apex,
    ];

    pub fn is_fauna(&self) -> bool {
        matches!(self, Species::Prey | Species::Predator | Species::Apex)
    }
}

/// Countdown until a stone turns into reef or back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    pub countdown: u32,
    pub ready: bool,
}

impl Terrain {
    pub fn new(countdown: u32) -> Self {
        Self {
            countdown,
            ready: false,
        }
    }

    fn tick(&mut self) {
        if self.countdown == 0 {
            self.ready = true;
        } else {
            self.countdown -= 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prey {
    pub life: Lifecycle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predator {
    pub life: Lifecycle,
    pub hunger: Hunger,
    pub hungry_threshold: u32,
}

impl Predator {
    pub fn is_hungry(&self) -> bool {
        self.hunger.ticks > self.hungry_threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApexPredator {
    pub life: Lifecycle,
    pub hunger: Hunger,
    pub speed: usize,
    pub speedup_every: u32,
    pub max_speed: usize,
}

impl ApexPredator {
    fn update_speed(&mut self) {
        let level = 1 + (self.hunger.ticks / self.speedup_every.max(1)) as usize;
        self.speed = level.min(self.max_speed.max(1));
    }

    /// Full speed unlocks predators as food.
    pub fn is_frenzied(&self) -> bool {
        self.speed >= self.max_speed
    }
}

/// The single occupant of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Organism {
    Empty,
    Stone(Terrain),
    Reef(Terrain),
    Prey(Prey),
    Predator(Predator),
    Apex(ApexPredator),
}

impl Organism {
    pub fn spawn(species: Species, config: &Config, rng: &mut impl Rng) -> Self {
        match species {
            Species::Empty => Organism::Empty,
            Species::Stone => Organism::stone(&config.terrain.stone_to_reef, rng),
            Species::Reef => Organism::reef(&config.terrain.reef_to_stone, rng),
            Species::Prey => Organism::prey(&config.prey, rng),
            Species::Predator => Organism::predator(&config.predator, rng),
            Species::Apex => Organism::apex(&config.apex, rng),
        }
    }

    pub fn stone(countdown: &TickRange, rng: &mut impl Rng) -> Self {
        Organism::Stone(Terrain::new(countdown.sample(rng)))
    }

    pub fn reef(countdown: &TickRange, rng: &mut impl Rng) -> Self {
        Organism::Reef(Terrain::new(countdown.sample(rng)))
    }

    pub fn prey(config: &PreyConfig, rng: &mut impl Rng) -> Self {
        Organism::Prey(Prey {
            life: Lifecycle::sample(
                &config.max_age,
                config.maturity_divisor,
                config.breed_interval,
                rng,
            ),
        })
    }

    pub fn predator(config: &PredatorConfig, rng: &mut impl Rng) -> Self {
        Organism::Predator(Predator {
            life: Lifecycle::sample(
                &config.max_age,
                config.maturity_divisor,
                config.breed_interval,
                rng,
            ),
            hunger: Hunger::new(config.hunger_limit.sample(rng)),
            hungry_threshold: config.hungry_threshold,
        })
    }

    pub fn apex(config: &ApexConfig, rng: &mut impl Rng) -> Self {
        Organism::Apex(ApexPredator {
            life: Lifecycle::sample(
                &config.max_age,
                config.maturity_divisor,
                config.breed_interval,
                rng,
            ),
            hunger: Hunger::new(config.hunger_limit.sample(rng)),
            speed: 1,
            speedup_every: config.speedup_every,
            max_speed: config.max_speed,
        })
    }

    pub fn species(&self) -> Species {
        match self {
            Organism::Empty => Species::Empty,
            Organism::Stone(_) => Species::Stone,
            Organism::Reef(_) => Species::Reef,
            Organism::Prey(_) => Species::Prey,
            Organism::Predator(_) => Species::Predator,
            Organism::Apex(_) => Species::Apex,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Organism::Empty)
    }

    /// Display symbol. Never consulted for behavior.
    pub fn symbol(&self) -> char {
        match self {
            Organism::Empty => ' ',
            Organism::Stone(_) => '*',
            Organism::Reef(_) => '&',
            Organism::Prey(p) if p.life.is_adult() => '>',
            Organism::Prey(_) => '~',
            Organism::Predator(p) if p.life.is_adult() => 'D',
            Organism::Predator(_) => 'd',
            Organism::Apex(a) if a.life.is_adult() => '$',
            Organism::Apex(_) => '?',
        }
    }

    /// Advances counters by one tick.
    pub fn tick(&mut self) {
        match self {
            Organism::Empty => {}
            Organism::Stone(t) | Organism::Reef(t) => t.tick(),
            Organism::Prey(p) => p.life.advance(),
            Organism::Predator(p) => {
                p.life.advance();
                p.hunger.advance();
            }
            Organism::Apex(a) => {
                a.life.advance();
                a.hunger.advance();
                a.update_speed();
            }
        }
    }

    pub fn is_alive(&self) -> bool {
        match self {
            Organism::Empty | Organism::Stone(_) | Organism::Reef(_) => true,
            Organism::Prey(p) => !p.life.is_expired(),
            Organism::Predator(p) => !p.life.is_expired() && !p.hunger.is_starved(),
            Organism::Apex(a) => !a.life.is_expired() && !a.hunger.is_starved(),
        }
    }

    pub fn ready_to_transform(&self) -> bool {
        match self {
            Organism::Stone(t) | Organism::Reef(t) => t.ready,
            _ => false,
        }
    }

    /// The terrain a ready stone or reef turns into.
    pub fn transformed(&self, config: &Config, rng: &mut impl Rng) -> Option<Organism> {
        match self {
            Organism::Stone(t) if t.ready => {
                Some(Organism::reef(&config.terrain.reef_to_stone, rng))
            }
            Organism::Reef(t) if t.ready => {
                Some(Organism::stone(&config.terrain.stone_to_reef, rng))
            }
            _ => None,
        }
    }

    pub fn can_reproduce(&self) -> bool {
        match self {
            Organism::Prey(p) => p.life.ready_to_breed(),
            Organism::Predator(p) => p.life.ready_to_breed() && !p.is_hungry(),
            Organism::Apex(a) => a.life.ready_to_breed() && a.speed == 1,
            _ => false,
        }
    }

    pub fn reset_reproduction(&mut self) {
        match self {
            Organism::Prey(Prey { life })
            | Organism::Predator(Predator { life, .. })
            | Organism::Apex(ApexPredator { life, .. }) => life.reset_breeding(),
            _ => {}
        }
    }

    pub fn can_eat(&self, target: Species) -> bool {
        match self {
            Organism::Predator(_) => target == Species::Prey,
            Organism::Apex(_) => matches!(target, Species::Prey | Species::Predator),
            _ => false,
        }
    }

    /// Resets hunger after a meal; the apex also drops back to walking speed.
    pub fn feed(&mut self) {
        match self {
            Organism::Predator(p) => p.hunger.feed(),
            Organism::Apex(a) => {
                a.hunger.feed();
                a.speed = 1;
            }
            _ => {}
        }
    }

    pub fn lifecycle(&self) -> Option<&Lifecycle> {
        match self {
            Organism::Prey(Prey { life })
            | Organism::Predator(Predator { life, .. })
            | Organism::Apex(ApexPredator { life, .. }) => Some(life),
            _ => None,
        }
    }

    pub fn hunger(&self) -> Option<&Hunger> {
        match self {
            Organism::Predator(Predator { hunger, .. })
            | Organism::Apex(ApexPredator { hunger, .. }) => Some(hunger),
            _ => None,
        }
    }
}
