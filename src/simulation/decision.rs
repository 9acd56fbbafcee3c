use super::action::Action;
use crate::config::Config;
use crate::ocean::neighborhood::{Neighbor, Offset, Position};
use crate::ocean::Ocean;
use crate::organism::{ApexPredator, Organism, Predator, Species};
use rand::Rng;

/// Chooses what the occupant of `pos` does this tick. Breeding, when it
/// happens, comes first so the newborn lands next to where the parent stood.
pub fn decide(ocean: &Ocean, pos: Position, config: &Config, rng: &mut impl Rng) -> Vec<Action> {
    match ocean.organism(pos) {
        Organism::Prey(_) => decide_prey(ocean, pos, config, rng),
        Organism::Predator(predator) => decide_predator(ocean, pos, predator, config, rng),
        Organism::Apex(apex) => decide_apex(ocean, pos, apex, config, rng),
        Organism::Empty | Organism::Stone(_) | Organism::Reef(_) => Vec::new(),
    }
}

fn decide_prey(ocean: &Ocean, pos: Position, config: &Config, rng: &mut impl Rng) -> Vec<Action> {
    let threat = ocean.nearest_neighbor(pos, config.prey.sight, |c| {
        matches!(c.species(), Species::Predator | Species::Apex)
    });
    if let Some(threat) = threat {
        return vec![flee(ocean, pos, threat.offset)];
    }

    let mut actions = Vec::with_capacity(2);
    actions.extend(breed(ocean, pos, config, rng));
    actions.push(Action::Move {
        from: pos,
        offset: random_step(rng, 1),
    });
    actions
}

fn decide_predator(
    ocean: &Ocean,
    pos: Position,
    predator: &Predator,
    config: &Config,
    rng: &mut impl Rng,
) -> Vec<Action> {
    let sight = config.predator.sight;
    let mut actions = Vec::with_capacity(2);
    actions.extend(breed(ocean, pos, config, rng));

    let threat = ocean.nearest_neighbor(pos, sight, |c| c.species() == Species::Apex);
    if let Some(threat) = threat {
        actions.push(flee(ocean, pos, threat.offset));
        return actions;
    }

    if let Some(food) = find_food(ocean, pos, sight, Species::Prey, config) {
        actions.push(Action::Eat {
            from: pos,
            offset: food.offset,
        });
        return actions;
    }

    let stride = if predator.is_hungry() { 2 } else { 1 };
    actions.push(Action::Move {
        from: pos,
        offset: random_step(rng, stride),
    });
    actions
}

fn decide_apex(
    ocean: &Ocean,
    pos: Position,
    apex: &ApexPredator,
    config: &Config,
    rng: &mut impl Rng,
) -> Vec<Action> {
    let radius = apex.speed;
    let mut actions = Vec::with_capacity(2);
    actions.extend(breed(ocean, pos, config, rng));

    let food = find_food(ocean, pos, radius, Species::Prey, config).or_else(|| {
        if apex.is_frenzied() {
            find_food(ocean, pos, radius, Species::Predator, config)
        } else {
            None
        }
    });

    match food {
        Some(food) => actions.push(Action::Eat {
            from: pos,
            offset: food.offset,
        }),
        None => actions.push(Action::Move {
            from: pos,
            offset: random_step(rng, radius as isize),
        }),
    }
    actions
}

/// Spawn into the first empty neighbor in scan order.
fn breed(ocean: &Ocean, pos: Position, config: &Config, rng: &mut impl Rng) -> Option<Action> {
    let parent = ocean.organism(pos);
    if !parent.can_reproduce() {
        return None;
    }

    let nursery = ocean.empty_neighbors(pos).into_iter().next()?;
    let offspring = parent.offspring(config, rng)?;

    Some(Action::Spawn {
        parent: pos,
        offset: nursery.offset,
        offspring,
    })
}

/// First `species` in scan order that is not hiding next to a reef.
fn find_food(
    ocean: &Ocean,
    pos: Position,
    radius: usize,
    species: Species,
    config: &Config,
) -> Option<Neighbor> {
    let shelter = config.terrain.reef_shelter && species == Species::Prey;
    ocean.neighborhood(pos, radius).into_iter().find(|n| {
        ocean.get(n.position).species() == species && !(shelter && ocean.is_sheltered(n.position))
    })
}

/// Steps one cell directly away from `threat`, trying the axis the threat is
/// farther along first. When neither step is open the first one is still
/// returned and simply fails when applied.
fn flee(ocean: &Ocean, pos: Position, threat: Offset) -> Action {
    let along_row = Offset::new(-threat.d_row.signum(), 0);
    let along_col = Offset::new(0, -threat.d_col.signum());

    let ordered = if threat.d_col.abs() >= threat.d_row.abs() {
        [along_col, along_row]
    } else {
        [along_row, along_col]
    };
    let candidates: Vec<Offset> = ordered
        .into_iter()
        .filter(|o| o.d_row != 0 || o.d_col != 0)
        .collect();

    let chosen = candidates
        .iter()
        .find(|o| ocean.get(ocean.offset(pos, **o)).is_empty())
        .or_else(|| candidates.first());

    match chosen {
        Some(&offset) => Action::Move { from: pos, offset },
        None => Action::Idle,
    }
}

fn random_step(rng: &mut impl Rng, stride: isize) -> Offset {
    Offset::CARDINALS[rng.gen_range(0..Offset::CARDINALS.len())].scaled(stride)
}
