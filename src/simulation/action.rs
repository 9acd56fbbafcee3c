use crate::ocean::neighborhood::{Offset, Position};
use crate::ocean::Ocean;
use crate::organism::{Organism, Species};

/// A requested mutation of the ocean. Actors are addressed by position so the
/// request stays valid however the cells are shuffled before it is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Idle,
    Move {
        from: Position,
        offset: Offset,
    },
    Eat {
        from: Position,
        offset: Offset,
    },
    Spawn {
        parent: Position,
        offset: Offset,
        offspring: Organism,
    },
    Storm {
        center: Position,
        radius: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Nothing,
    Moved(Position),
    Ate { prey: Species, at: Position },
    Born(Position),
    Cleared { cells: usize, fauna: usize },
    /// The target was not eligible; nothing changed.
    Blocked,
}

impl Action {
    pub fn apply(self, ocean: &mut Ocean) -> Outcome {
        match self {
            Action::Idle => Outcome::Nothing,
            Action::Move { from, offset } => {
                let to = ocean.offset(from, offset);
                if to == from || !ocean.get(to).is_empty() {
                    return Outcome::Blocked;
                }

                ocean.swap(from, to);
                ocean.get_mut(to).moved = true;
                Outcome::Moved(to)
            }
            Action::Eat { from, offset } => {
                let to = ocean.offset(from, offset);
                let prey = ocean.get(to).species();
                if to == from || !ocean.organism(from).can_eat(prey) {
                    return Outcome::Blocked;
                }

                ocean.clear(to);
                ocean.swap(from, to);
                let hunter = ocean.get_mut(to);
                hunter.organism.feed();
                hunter.moved = true;
                Outcome::Ate { prey, at: to }
            }
            Action::Spawn {
                parent,
                offset,
                offspring,
            } => {
                let to = ocean.offset(parent, offset);
                if to == parent || !ocean.get(to).is_empty() {
                    return Outcome::Blocked;
                }

                ocean.get_mut(parent).organism.reset_reproduction();
                ocean.place(to, offspring);
                ocean.get_mut(to).moved = true;
                Outcome::Born(to)
            }
            Action::Storm { center, radius } => {
                let mut area = vec![center];
                area.extend(ocean.neighborhood(center, radius).iter().map(|n| n.position));

                let mut cells = 0;
                let mut fauna = 0;
                for pos in area {
                    if ocean.get(pos).is_empty() {
                        continue;
                    }
                    let removed = ocean.clear(pos);
                    cells += 1;
                    if removed.species().is_fauna() {
                        fauna += 1;
                    }
                }

                Outcome::Cleared { cells, fauna }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::organism::Terrain;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ocean_with(rows: usize, cols: usize, placements: Vec<(Position, Organism)>) -> Ocean {
        let mut ocean = Ocean::new(rows, cols);
        for (pos, organism) in placements {
            ocean.place(pos, organism);
        }
        ocean
    }

    #[test]
    fn test_idle_changes_nothing() {
        let mut ocean = ocean_with(3, 3, vec![]);
        assert_eq!(Action::Idle.apply(&mut ocean), Outcome::Nothing);
        assert_eq!(ocean.count(Species::Empty), 9);
    }

    #[test]
    fn test_move_wraps_at_edge() {
        let mut ocean = ocean_with(
            3,
            4,
            vec![(Position::new(1, 3), Organism::Stone(Terrain::new(9)))],
        );
        let id = ocean.get(Position::new(1, 3)).id;

        let outcome = Action::Move {
            from: Position::new(1, 3),
            offset: Offset::EAST,
        }
        .apply(&mut ocean);

        assert_eq!(outcome, Outcome::Moved(Position::new(1, 0)));
        assert_eq!(ocean.get(Position::new(1, 0)).id, id);
        assert!(ocean.get(Position::new(1, 0)).moved);
        assert!(ocean.get(Position::new(1, 3)).is_empty());
    }

    #[test]
    fn test_move_into_occupied_cell_is_blocked() {
        let mut ocean = ocean_with(
            3,
            3,
            vec![
                (Position::new(0, 0), Organism::Stone(Terrain::new(9))),
                (Position::new(0, 1), Organism::Reef(Terrain::new(9))),
            ],
        );
        let before = ocean.signature();

        let outcome = Action::Move {
            from: Position::new(0, 0),
            offset: Offset::EAST,
        }
        .apply(&mut ocean);

        assert_eq!(outcome, Outcome::Blocked);
        assert_eq!(ocean.signature(), before);
        assert!(!ocean.get(Position::new(0, 0)).moved);
    }

    #[test]
    fn test_eat_replaces_prey_with_hunter() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(31);
        let mut hunter = Organism::predator(&config.predator, &mut rng);
        for _ in 0..5 {
            hunter.tick();
        }

        let mut ocean = ocean_with(
            3,
            3,
            vec![
                (Position::new(0, 0), hunter),
                (Position::new(2, 0), Organism::prey(&config.prey, &mut rng)),
            ],
        );
        let hunter_id = ocean.get(Position::new(0, 0)).id;

        let outcome = Action::Eat {
            from: Position::new(0, 0),
            offset: Offset::NORTH,
        }
        .apply(&mut ocean);

        assert_eq!(
            outcome,
            Outcome::Ate {
                prey: Species::Prey,
                at: Position::new(2, 0)
            }
        );
        let cell = ocean.get(Position::new(2, 0));
        assert_eq!(cell.id, hunter_id);
        assert!(cell.moved);
        assert_eq!(cell.organism.hunger().unwrap().ticks, 0);
        assert!(ocean.get(Position::new(0, 0)).is_empty());
        assert_eq!(ocean.count(Species::Prey), 0);
    }

    #[test]
    fn test_eat_inedible_is_blocked() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(32);
        let mut ocean = ocean_with(
            3,
            3,
            vec![
                (Position::new(1, 1), Organism::predator(&config.predator, &mut rng)),
                (Position::new(1, 2), Organism::Reef(Terrain::new(9))),
                (Position::new(0, 1), Organism::predator(&config.predator, &mut rng)),
            ],
        );

        for offset in [Offset::EAST, Offset::NORTH, Offset::WEST] {
            let outcome = Action::Eat {
                from: Position::new(1, 1),
                offset,
            }
            .apply(&mut ocean);
            assert_eq!(outcome, Outcome::Blocked);
        }
        assert_eq!(ocean.count(Species::Predator), 2);
    }

    #[test]
    fn test_spawn_places_newborn() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(33);
        let mut parent = Organism::prey(&config.prey, &mut rng);
        if let Organism::Prey(p) = &mut parent {
            p.life.age = 10;
            p.life.breed_countdown = 0;
        }
        let mut ocean = ocean_with(3, 3, vec![(Position::new(1, 1), parent)]);
        let offspring = Organism::prey(&config.prey, &mut rng);

        let outcome = Action::Spawn {
            parent: Position::new(1, 1),
            offset: Offset::SOUTH,
            offspring,
        }
        .apply(&mut ocean);

        assert_eq!(outcome, Outcome::Born(Position::new(2, 1)));
        assert!(ocean.get(Position::new(2, 1)).moved);
        assert_eq!(ocean.count(Species::Prey), 2);
        let life = ocean.organism(Position::new(1, 1)).lifecycle().unwrap();
        assert_eq!(life.breed_countdown, config.prey.breed_interval);
    }

    #[test]
    fn test_storm_clears_square() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(34);
        let mut ocean = Ocean::new(6, 6);
        for pos in ocean.positions().collect::<Vec<_>>() {
            ocean.place(pos, Organism::Stone(Terrain::new(9)));
        }
        ocean.place(Position::new(0, 0), Organism::prey(&config.prey, &mut rng));

        let outcome = Action::Storm {
            center: Position::new(0, 0),
            radius: 1,
        }
        .apply(&mut ocean);

        assert_eq!(outcome, Outcome::Cleared { cells: 9, fauna: 1 });
        assert_eq!(ocean.count(Species::Empty), 9);
        assert!(ocean.get(Position::new(5, 5)).is_empty());
        assert!(ocean.get(Position::new(1, 1)).is_empty());
        assert!(!ocean.get(Position::new(2, 2)).is_empty());
        assert_eq!(ocean.len(), 36);
    }
}
