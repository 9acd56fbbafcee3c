use super::action::{Action, Outcome};
use super::decision;
use super::Simulation;
use crate::ocean::neighborhood::Position;
use rand::Rng;

impl Simulation {
    /// Advances the ocean by one tick. Cells are visited in row-major order
    /// and every decided action lands on the live grid before the next cell
    /// is looked at, so later cells see what earlier ones did this tick.
    /// Organisms that run out of age or food during their update still act;
    /// they are swept away at the start of the next tick.
    pub fn tick(&mut self) {
        self.remove_dead();

        let before = self.ocean.signature();

        let transforms = self.totals.transforms;
        for idx in 0..self.ocean.len() {
            let pos = self.ocean.position(idx);
            self.update_cell(pos);
        }
        if self.totals.transforms > transforms {
            log::debug!(
                "Tick {}: {} terrain cells transformed",
                self.iteration,
                self.totals.transforms - transforms
            );
        }

        self.maybe_storm();

        self.ocean.clear_moved_flags();
        self.iteration += 1;

        if self.ocean.signature() == before {
            self.stagnation += 1;
        } else {
            self.stagnation = 0;
        }
    }

    fn remove_dead(&mut self) {
        for idx in 0..self.ocean.len() {
            let pos = self.ocean.position(idx);
            if !self.ocean.organism(pos).is_alive() {
                self.ocean.clear(pos);
                self.totals.deaths += 1;
            }
        }
    }

    fn update_cell(&mut self, pos: Position) {
        let ready = {
            let cell = self.ocean.get_mut(pos);
            if cell.moved || cell.is_empty() {
                return;
            }
            cell.organism.tick();
            cell.organism.ready_to_transform()
        };

        if ready {
            let next = self
                .ocean
                .organism(pos)
                .transformed(&self.config, &mut self.rng);
            if let Some(next) = next {
                self.ocean.place(pos, next);
                self.totals.transforms += 1;
            }
            return;
        }

        let actions = decision::decide(&self.ocean, pos, &self.config, &mut self.rng);
        for action in actions {
            let outcome = action.apply(&mut self.ocean);
            self.record(outcome);
        }
    }

    fn maybe_storm(&mut self) {
        let chance = self.config.storm.chance;
        if chance <= 0.0 || !self.rng.gen_bool(chance) {
            return;
        }

        let center = Position::new(
            self.rng.gen_range(0..self.ocean.rows()),
            self.rng.gen_range(0..self.ocean.cols()),
        );
        let radius = self.config.storm.radius.sample(&mut self.rng) as usize;

        let outcome = Action::Storm { center, radius }.apply(&mut self.ocean);
        if let Outcome::Cleared { cells, fauna } = outcome {
            log::debug!(
                "Storm at ({}, {}) radius {} cleared {} cells ({} fauna)",
                center.row,
                center.col,
                radius,
                cells,
                fauna
            );
        }
        self.record(outcome);
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Born(_) => self.totals.births += 1,
            Outcome::Ate { .. } => self.totals.meals += 1,
            Outcome::Cleared { fauna, .. } => {
                self.totals.storms += 1;
                self.totals.storm_casualties += fauna as u64;
            }
            Outcome::Nothing | Outcome::Moved(_) | Outcome::Blocked => {}
        }
    }
}
