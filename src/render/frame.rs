use crate::simulation::Simulation;
use crate::stats::SimulationMetrics;
use serde::{Deserialize, Serialize};

/// Read-only picture of one tick handed to a renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub iteration: u64,
    pub stagnation: u64,
    pub rows: usize,
    pub cols: usize,
    pub metrics: SimulationMetrics,
    /// Row-major display symbols.
    pub symbols: Vec<char>,
}

impl Frame {
    pub fn capture(sim: &Simulation) -> Self {
        let ocean = sim.ocean();
        Self {
            iteration: sim.iteration(),
            stagnation: sim.stagnation(),
            rows: ocean.rows(),
            cols: ocean.cols(),
            metrics: sim.metrics(),
            symbols: ocean.symbols(),
        }
    }

    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.cols;
        &self.symbols[start..start + self.cols]
    }

    /// The grid as text, one line per row with symbols separated by a space.
    pub fn grid_lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                let mut line = String::with_capacity(self.cols * 2);
                for &symbol in self.row(r) {
                    line.push(symbol);
                    line.push(' ');
                }
                line
            })
            .collect()
    }

    pub fn header(&self) -> String {
        let census = &self.metrics.census;
        let counts = format!(
            "Prey: {} | Predators: {} | Apex: {} | Stone: {} | Reef: {}",
            census.prey, census.predator, census.apex, census.stone, census.reef
        );
        format!(
            "Iteration = {} | Stagnation = {} | {}",
            self.iteration, self.stagnation, counts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ocean::neighborhood::Position;
    use crate::ocean::Ocean;
    use crate::organism::{Organism, Terrain};

    #[test]
    fn test_capture() {
        let mut ocean = Ocean::new(2, 3);
        ocean.place(Position::new(0, 1), Organism::Stone(Terrain::new(5)));
        ocean.place(Position::new(1, 2), Organism::Reef(Terrain::new(5)));
        let sim = Simulation::with_ocean(&Config::default(), ocean, 1);

        let frame = Frame::capture(&sim);
        assert_eq!(frame.rows, 2);
        assert_eq!(frame.cols, 3);
        assert_eq!(frame.symbols.len(), 6);
        assert_eq!(frame.row(0), &[' ', '*', ' ']);
        assert_eq!(frame.grid_lines()[1], "    & ");
        assert!(frame.header().starts_with("Iteration = 0 | Stagnation = 0"));
    }

    #[test]
    fn test_frame_serializes() {
        let sim = Simulation::new(&Config::default(), Some(3));
        let frame = sim.frame();

        let json = serde_json::to_string(&frame).unwrap();
        let decoded: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.symbols, frame.symbols);
        assert_eq!(decoded.metrics.census, frame.metrics.census);
    }
}
