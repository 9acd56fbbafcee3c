use crate::organism::{Organism, Species};

/// One slot of the ocean. `id` identifies the occupant across moves; empty
/// water is always id 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: u64,
    pub moved: bool,
    pub organism: Organism,
}

impl Cell {
    pub fn empty() -> Self {
        Self {
            id: 0,
            moved: false,
            organism: Organism::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.organism.is_empty()
    }

    pub fn species(&self) -> Species {
        self.organism.species()
    }

    pub fn symbol(&self) -> char {
        self.organism.symbol()
    }

    /// Leaves empty water behind and returns the previous occupant.
    pub fn vacate(&mut self) -> Cell {
        std::mem::replace(self, Cell::empty())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}
