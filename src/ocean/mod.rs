pub mod cell;
pub mod neighborhood;
pub mod populate;

use crate::organism::{Organism, Species};
use crate::stats::Census;
use cell::Cell;
use neighborhood::Position;

/// Row-major toroidal grid. Every slot always holds exactly one occupant.
#[derive(Debug, Clone)]
pub struct Ocean {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    next_id: u64,
}

impl Ocean {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::empty(); rows * cols],
            next_id: 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        pos.row * self.cols + pos.col
    }

    pub fn position(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.position(i))
    }

    pub fn get(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    pub fn get_mut(&mut self, pos: Position) -> &mut Cell {
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    pub fn organism(&self, pos: Position) -> &Organism {
        &self.get(pos).organism
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Puts a newly created occupant at `pos`, replacing whatever was there.
    pub fn place(&mut self, pos: Position, organism: Organism) -> u64 {
        let id = if organism.is_empty() {
            0
        } else {
            let id = self.next_id;
            self.next_id += 1;
            id
        };

        *self.get_mut(pos) = Cell {
            id,
            moved: false,
            organism,
        };
        id
    }

    /// Empties `pos` and returns the previous occupant.
    pub fn clear(&mut self, pos: Position) -> Cell {
        self.get_mut(pos).vacate()
    }

    pub fn swap(&mut self, a: Position, b: Position) {
        let (ia, ib) = (self.index(a), self.index(b));
        self.cells.swap(ia, ib);
    }

    pub fn clear_moved_flags(&mut self) {
        for cell in &mut self.cells {
            cell.moved = false;
        }
    }

    pub fn count(&self, species: Species) -> usize {
        self.cells.iter().filter(|c| c.species() == species).count()
    }

    pub fn census(&self) -> Census {
        Census::from_cells(&self.cells)
    }

    pub fn symbols(&self) -> Vec<char> {
        self.cells.iter().map(Cell::symbol).collect()
    }

    /// Occupant identity and symbol per cell, compared tick to tick to
    /// detect stagnation.
    pub fn signature(&self) -> Vec<(u64, char)> {
        self.cells.iter().map(|c| (c.id, c.symbol())).collect()
    }
}
