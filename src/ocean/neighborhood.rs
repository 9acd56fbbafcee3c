use super::cell::Cell;
use super::Ocean;
use crate::organism::Species;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_row: isize,
    pub d_col: isize,
}

impl Offset {
    pub const NORTH: Offset = Offset::new(-1, 0);
    pub const SOUTH: Offset = Offset::new(1, 0);
    pub const WEST: Offset = Offset::new(0, -1);
    pub const EAST: Offset = Offset::new(0, 1);
    pub const CARDINALS: [Offset; 4] = [Offset::NORTH, Offset::SOUTH, Offset::WEST, Offset::EAST];

    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    pub fn scaled(&self, factor: isize) -> Self {
        Self::new(self.d_row * factor, self.d_col * factor)
    }

    /// Chessboard distance, the ring a neighbor sits on.
    pub fn distance(&self) -> usize {
        self.d_row.unsigned_abs().max(self.d_col.unsigned_abs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub offset: Offset,
    pub position: Position,
}

/// Toroidal wrap of `coord + delta` into `[0, extent)`.
pub fn wrap(coord: usize, delta: isize, extent: usize) -> usize {
    debug_assert!(extent > 0);
    (coord as isize + delta).rem_euclid(extent as isize) as usize
}

impl Ocean {
    pub fn offset(&self, pos: Position, offset: Offset) -> Position {
        Position::new(
            wrap(pos.row, offset.d_row, self.rows()),
            wrap(pos.col, offset.d_col, self.cols()),
        )
    }

    /// Cells within `radius` of `pos`, in row-major offset order. The center
    /// and any offset that wraps back onto an already listed cell are skipped.
    pub fn neighborhood(&self, pos: Position, radius: usize) -> Vec<Neighbor> {
        let r = radius as isize;
        let mut result: Vec<Neighbor> = Vec::with_capacity((2 * radius + 1).pow(2));

        for d_row in -r..=r {
            for d_col in -r..=r {
                if d_row == 0 && d_col == 0 {
                    continue;
                }

                let offset = Offset::new(d_row, d_col);
                let position = self.offset(pos, offset);
                if position == pos || result.iter().any(|n| n.position == position) {
                    continue;
                }

                result.push(Neighbor { offset, position });
            }
        }

        result
    }

    pub fn first_neighbor(
        &self,
        pos: Position,
        radius: usize,
        predicate: impl Fn(&Cell) -> bool,
    ) -> Option<Neighbor> {
        self.neighborhood(pos, radius)
            .into_iter()
            .find(|n| predicate(self.get(n.position)))
    }

    /// Closest matching neighbor; ties go to the earlier one in scan order.
    pub fn nearest_neighbor(
        &self,
        pos: Position,
        radius: usize,
        predicate: impl Fn(&Cell) -> bool,
    ) -> Option<Neighbor> {
        self.neighborhood(pos, radius)
            .into_iter()
            .filter(|n| predicate(self.get(n.position)))
            .min_by_key(|n| n.offset.distance())
    }

    pub fn empty_neighbors(&self, pos: Position) -> Vec<Neighbor> {
        self.neighborhood(pos, 1)
            .into_iter()
            .filter(|n| self.get(n.position).is_empty())
            .collect()
    }

    /// A reef next to `pos` hides whatever lives there.
    pub fn is_sheltered(&self, pos: Position) -> bool {
        self.first_neighbor(pos, 1, |c| c.species() == Species::Reef)
            .is_some()
    }
}
