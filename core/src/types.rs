use core::fmt;

use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid rows, columns, and positions.
///
/// Signed so callers can probe cells past the top/left edge and get `None` back.
pub type Coord = i16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = usize;

/// Linear index of a cell, `row * cols + col`.
pub type CellIndex = usize;

/// Position on the grid as `(row, col)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
}

pub const fn cell(row: Coord, col: Coord) -> Cell {
    Cell { row, col }
}

impl From<(Coord, Coord)> for Cell {
    fn from((row, col): (Coord, Coord)) -> Self {
        cell(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Number of cells in a `rows x cols` grid, zero when either side is not positive.
pub const fn mult(rows: Coord, cols: Coord) -> CellCount {
    if rows <= 0 || cols <= 0 {
        return 0;
    }
    (rows as CellCount) * (cols as CellCount)
}

// Row-major scan of the 3x3 block, center excluded
const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `center`, returning a value only when it remains in bounds.
fn apply_delta(center: Cell, delta: (Coord, Coord), bounds: (Coord, Coord)) -> Option<Cell> {
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let row = center.row.checked_add(dr)?;
    if !(0..rows).contains(&row) {
        return None;
    }

    let col = center.col.checked_add(dc)?;
    if !(0..cols).contains(&col) {
        return None;
    }

    Some(cell(row, col))
}

/// Iterates the in-bounds Moore neighbours of a cell in row-major order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Cell,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Cell, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}
