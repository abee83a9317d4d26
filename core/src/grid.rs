use std::collections::BTreeSet;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular minefield together with the player's reveal and flag marks.
///
/// Public operations never mutate in place: each one borrows the grid and hands back a fresh value, or `None`
/// when the addressed cell is outside the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    rows: Coord,
    cols: Coord,
    mines: BTreeSet<CellIndex>,
    flagged: BTreeSet<CellIndex>,
    revealed: Array2<bool>,
    adjacent_mines: Array2<u8>,
}

/// Unchecked wire shape of [`Grid`], validated before it becomes one.
#[derive(Deserialize)]
struct GridRepr {
    rows: Coord,
    cols: Coord,
    mines: BTreeSet<CellIndex>,
    flagged: BTreeSet<CellIndex>,
    revealed: Array2<bool>,
    adjacent_mines: Array2<u8>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GameError;

    fn try_from(repr: GridRepr) -> Result<Self> {
        let mut grid = Self::empty(repr.rows, repr.cols)?;

        let shape = (grid.rows as usize, grid.cols as usize);
        if repr.revealed.dim() != shape || repr.adjacent_mines.dim() != shape {
            log::warn!(
                "Rejected grid planes {:?}/{:?} for size {:?}",
                repr.revealed.dim(),
                repr.adjacent_mines.dim(),
                shape
            );
            return Err(GameError::InvalidBoardShape);
        }

        let total_cells = grid.total_cells();
        if repr.mines.iter().chain(&repr.flagged).any(|&index| index >= total_cells) {
            return Err(GameError::InvalidCoords);
        }

        grid.mines = repr.mines;
        grid.flagged = repr.flagged;
        grid.revealed.assign(&repr.revealed);
        grid.recompute_counts();
        Ok(grid)
    }
}

impl Grid {
    /// Grid without mines, nothing revealed or flagged.
    pub fn empty(rows: Coord, cols: Coord) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            log::warn!("Rejected grid size {}x{}", rows, cols);
            return Err(GameError::InvalidSize { rows, cols });
        }

        let shape = [rows as usize, cols as usize];
        Ok(Self {
            rows,
            cols,
            mines: BTreeSet::new(),
            flagged: BTreeSet::new(),
            revealed: Array2::default(shape),
            adjacent_mines: Array2::zeros(shape),
        })
    }

    /// Grid with `mines` randomly placed mines and adjacency counts computed.
    pub fn random(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        Self::random_with_seed(rows, cols, mines, rand::random())
    }

    pub fn random_with_seed(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        RandomMineGenerator::new(seed).generate(GameConfig::new_unchecked(rows, cols, mines))
    }

    /// Grid with mines at exactly the given cells, duplicates collapsed.
    pub fn from_mines(rows: Coord, cols: Coord, mine_cells: &[Cell]) -> Result<Self> {
        let mut grid = Self::empty(rows, cols)?;

        for &mine in mine_cells {
            let index = grid.cell_index(mine).ok_or(GameError::InvalidCoords)?;
            grid.mines.insert(index);
        }

        grid.recompute_counts();
        Ok(grid)
    }

    pub fn rows(&self) -> Coord {
        self.rows
    }

    pub fn cols(&self) -> Coord {
        self.cols
    }

    pub fn size(&self) -> (Coord, Coord) {
        (self.rows, self.cols)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged.len()
    }

    /// Linear indices holding a mine, ascending.
    pub fn mines(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.mines.iter().copied()
    }

    /// Linear indices carrying a flag, ascending.
    pub fn flagged(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.flagged.iter().copied()
    }

    /// Linear indices that are still concealed, ascending.
    pub fn unrevealed_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter(|&(_, &revealed)| !revealed)
            .map(|(index, _)| index)
    }

    /// Every cell of the grid in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| cell(row, col)))
    }

    pub fn contains(&self, target: Cell) -> bool {
        (0..self.rows).contains(&target.row) && (0..self.cols).contains(&target.col)
    }

    pub fn cell_index(&self, target: Cell) -> Option<CellIndex> {
        let [row, col] = self.nd_index(target)?;
        Some(row * self.cols as usize + col)
    }

    /// Inverse of [`Grid::cell_index`].
    pub fn cell_at(&self, index: CellIndex) -> Option<Cell> {
        if index >= self.total_cells() {
            return None;
        }
        let cols = self.cols as usize;
        Some(cell((index / cols) as Coord, (index % cols) as Coord))
    }

    pub fn has_mine(&self, target: Cell) -> Option<bool> {
        self.cell_index(target).map(|index| self.mines.contains(&index))
    }

    pub fn is_flagged(&self, target: Cell) -> Option<bool> {
        self.cell_index(target).map(|index| self.flagged.contains(&index))
    }

    pub fn is_revealed(&self, target: Cell) -> Option<bool> {
        self.nd_index(target).map(|ix| self.revealed[ix])
    }

    pub fn adjacent_mine_count(&self, target: Cell) -> Option<u8> {
        self.nd_index(target).map(|ix| self.adjacent_mines[ix])
    }

    /// Whether no neighbour holds a mine. The cell's own mine does not matter.
    pub fn is_empty_cell(&self, target: Cell) -> Option<bool> {
        self.adjacent_mine_count(target).map(|count| count == 0)
    }

    pub fn with_flagged(&self, target: Cell) -> Option<Self> {
        let index = self.cell_index(target)?;
        let mut next = self.clone();
        next.flagged.insert(index);
        Some(next)
    }

    pub fn with_flag_toggled(&self, target: Cell) -> Option<Self> {
        let mut next = self.clone();
        next.toggle_flag(target)?;
        Some(next)
    }

    pub fn with_revealed(&self, target: Cell) -> Option<Self> {
        let mut next = self.clone();
        next.reveal(target)?;
        Some(next)
    }

    /// Adds a mine without touching the adjacency counts; follow up with [`Grid::with_recomputed_counts`].
    pub fn with_mine(&self, target: Cell) -> Option<Self> {
        let index = self.cell_index(target)?;
        let mut next = self.clone();
        next.mines.insert(index);
        Some(next)
    }

    pub fn with_all_mines_revealed(&self) -> Self {
        let mut next = self.clone();
        next.reveal_all_mines();
        next
    }

    pub fn with_recomputed_counts(&self) -> Self {
        let mut next = self.clone();
        next.recompute_counts();
        next
    }

    /// In-bounds Moore neighbours in row-major order, empty for an out-of-range cell.
    pub fn adjacent_cells(&self, target: Cell) -> Vec<Cell> {
        if !self.contains(target) {
            return Vec::new();
        }
        self.iter_neighbors(target).collect()
    }

    pub fn count_adjacent_mines(&self, target: Cell) -> u8 {
        if !self.contains(target) {
            return 0;
        }
        self.iter_neighbors(target)
            .filter(|&pos| self.has_mine(pos) == Some(true))
            .fold(0, |count, _| count + 1)
    }

    /// Every mine is still concealed and every other cell is revealed.
    pub fn is_cleared(&self) -> bool {
        self.unrevealed_indices().eq(self.mines())
    }

    pub(crate) fn iter_neighbors(&self, target: Cell) -> NeighborIter {
        NeighborIter::new(target, self.size())
    }

    pub(crate) fn insert_mine_index(&mut self, index: CellIndex) -> bool {
        index < self.total_cells() && self.mines.insert(index)
    }

    pub(crate) fn toggle_flag(&mut self, target: Cell) -> Option<bool> {
        let index = self.cell_index(target)?;
        if self.flagged.remove(&index) {
            Some(false)
        } else {
            self.flagged.insert(index);
            Some(true)
        }
    }

    /// Marks the cell revealed, returning whether it was concealed before.
    pub(crate) fn reveal(&mut self, target: Cell) -> Option<bool> {
        let ix = self.nd_index(target)?;
        let was_concealed = !self.revealed[ix];
        self.revealed[ix] = true;
        Some(was_concealed)
    }

    pub(crate) fn reveal_all_mines(&mut self) {
        let cols = self.cols as usize;
        for &index in &self.mines {
            self.revealed[[index / cols, index % cols]] = true;
        }
    }

    pub(crate) fn recompute_counts(&mut self) {
        let counts = Array2::from_shape_fn(self.revealed.raw_dim(), |(row, col)| {
            self.count_adjacent_mines(cell(row as Coord, col as Coord))
        });
        self.adjacent_mines = counts;
    }

    fn nd_index(&self, target: Cell) -> Option<[usize; 2]> {
        self.contains(target)
            .then(|| [target.row as usize, target.col as usize])
    }
}
