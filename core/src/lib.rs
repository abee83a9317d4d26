//! Rules engine for Minesweeper: grid data, mine placement, flood-fill reveal, and match state.

use serde::{Deserialize, Serialize};

pub use action::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod action;
mod engine;
mod error;
mod generator;
mod grid;
mod types;

/// Parameters a match is created from; these are the only recognized options.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(GameError::InvalidSize {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let cells = self.total_cells();
        if self.mines > cells {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_more_mines_than_cells() {
        assert_eq!(
            GameConfig::new(10, 5, 200),
            Err(GameError::TooManyMines {
                mines: 200,
                cells: 50
            })
        );
        assert!(GameConfig::new(10, 5, 50).is_ok());
    }

    #[test]
    fn config_rejects_non_positive_sides() {
        assert_eq!(
            GameConfig::new(0, 5, 0),
            Err(GameError::InvalidSize { rows: 0, cols: 5 })
        );
        assert_eq!(
            GameConfig::new(3, -1, 0),
            Err(GameError::InvalidSize { rows: 3, cols: -1 })
        );
    }
}
