use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid grid size {rows}x{cols}, both sides must be positive")]
    InvalidSize { rows: Coord, cols: Coord },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Too many mines, requested {mines} but only {cells} cells fit")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
