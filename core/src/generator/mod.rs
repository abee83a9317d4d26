use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid>;
}

/// Places mines on exactly the given cells, used for puzzles and deterministic tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Cell>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        let grid = Grid::from_mines(config.rows, config.cols, &self.mines)?;

        if grid.mine_count() != config.mines {
            log::warn!(
                "Fixed layout mine count mismatch, actual: {}, requested: {}",
                grid.mine_count(),
                config.mines
            );
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_generator_places_given_mines() {
        let config = GameConfig::new(4, 4, 2).unwrap();
        let grid = FixedMineGenerator::new([cell(0, 0), cell(3, 3)])
            .generate(config)
            .unwrap();

        assert_eq!(grid.mines().collect::<Vec<_>>(), vec![0, 15]);
        assert_eq!(grid.adjacent_mine_count(cell(1, 1)), Some(1));
    }

    #[test]
    fn fixed_generator_rejects_cells_outside_grid() {
        let config = GameConfig::new(4, 4, 1).unwrap();

        assert_eq!(
            FixedMineGenerator::new([cell(4, 0)]).generate(config),
            Err(GameError::InvalidCoords)
        );
    }
}
