use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement by rejection sampling: draw a linear index, retry when it already holds a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        if let Err(err) = config.validate() {
            log::warn!("Refused to generate grid for {:?}: {}", config, err);
            return Err(err);
        }

        let mut grid = Grid::empty(config.rows, config.cols)?;
        let total_cells = config.total_cells();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut samples: u64 = 0;

        while grid.mine_count() < config.mines {
            let index = rng.random_range(0..total_cells);
            samples += 1;
            grid.insert_mine_index(index);
        }

        grid.recompute_counts();
        log::debug!(
            "Generated {}x{} grid with {} mines from seed {} after {} samples",
            config.rows,
            config.cols,
            config.mines,
            self.seed,
            samples
        );
        Ok(grid)
    }
}
