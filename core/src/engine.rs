use std::collections::VecDeque;

use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl MatchPhase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Indicates the match has ended and no moves are accepted anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A match from the first click to a win or a loss.
///
/// Player actions consume the match and return its successor; once finished the value is frozen and every action
/// hands it back untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    phase: MatchPhase,
    grid: Grid,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Fresh match on a randomly mined grid.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(rand::random()))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        Ok(Self::from_grid(generator.generate(config)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            phase: MatchPhase::Playing,
            grid,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// How many mines have not been flagged yet, negative when the player over-flags
    pub fn mines_left(&self) -> isize {
        (self.grid.mine_count() as isize) - (self.grid.flag_count() as isize)
    }

    /// How many seconds have passed since the match started, 0 if it hasn't started
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs_at(Utc::now())
    }

    pub fn elapsed_secs_at(&self, now: DateTime<Utc>) -> u32 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let secs = (self.ended_at.unwrap_or(now) - started_at).num_seconds().max(0);
        u32::try_from(secs).unwrap_or(u32::MAX)
    }

    /// Reveal a cell: explode on a mine, flood-fill otherwise.
    pub fn primary_click(self, target: impl Into<Cell>) -> Self {
        self.primary_click_at(target, Utc::now())
    }

    pub fn primary_click_at(mut self, target: impl Into<Cell>, now: DateTime<Utc>) -> Self {
        let target = target.into();
        if !self.phase.is_playing() || !self.grid.contains(target) {
            return self;
        }

        self.mark_started(now);

        if self.grid.is_flagged(target) == Some(true) {
            log::debug!("Ignored click on flagged cell {}", target);
            return self;
        }

        if self.grid.has_mine(target) == Some(true) {
            log::debug!("Mine hit at {}", target);
            self.grid.reveal_all_mines();
            self.mark_ended(MatchPhase::Lost, now);
            return self;
        }

        flood_reveal(&mut self.grid, target);

        if self.grid.is_cleared() {
            self.mark_ended(MatchPhase::Won, now);
        }
        self
    }

    /// Toggle the flag on a concealed cell.
    pub fn secondary_click(self, target: impl Into<Cell>) -> Self {
        self.secondary_click_at(target, Utc::now())
    }

    pub fn secondary_click_at(mut self, target: impl Into<Cell>, now: DateTime<Utc>) -> Self {
        let target = target.into();
        if !self.phase.is_playing() || !self.grid.contains(target) {
            return self;
        }

        self.mark_started(now);

        if self.grid.is_revealed(target) == Some(true) {
            return self;
        }

        if let Some(flagged) = self.grid.toggle_flag(target) {
            log::debug!("Flag at {} set to {}", target, flagged);
        }
        self
    }

    fn mark_started(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() {
            log::debug!("started at {}", now);
            self.started_at = Some(now);
        }
    }

    fn mark_ended(&mut self, phase: MatchPhase, now: DateTime<Utc>) {
        if self.phase.is_finished() {
            return;
        }
        log::debug!("ended at {} with {:?}", now, phase);
        self.phase = phase;
        self.ended_at = Some(now);
    }
}

/// Reveals `origin` and, when it has no adjacent mines, cascades through the connected empty region.
///
/// Flagged cells are never opened by the cascade.
fn flood_reveal(grid: &mut Grid, origin: Cell) {
    if grid.is_empty_cell(origin) != Some(true) {
        grid.reveal(origin);
        return;
    }

    let mut to_visit = VecDeque::from([origin]);
    log::trace!("Starting flood-fill from {}", origin);

    while let Some(visit) = to_visit.pop_front() {
        let frontier: Vec<Cell> = grid
            .iter_neighbors(visit)
            .filter(|&pos| grid.is_revealed(pos) == Some(false) && grid.is_flagged(pos) == Some(false))
            .collect();

        grid.reveal(visit);

        for pos in frontier {
            grid.reveal(pos);
            log::trace!("Flood revealed cell at {}", pos);

            if grid.is_empty_cell(pos) == Some(true) {
                to_visit.push_back(pos);
            }
        }
    }
}
