use serde::{Deserialize, Serialize};

use crate::*;

/// Player or host intent, applied to the current state one at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchAction {
    PrimaryClick(Cell),
    SecondaryClick(Cell),
    NewMatch(GameConfig),
}

/// Applies `action` to `state` and returns the state to adopt next.
///
/// Clicks on a state that failed to build keep the error; starting a new match always replaces it.
pub fn reduce(state: Result<Match>, action: MatchAction) -> Result<Match> {
    match action {
        MatchAction::PrimaryClick(target) => state.map(|game| game.primary_click(target)),
        MatchAction::SecondaryClick(target) => state.map(|game| game.secondary_click(target)),
        MatchAction::NewMatch(config) => {
            log::debug!("New match requested: {:?}", config);
            Match::new(config)
        }
    }
}
