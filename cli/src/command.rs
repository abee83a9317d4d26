use sapper_core::{Cell, Coord, GameConfig, MatchAction, cell};
use thiserror::Error;

pub(crate) const USAGE: &str = "commands: r ROW COL (reveal), f ROW COL (flag), n (new match), q (quit)";

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Act(MatchAction),
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub(crate) enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}")]
    Unknown(String),
    #[error("Expected ROW COL after {0:?}")]
    MissingCell(String),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
}

impl Command {
    /// Parses a line of input, `config` is used for starting a new match.
    pub(crate) fn parse(line: &str, config: GameConfig) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;

        Ok(match verb {
            "r" | "reveal" => Command::Act(MatchAction::PrimaryClick(parse_cell(verb, words)?)),
            "f" | "flag" => Command::Act(MatchAction::SecondaryClick(parse_cell(verb, words)?)),
            "n" | "new" => Command::Act(MatchAction::NewMatch(config)),
            "q" | "quit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        })
    }
}

fn parse_cell<'a>(verb: &str, mut words: impl Iterator<Item = &'a str>) -> Result<Cell, CommandError> {
    let mut next_coord = || {
        let word = words
            .next()
            .ok_or_else(|| CommandError::MissingCell(verb.to_string()))?;
        word.parse::<Coord>()
            .map_err(|_| CommandError::InvalidCoord(word.to_string()))
    };
    let row = next_coord()?;
    let col = next_coord()?;
    Ok(cell(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: GameConfig = GameConfig::new_unchecked(9, 9, 10);

    #[test]
    fn parses_clicks_and_control_commands() {
        assert_eq!(
            Command::parse("r 3 4", CONFIG),
            Ok(Command::Act(MatchAction::PrimaryClick(cell(3, 4))))
        );
        assert_eq!(
            Command::parse("  flag 0 -1 ", CONFIG),
            Ok(Command::Act(MatchAction::SecondaryClick(cell(0, -1))))
        );
        assert_eq!(
            Command::parse("n", CONFIG),
            Ok(Command::Act(MatchAction::NewMatch(CONFIG)))
        );
        assert_eq!(Command::parse("quit", CONFIG), Ok(Command::Quit));
    }

    #[test]
    fn reports_malformed_commands() {
        assert_eq!(Command::parse("", CONFIG), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("x 1 1", CONFIG),
            Err(CommandError::Unknown("x".to_string()))
        );
        assert_eq!(
            Command::parse("r 1", CONFIG),
            Err(CommandError::MissingCell("r".to_string()))
        );
        assert_eq!(
            Command::parse("f a 1", CONFIG),
            Err(CommandError::InvalidCoord("a".to_string()))
        );
    }
}
