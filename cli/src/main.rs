use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sapper_core::*;

mod command;
mod view;

use command::{Command, USAGE};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(short, long, default_value_t = 9)]
    rows: Coord,

    /// Number of columns
    #[arg(short, long, default_value_t = 9)]
    cols: Coord,

    /// Number of mines
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random, only used for the first match
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(args.rows, args.cols, args.mines).context("Invalid game configuration")?;
    log::debug!("config: {:?}, seed: {:?}", config, args.seed);

    let mut state = match args.seed {
        Some(seed) => Match::with_seed(config, seed),
        None => Match::new(config),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", USAGE)?;
    show(&mut stdout, &state)?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read command")?;
        match Command::parse(&line, config) {
            Ok(Command::Quit) => break,
            Ok(Command::Act(action)) => {
                state = reduce(state, action);
                show(&mut stdout, &state)?;
            }
            Err(err) => {
                log::debug!("rejected input {:?}: {}", line, err);
                writeln!(stdout, "{}\n{}", err, USAGE)?;
            }
        }
    }

    Ok(())
}

fn show(out: &mut impl Write, state: &Result<Match>) -> io::Result<()> {
    match state {
        Ok(game) => writeln!(out, "{}", view::render(game)),
        Err(err) => writeln!(out, "Cannot create match: {}", err),
    }
}
