use sapper_core::{Cell, Grid, Match, MatchPhase, cell};

/// Single character for a cell as the player sees it.
fn cell_glyph(grid: &Grid, pos: Cell) -> char {
    let revealed = grid.is_revealed(pos).unwrap_or(false);
    let has_mine = grid.has_mine(pos).unwrap_or(false);

    match (revealed, has_mine) {
        (true, true) => '*',
        (true, false) => match grid.adjacent_mine_count(pos).unwrap_or(0) {
            0 => '.',
            count => char::from(b'0' + count),
        },
        (false, _) if grid.is_flagged(pos) == Some(true) => 'F',
        (false, _) => '#',
    }
}

/// Plain-text board with a column ruler and a status line.
pub(crate) fn render(game: &Match) -> String {
    let grid = game.grid();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..grid.cols() {
        out.push(char::from(b'0' + (col % 10) as u8));
    }
    out.push('\n');

    for row in 0..grid.rows() {
        out.push_str(&format!("{:>2} ", row));
        for col in 0..grid.cols() {
            out.push(cell_glyph(grid, cell(row, col)));
        }
        out.push('\n');
    }

    let status = match game.phase() {
        MatchPhase::Playing => "playing",
        MatchPhase::Won => "won",
        MatchPhase::Lost => "lost",
    };
    out.push_str(&format!(
        "status: {}  mines left: {}  time: {}s",
        status,
        game.mines_left(),
        game.elapsed_secs()
    ));
    out
}
