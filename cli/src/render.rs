use std::fmt::Write;

use mineboard_core::{Board, Cell, CellState, Coord2, GameStatus, Snapshot};

/// Glyph for one cell. Mapping to characters only happens here, the core only knows cell states.
fn glyph(cell: &Cell, triggered_mine: Option<Coord2>) -> char {
    if triggered_mine == Some(cell.coords()) {
        return 'X';
    }

    match cell.state() {
        CellState::Hidden => '#',
        CellState::Flagged => 'F',
        CellState::Revealed(0) => '.',
        CellState::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellState::Mine => '*',
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    }
}

pub(crate) fn render(snapshot: &Snapshot<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} | mines left: {} | time: {}s | {}",
        snapshot.difficulty,
        snapshot.mines_left,
        snapshot.elapsed_secs,
        status_label(snapshot.status)
    );
    render_board(&mut out, snapshot.board, snapshot.triggered_mine);
    out
}

fn render_board(out: &mut String, board: &Board, triggered_mine: Option<Coord2>) {
    out.push_str("   ");
    for x in 0..board.cols() {
        let _ = write!(out, "{x:>3}");
    }
    out.push('\n');

    for (y, row) in board.iter_rows().enumerate() {
        let _ = write!(out, "{y:>3}");
        for cell in row.iter() {
            let _ = write!(out, "{:>3}", glyph(cell, triggered_mine));
        }
        out.push('\n');
    }
}
