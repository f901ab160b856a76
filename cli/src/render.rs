use std::io::{self, Write};

use minesweeper_core::{Board, Position, TileView};

fn cell_symbol(view: TileView) -> char {
    match view {
        TileView::Hidden => '.',
        TileView::Mine => '*',
        // counts never exceed 8
        TileView::Revealed(count) => char::from(b'0' + count),
    }
}

fn column_header(size: u8) -> String {
    let mut header = String::from("    ");
    for x in 0..size {
        header.push_str(&format!(" {x:<3}"));
    }
    header.trim_end().to_owned()
}

/// Draws the board with row 0 at the bottom and indices on every side.
pub fn render_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let size = board.size();
    let header = column_header(size);
    let separator = format!("   {}", "-".repeat(usize::from(size) * 4 + 1));

    writeln!(out)?;
    writeln!(out, "{header}")?;
    writeln!(out, "{separator}")?;
    for y in (0..size).rev() {
        write!(out, "{y:<3}|")?;
        for x in 0..size {
            let tile = &board.grid()[Position::new(x, y)];
            write!(out, " {} |", cell_symbol(tile.view()))?;
        }
        writeln!(out, " {y}")?;
        writeln!(out, "{separator}")?;
    }
    writeln!(out, "{header}")?;
    writeln!(out)
}
