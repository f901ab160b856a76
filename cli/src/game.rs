use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use minesweeper_core::{Board, GameStatus, Position};

use crate::prompt::Prompter;
use crate::render::render_board;

/// Runs reveals until the board reaches a terminal status.
pub fn play<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    board: &mut Board,
) -> Result<GameStatus> {
    let mut redraw = true;
    while !board.is_finished() {
        if redraw {
            render_board(prompter.output(), board).context("Could not draw board")?;
        }
        writeln!(prompter.output(), "choose a tile")?;
        let x = prompter.coordinate("x", board.size())?;
        let y = prompter.coordinate("y", board.size())?;

        let outcome = board.reveal(Position::new(x, y))?;
        log::debug!(
            "Reveal ({}, {}): {:?}, revealed {}/{}",
            x,
            y,
            outcome,
            board.revealed_count(),
            board.safe_tile_count()
        );
        redraw = outcome.has_update();
        if !redraw {
            writeln!(prompter.output(), "That tile is already revealed")?;
        }
    }

    let out = prompter.output();
    match board.status() {
        GameStatus::Won => writeln!(out, "\nWinner")?,
        GameStatus::Lost => writeln!(out, "\nBANG")?,
        GameStatus::InProgress => {}
    }
    render_board(out, board).context("Could not draw board")?;
    writeln!(out, "Thank you for playing!")?;
    Ok(board.status())
}
