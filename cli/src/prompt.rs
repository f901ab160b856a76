use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use minesweeper_core::{Coord, Difficulty};

const REPEAT: &str = "I'm sorry, could you repeat that?";

/// Line-based questions to the player, re-asking until the answer is valid.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush().context("Could not flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Could not read input")?;
        if read == 0 {
            bail!("Input closed before the game ended");
        }
        Ok(line)
    }

    pub fn difficulty(&mut self) -> Result<Difficulty> {
        writeln!(self.output, "Choose your difficulty!\n\nEasy    Medium     Hard\n")?;
        loop {
            let line = self.read_line()?;
            match line.parse::<Difficulty>() {
                Ok(difficulty) => return Ok(difficulty),
                Err(err) => {
                    log::debug!("Rejected difficulty {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{REPEAT}")?;
                }
            }
        }
    }

    /// Asks for one coordinate on `axis`, accepting integers in `[0, size)`.
    pub fn coordinate(&mut self, axis: &str, size: Coord) -> Result<Coord> {
        writeln!(self.output, "{axis} input:")?;
        loop {
            let line = self.read_line()?;
            let Ok(value) = line.trim().parse::<i64>() else {
                writeln!(self.output, "{axis} needs to be a number")?;
                continue;
            };
            match Coord::try_from(value) {
                Ok(coord) if coord < size => return Ok(coord),
                _ => writeln!(self.output, "{REPEAT}")?,
            }
        }
    }
}
