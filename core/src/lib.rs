use serde::{Deserialize, Serialize};

pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use state::*;
pub use tile::*;
pub use types::*;

mod difficulty;
mod engine;
mod error;
mod generator;
mod grid;
mod state;
mod tile;
mod types;

/// Side length and mine count of a square board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects empty boards and boards without a single free tile.
    pub const fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines >= mult(size, size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mines
    }
}
