use serde::{Deserialize, Serialize};

use crate::Position;

/// One cell of the grid.
///
/// `adjacent_mines` is only meaningful when `has_mine` is false, mine tiles
/// keep it at zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    position: Position,
    pub(crate) has_mine: bool,
    pub(crate) adjacent_mines: u8,
    revealed: bool,
}

impl Tile {
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            has_mine: false,
            adjacent_mines: 0,
            revealed: false,
        }
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Revealing is one-way, there is no way to hide a tile again.
    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub const fn view(&self) -> TileView {
        match (self.revealed, self.has_mine) {
            (false, _) => TileView::Hidden,
            (true, true) => TileView::Mine,
            (true, false) => TileView::Revealed(self.adjacent_mines),
        }
    }
}

/// Player-visible state of a tile, used by front ends for rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Revealed(u8),
    Mine,
}

impl TileView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for TileView {
    fn default() -> Self {
        Self::Hidden
    }
}
