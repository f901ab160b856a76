use core::ops::{Index, IndexMut};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::ToNdIndex;
use crate::*;

/// Square container of tiles, stored row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    /// Creates a grid without mines where every tile knows its own position.
    pub fn new(size: Coord) -> Self {
        let side = usize::from(size);
        let tiles = Array2::from_shape_fn((side, side), |(row, col)| {
            // both indices are below `size`, which is a `Coord`
            Tile::new(Position::new(col as Coord, row as Coord))
        });
        Self { tiles }
    }

    /// Builds a grid with mines at exactly the given positions and computes adjacency.
    pub fn from_mine_positions(size: Coord, mines: &[Position]) -> Result<Self> {
        let mut grid = Self::new(size);

        for &pos in mines {
            grid.validate_position(pos)?;
            grid[pos].has_mine = true;
        }

        compute_adjacency(&mut grid);
        Ok(grid)
    }

    pub fn size(&self) -> Coord {
        // constructed from a `Coord` side length
        self.tiles.nrows() as Coord
    }

    pub fn total_tiles(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.has_mine).count() as CellCount
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size())
    }

    pub fn validate_position(&self, pos: Position) -> Result<Position> {
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Position of the `index`-th tile in scan order (`y` outer, `x` inner).
    pub fn position_at(&self, index: usize) -> Position {
        let side = usize::from(self.size());
        Position::new((index % side) as Coord, (index / side) as Coord)
    }

    /// All positions in scan order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size();
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// All tiles in scan order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn iter_neighbors(&self, pos: Position) -> NeighborIter {
        NeighborIter::new(pos, self.size())
    }

    pub fn adjacent_mine_count(&self, pos: Position) -> u8 {
        self.iter_neighbors(pos)
            .filter(|&neighbor| self[neighbor].has_mine)
            .count() as u8
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.to_nd_index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.tiles[pos.to_nd_index()]
    }
}
