use core::fmt;

use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Zero-indexed tile coordinates, `x` is the column and `y` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates fall inside a square board of side `size`.
    pub const fn is_within(self, size: Coord) -> bool {
        self.x < size && self.y < size
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (Coord, Coord) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub(crate) trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Rows are indexed by `y`, so a position maps to `[y, x]`.
impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.y.into(), self.x.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: Position, (dx, dy): (i8, i8), size: Coord) -> Option<Position> {
    let x = pos.x.checked_add_signed(dx)?;
    let y = pos.y.checked_add_signed(dy)?;
    let next = Position::new(x, y);
    next.is_within(size).then_some(next)
}

/// Iterates the in-bounds 8-neighbors of a position on a square board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Position,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Position, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.size) {
                return Some(next_item);
            }
        }
    }
}
