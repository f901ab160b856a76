use crate::*;
pub use shuffle::*;

mod shuffle;

/// Produces a fully initialized grid for a configuration: mines placed and
/// adjacency computed, ready for the first reveal.
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> Grid;
}

/// Deterministic layout, mines fill the first tiles in scan order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedLayout;

impl LayoutGenerator for FixedLayout {
    fn generate(self, config: GameConfig) -> Grid {
        log::debug!(
            "Fixed layout, size: {}, mines: {}",
            config.size,
            config.mines
        );
        let mut grid = Grid::new(config.size);
        place_mines(&mut grid, config.mines);
        compute_adjacency(&mut grid);
        grid
    }
}

/// Marks the first `mine_count` tiles in scan order as mines.
pub fn place_mines(grid: &mut Grid, mine_count: CellCount) {
    let total = grid.total_tiles();
    if mine_count > total {
        log::warn!(
            "Grid already full, requested {} mines but only fits {}",
            mine_count,
            total
        );
    }

    for index in 0..usize::from(mine_count.min(total)) {
        let pos = grid.position_at(index);
        grid[pos].has_mine = true;
    }
}

/// Stores the number of neighboring mines on every non-mine tile.
///
/// Must run once mine positions are final, counts are not kept up to date
/// when mines move afterwards.
pub fn compute_adjacency(grid: &mut Grid) {
    for pos in grid.positions() {
        let count = if grid[pos].has_mine {
            0
        } else {
            grid.adjacent_mine_count(pos)
        };
        grid[pos].adjacent_mines = count;
    }
}
