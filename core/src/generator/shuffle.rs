use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Places mines in scan order, then moves them around with [`shuffle_mines`].
///
/// The shuffle is a weak one: positions early in scan order keep a higher
/// chance of holding a mine than a uniform draw would give them.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledLayout<R> {
    rng: R,
}

impl<R: Rng> ShuffledLayout<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ShuffledLayout<SmallRng> {
    /// Reproducible layout, the same seed always yields the same grid.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LayoutGenerator for ShuffledLayout<R> {
    fn generate(mut self, config: GameConfig) -> Grid {
        log::debug!(
            "Shuffled layout, size: {}, mines: {}",
            config.size,
            config.mines
        );
        let mut grid = Grid::new(config.size);
        place_mines(&mut grid, config.mines);
        shuffle_mines(&mut grid, config.mines, &mut self.rng);
        compute_adjacency(&mut grid);

        // double check mine count
        let count = grid.mine_count();
        if count != config.mines {
            log::warn!(
                "Generated grid count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        grid
    }
}

/// Runs `mine_count` iterations, each drawing a random target. When the target
/// is free its mine status is swapped with the tile at the current scan index,
/// when it already holds a mine the iteration does nothing.
pub fn shuffle_mines<R: Rng + ?Sized>(grid: &mut Grid, mine_count: CellCount, rng: &mut R) {
    let size = grid.size();
    if size == 0 {
        return;
    }

    swap_into_targets(grid, mine_count, || {
        let y = rng.random_range(0..size);
        let x = rng.random_range(0..size);
        Position::new(x, y)
    });
}

/// Swap rule of [`shuffle_mines`], with targets coming from `next_target`.
fn swap_into_targets(
    grid: &mut Grid,
    mine_count: CellCount,
    mut next_target: impl FnMut() -> Position,
) {
    let iterations = usize::from(mine_count.min(grid.total_tiles()));
    let mut moved = 0;
    for index in 0..iterations {
        let target = next_target();
        if grid[target].has_mine {
            continue;
        }

        let source = grid.position_at(index);
        let source_mine = grid[source].has_mine;
        grid[source].has_mine = grid[target].has_mine;
        grid[target].has_mine = source_mine;
        moved += 1;
    }
    log::trace!("Shuffle moved {} of {} mines", moved, iterations);
}
