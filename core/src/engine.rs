use std::collections::{HashSet, VecDeque};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Represents a game from first reveal to win or loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    config: GameConfig,
    revealed_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Position>,
}

impl Board {
    /// New shuffled board for `difficulty`, drawing from the thread-local RNG.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        // table entries always pass `GameConfig::new`
        Self::from_layout(ShuffledLayout::new(rng), difficulty.config())
    }

    /// Lays out a board for `config`, rejecting configurations that leave no
    /// safe tile before any mine is placed.
    pub fn generate(generator: impl LayoutGenerator, config: GameConfig) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        Ok(Self::from_layout(generator, config))
    }

    /// Wraps a grid built elsewhere. Adjacency is recomputed from the mine
    /// positions, so the grid may come straight from `Grid::new`.
    pub fn from_grid(mut grid: Grid) -> Result<Self> {
        let config = GameConfig::new(grid.size(), grid.mine_count())?;
        compute_adjacency(&mut grid);
        Ok(Self::with_config(grid, config))
    }

    fn from_layout(generator: impl LayoutGenerator, config: GameConfig) -> Self {
        Self::with_config(generator.generate(config), config)
    }

    fn with_config(grid: Grid, config: GameConfig) -> Self {
        Self {
            grid,
            config,
            revealed_count: 0,
            status: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn safe_tile_count(&self) -> CellCount {
        self.config.safe_tiles()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// The mine that ended the game, if any.
    pub fn triggered_mine(&self) -> Option<Position> {
        self.triggered_mine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile(&self, pos: Position) -> Result<&Tile> {
        let pos = self.grid.validate_position(pos)?;
        Ok(&self.grid[pos])
    }

    pub fn is_revealed(&self, pos: Position) -> Result<bool> {
        Ok(self.tile(pos)?.is_revealed())
    }

    pub fn display_value(&self, pos: Position) -> Result<TileView> {
        Ok(self.tile(pos)?.view())
    }

    /// Reveal a tile, cascading through neighbors when it borders no mines.
    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        let pos = self.grid.validate_position(pos)?;

        if self.grid[pos].is_revealed() {
            return Ok(RevealOutcome::Unchanged);
        }
        self.check_not_finished()?;

        let outcome = self.reveal_tile(pos);
        self.status = self
            .status
            .after_reveal(outcome, self.revealed_count, self.safe_tile_count());
        match self.status {
            GameStatus::Won => log::debug!("Won after revealing {}", pos),
            GameStatus::Lost => log::debug!("Lost on mine at {}", pos),
            GameStatus::InProgress => {}
        }
        Ok(outcome)
    }

    fn reveal_tile(&mut self, pos: Position) -> RevealOutcome {
        let tile = &mut self.grid[pos];
        tile.reveal();

        if tile.has_mine {
            self.triggered_mine = Some(pos);
            return RevealOutcome::Loss;
        }

        let count = tile.adjacent_mines;
        self.revealed_count += 1;
        log::debug!("Revealed tile at {}, mine count: {}", pos, count);

        if count == 0 {
            self.cascade_from(pos);
        }
        RevealOutcome::Continue
    }

    /// Flood-fill from a revealed zero tile. Tiles are marked as scheduled
    /// when queued, so each one is revealed at most once.
    fn cascade_from(&mut self, start: Position) {
        let before = self.revealed_count;
        let mut scheduled = HashSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_pos) = to_visit.pop_front() {
            for neighbor in self.grid.iter_neighbors(visit_pos) {
                if self.grid[neighbor].is_revealed() || !scheduled.insert(neighbor) {
                    continue;
                }

                let tile = &mut self.grid[neighbor];
                // neighbors of a zero tile are never mines
                debug_assert!(!tile.has_mine);
                tile.reveal();
                self.revealed_count += 1;
                log::trace!(
                    "Flood revealed tile at {}, mine count: {}",
                    neighbor,
                    tile.adjacent_mines
                );

                if tile.adjacent_mines == 0 {
                    to_visit.push_back(neighbor);
                }
            }
        }

        log::debug!(
            "Cascade from {} revealed {} more tiles",
            start,
            self.revealed_count - before
        );
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn pos(x: Coord, y: Coord) -> Position {
        Position::new(x, y)
    }

    fn board(size: Coord, mines: &[Position]) -> Board {
        Board::from_grid(Grid::from_mine_positions(size, mines).unwrap()).unwrap()
    }

    fn revealed_positions(board: &Board) -> Vec<Position> {
        board
            .grid()
            .tiles()
            .filter(|tile| tile.is_revealed())
            .map(Tile::position)
            .collect()
    }

    #[test]
    fn every_tier_places_exact_mine_count() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            let mut rng = SmallRng::seed_from_u64(u64::from(config.mines));

            let seeded = Board::with_rng(difficulty, &mut rng);
            assert_eq!(seeded.grid().mine_count(), config.mines);
            assert_eq!(seeded.size(), config.size);

            let default = Board::new(difficulty);
            assert_eq!(default.grid().mine_count(), config.mines);
            assert_eq!(default.status(), GameStatus::InProgress);
            assert_eq!(default.revealed_count(), 0);
        }
    }

    #[test]
    fn four_by_four_example() {
        let mut board = board(4, &[pos(0, 0), pos(3, 3)]);

        assert_eq!(board.tile(pos(1, 1)).unwrap().adjacent_mines(), 1);
        assert_eq!(board.tile(pos(2, 2)).unwrap().adjacent_mines(), 1);

        assert_eq!(board.reveal(pos(2, 2)), Ok(RevealOutcome::Continue));
        assert_eq!(revealed_positions(&board), vec![pos(2, 2)]);
        assert_eq!(board.revealed_count(), 1);

        let safe: Vec<_> = board
            .grid()
            .positions()
            .filter(|&p| p != pos(0, 0) && p != pos(3, 3))
            .collect();
        assert_eq!(safe.len(), 14);
        for p in safe {
            board.reveal(p).unwrap();
        }
        assert_eq!(board.revealed_count(), 14);
        assert_eq!(board.status(), GameStatus::Won);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut board = board(4, &[pos(0, 0), pos(3, 3)]);

        assert_eq!(board.reveal(pos(1, 1)), Ok(RevealOutcome::Continue));
        let snapshot = board.clone();

        assert_eq!(board.reveal(pos(1, 1)), Ok(RevealOutcome::Unchanged));
        assert_eq!(board.reveal(pos(1, 1)), Ok(RevealOutcome::Unchanged));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn cascade_reveals_region_and_border() {
        // mines fill column x = 3 on a 5x5 board, the zero region is x in 0..=1
        let mines: Vec<_> = (0..5).map(|y| pos(3, y)).collect();
        let mut board = board(5, &mines);

        assert_eq!(board.reveal(pos(0, 4)), Ok(RevealOutcome::Continue));

        let mut expected: Vec<_> = (0..5)
            .flat_map(|y| (0..3).map(move |x| pos(x, y)))
            .collect();
        expected.sort_by_key(|p| (p.y, p.x));
        assert_eq!(revealed_positions(&board), expected);
        assert_eq!(board.revealed_count(), 15);
        for y in 0..5 {
            assert!(board.tile(pos(2, y)).unwrap().adjacent_mines() > 0);
            assert!(!board.is_revealed(pos(4, y)).unwrap());
        }
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn cascade_skips_already_revealed_tiles() {
        let mines: Vec<_> = (0..5).map(|y| pos(3, y)).collect();
        let mut board = board(5, &mines);

        board.reveal(pos(2, 2)).unwrap();
        assert_eq!(board.revealed_count(), 1);

        board.reveal(pos(0, 0)).unwrap();
        assert_eq!(board.revealed_count(), 15);
    }

    #[test]
    fn cascade_opens_whole_board_without_mines() {
        let mut board = board(6, &[]);

        assert_eq!(board.reveal(pos(5, 0)), Ok(RevealOutcome::Continue));
        assert_eq!(board.revealed_count(), 36);
        assert_eq!(board.status(), GameStatus::Won);
    }

    #[test]
    fn revealing_mine_is_loss() {
        let mut board = board(3, &[pos(1, 1)]);
        board.reveal(pos(0, 0)).unwrap();

        assert_eq!(board.reveal(pos(1, 1)), Ok(RevealOutcome::Loss));
        assert_eq!(board.status(), GameStatus::Lost);
        assert_eq!(board.triggered_mine(), Some(pos(1, 1)));
        assert_eq!(board.display_value(pos(1, 1)), Ok(TileView::Mine));
        assert_eq!(board.revealed_count(), 1);

        assert_eq!(board.reveal(pos(2, 2)), Err(GameError::AlreadyEnded));
        assert!(!board.is_revealed(pos(2, 2)).unwrap());
    }

    #[test]
    fn first_reveal_on_mine_is_loss() {
        let mut board = Board::generate(FixedLayout, Difficulty::Hard.config()).unwrap();

        assert_eq!(board.reveal(pos(0, 0)), Ok(RevealOutcome::Loss));
        assert!(board.is_finished());
    }

    #[test]
    fn win_happens_exactly_on_last_safe_tile() {
        let config = GameConfig::new(3, 4).unwrap();
        let mut board = Board::generate(FixedLayout, config).unwrap();
        // mines at (0,0) (1,0) (2,0) (0,1)
        let safe = [pos(1, 1), pos(2, 1), pos(0, 2), pos(1, 2), pos(2, 2)];

        for (i, &p) in safe.iter().enumerate() {
            assert_eq!(board.status(), GameStatus::InProgress);
            assert_eq!(board.reveal(p), Ok(RevealOutcome::Continue));
            assert_eq!(usize::from(board.revealed_count()), i + 1);
        }
        assert_eq!(board.status(), GameStatus::Won);
        assert_eq!(board.reveal(pos(0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn out_of_range_reveal_is_rejected() {
        let mut board = board(4, &[pos(0, 0)]);

        assert_eq!(board.reveal(pos(4, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.reveal(pos(0, 4)), Err(GameError::InvalidCoords));
        assert_eq!(board.display_value(pos(9, 9)), Err(GameError::InvalidCoords));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn display_value_hides_unrevealed_tiles() {
        let mut board = board(4, &[pos(0, 0), pos(3, 3)]);
        board.reveal(pos(1, 1)).unwrap();

        assert_eq!(board.display_value(pos(1, 1)), Ok(TileView::Revealed(1)));
        assert_eq!(board.display_value(pos(0, 0)), Ok(TileView::Hidden));
        assert_eq!(board.display_value(pos(2, 2)), Ok(TileView::Hidden));
    }

    #[test]
    fn generate_rejects_full_configs() {
        let full = GameConfig::new_unchecked(3, 9);
        assert_eq!(
            Board::generate(FixedLayout, full),
            Err(GameError::TooManyMines)
        );

        let overfull = GameConfig::new_unchecked(2, 10);
        assert_eq!(
            Board::generate(ShuffledLayout::from_seed(1), overfull),
            Err(GameError::TooManyMines)
        );

        let empty = GameConfig::new_unchecked(0, 0);
        assert_eq!(
            Board::generate(FixedLayout, empty),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn from_grid_rejects_grids_without_safe_tiles() {
        let all_mines = [pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1)];
        let grid = Grid::from_mine_positions(2, &all_mines).unwrap();

        assert_eq!(Board::from_grid(grid), Err(GameError::TooManyMines));
        assert_eq!(Board::from_grid(Grid::new(0)), Err(GameError::InvalidSize));
    }

    #[test]
    fn from_grid_recomputes_adjacency() {
        let mut grid = Grid::new(3);
        grid[pos(2, 2)].has_mine = true;

        let mut board = Board::from_grid(grid).unwrap();
        assert_eq!(board.tile(pos(1, 1)).unwrap().adjacent_mines(), 1);

        assert_eq!(board.reveal(pos(0, 0)), Ok(RevealOutcome::Continue));
        assert_eq!(board.revealed_count(), 8);
        assert!(!board.is_revealed(pos(2, 2)).unwrap());
        assert_eq!(board.status(), GameStatus::Won);
    }
}
