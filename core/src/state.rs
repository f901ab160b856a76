use serde::{Deserialize, Serialize};

use crate::CellCount;

/// Result of a single reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Tile was already revealed, nothing changed.
    Unchanged,
    /// Tile held a mine.
    Loss,
    /// Tile (and possibly a cascade around it) was revealed.
    Continue,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            Unchanged => false,
            Loss => true,
            Continue => true,
        }
    }
}

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Status after a reveal, given how many safe tiles are revealed out of
    /// `safe_tiles`. Terminal states never change.
    pub const fn after_reveal(
        self,
        outcome: RevealOutcome,
        revealed: CellCount,
        safe_tiles: CellCount,
    ) -> Self {
        if self.is_finished() {
            return self;
        }

        match outcome {
            RevealOutcome::Loss => Self::Lost,
            _ if revealed == safe_tiles => Self::Won,
            _ => Self::InProgress,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}
