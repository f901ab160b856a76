use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// Named preset for board size and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Indexed by `Difficulty as usize`.
const DIFFICULTY_TABLE: [(&str, GameConfig); 3] = [
    ("easy", GameConfig::new_unchecked(10, 10)),
    ("medium", GameConfig::new_unchecked(15, 40)),
    ("hard", GameConfig::new_unchecked(20, 99)),
];

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> GameConfig {
        DIFFICULTY_TABLE[self as usize].1
    }

    pub const fn name(self) -> &'static str {
        DIFFICULTY_TABLE[self as usize].0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownDifficulty)
    }
}
