use serde::{Deserialize, Serialize};

use crate::*;

/// Board presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// The fixed 10×10 board with 10 carrots.
    Classic,
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const fn size(self) -> Coord2 {
        match self {
            Self::Classic => (10, 10),
            Self::Beginner => (9, 9),
            Self::Intermediate => (16, 16),
            Self::Expert => (16, 30),
        }
    }

    pub const fn items(self) -> CellCount {
        match self {
            Self::Classic => 10,
            Self::Beginner => 10,
            Self::Intermediate => 40,
            Self::Expert => 99,
        }
    }
}

/// Everything needed to start a game. Fields left out of a serialized config take their default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    pub total_items: CellCount,
    pub win_policy: WinPolicy,
    pub flag_limit: FlagLimit,
    /// Place items on the first reveal, keeping that cell and its neighbors clear.
    pub defer_placement: bool,
    /// Show every item once one is revealed.
    pub reveal_all_on_loss: bool,
    /// Fixed generator seed, random when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Classic)
    }
}

impl GameConfig {
    pub const fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            size: difficulty.size(),
            total_items: difficulty.items(),
            win_policy: WinPolicy::RevealComplete,
            flag_limit: FlagLimit::Capped,
            defer_placement: true,
            reveal_all_on_loss: true,
            seed: None,
        }
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> core::result::Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Most items that can be placed, accounting for a safe zone anywhere on the board when placement is deferred.
    pub fn max_items(&self) -> CellCount {
        if self.defer_placement {
            self.total_cells() - max_safe_zone_len(self.size)
        } else {
            self.total_cells().saturating_sub(1)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.total_items > self.max_items() {
            return Err(GameError::TooManyItems);
        }
        Ok(())
    }
}
