use serde::{Deserialize, Serialize};

/// One grid position, with both its hidden contents and its player-visible state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_item: bool,
    /// Items among the 8 neighbors, always 0 on item cells.
    pub neighbor_count: u8,
    pub revealed: bool,
    pub flagged: bool,
    pub questioned: bool,
}

impl Cell {
    pub const fn is_marked(self) -> bool {
        self.flagged || self.questioned
    }

    /// Hidden and unmarked, i.e. what flood expansion is allowed to open.
    pub const fn is_pristine(self) -> bool {
        !self.revealed && !self.is_marked()
    }
}

/// Annotation a player can place on an unrevealed cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkMode {
    Flag,
    Question,
}

/// What a click does, as selected by the player's current mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickMode {
    #[default]
    Reveal,
    Flag,
    Question,
}

impl ClickMode {
    pub const fn mark_mode(self) -> Option<MarkMode> {
        match self {
            Self::Reveal => None,
            Self::Flag => Some(MarkMode::Flag),
            Self::Question => Some(MarkMode::Question),
        }
    }
}
