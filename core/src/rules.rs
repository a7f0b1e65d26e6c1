use serde::{Deserialize, Serialize};

use crate::*;

/// When a game counts as won.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinPolicy {
    /// Every non-item cell is revealed; flags are only a player aid.
    #[default]
    RevealComplete,
    /// Every item cell is flagged. When `strict`, the number of flags must also equal the item count.
    FlagComplete { strict: bool },
}

impl WinPolicy {
    pub fn is_satisfied(self, board: &Board) -> bool {
        match self {
            Self::RevealComplete => reveal_complete(board),
            Self::FlagComplete { strict } => flag_complete(board, strict),
        }
    }
}

/// How many flags a player may have on the board at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagLimit {
    /// One flag per item.
    #[default]
    Capped,
    Unlimited,
}

pub fn reveal_complete(board: &Board) -> bool {
    board.revealed_safe_count() == board.safe_cell_count()
}

pub fn flag_complete(board: &Board, strict: bool) -> bool {
    let all_items_flagged = board
        .iter_cells()
        .filter(|cell| cell.has_item)
        .all(|cell| cell.flagged);
    all_items_flagged && (!strict || board.flagged_count() == board.item_count())
}

pub fn is_lost(board: &Board) -> bool {
    board.iter_cells().any(|cell| cell.has_item && cell.revealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_item_coords((2, 3), &[(0, 0), (1, 2)]).unwrap()
    }

    #[test]
    fn reveal_complete_needs_every_safe_cell() {
        let mut board = board();
        for coords in [(0, 1), (0, 2), (1, 0)] {
            board[coords].revealed = true;
        }
        assert!(!reveal_complete(&board));

        board[(1, 1)].revealed = true;
        assert!(reveal_complete(&board));
        assert!(!is_lost(&board));
    }

    #[test]
    fn flag_complete_strict_rejects_extra_flags() {
        let mut board = board();
        board[(0, 0)].flagged = true;
        assert!(!flag_complete(&board, false));

        board[(1, 2)].flagged = true;
        assert!(flag_complete(&board, true));

        board[(0, 1)].flagged = true;
        assert!(flag_complete(&board, false));
        assert!(!flag_complete(&board, true));
    }

    #[test]
    fn revealed_item_is_a_loss() {
        let mut board = board();
        board[(1, 2)].revealed = true;

        assert!(is_lost(&board));
    }
}
