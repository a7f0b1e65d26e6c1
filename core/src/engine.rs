use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Represents a game from start to finish
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    seed: u64,
    board: Board,
    items_placed: bool,
    flagged_count: CellCount,
    status: GameStatus,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    triggered_item: Option<Coord2>,
}

impl GameSession {
    /// Starts a fresh game. Items are placed right away unless the config defers them to the first reveal.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut board = Board::new(config.size)?;
        let items_placed = !config.defer_placement;
        if items_placed {
            RandomItemGenerator::new(seed, None).place_items(&mut board, config.total_items)?;
        }
        log::debug!(
            "New game {:?} with {} items, seed {}, deferred placement: {}",
            config.size,
            config.total_items,
            seed,
            config.defer_placement
        );

        Ok(Self {
            config,
            seed,
            board,
            items_placed,
            flagged_count: 0,
            status: GameStatus::InProgress,
            started_at: None,
            ended_at: None,
            triggered_item: None,
        })
    }

    /// Starts a game on a prepared board. Size and item count are taken from the board, and a board that already
    /// shows an item or satisfies the win policy starts out finished.
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let config = GameConfig {
            size: board.size(),
            total_items: board.item_count(),
            defer_placement: false,
            ..config
        };
        let triggered_item = board
            .iter_coords()
            .find(|&coords| board[coords].has_item && board[coords].revealed);
        let status = if triggered_item.is_some() {
            GameStatus::Lost
        } else if reveal_complete(&board) || config.win_policy.is_satisfied(&board) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        Self {
            config,
            seed: config.seed.unwrap_or_default(),
            flagged_count: board.flagged_count(),
            board,
            items_placed: true,
            status,
            started_at: None,
            ended_at: None,
            triggered_item,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        Ok(self.board[self.board.validate_coords(coords)?])
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_items(&self) -> CellCount {
        self.config.total_items
    }

    pub fn items_placed(&self) -> bool {
        self.items_placed
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many flags can still be placed; negative only with [`FlagLimit::Unlimited`]
    pub fn flags_remaining(&self) -> isize {
        (self.config.total_items as isize) - (self.flagged_count as isize)
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// The item whose reveal lost the game
    pub fn triggered_item(&self) -> Option<Coord2> {
        self.triggered_item
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.reveal_at(coords, Utc::now())
    }

    /// Reveals a hidden, unmarked cell, flooding outwards from cells with no adjacent items.
    pub fn reveal_at(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.board[coords];
        if cell.revealed {
            return Err(GameError::AlreadyRevealed);
        }
        if cell.is_marked() {
            return Err(GameError::MarkedCell);
        }

        // flags placed before deferred placement may already complete a flag-based win
        let mut placement_won = false;
        if !self.items_placed {
            RandomItemGenerator::new(self.seed, Some(coords))
                .place_items(&mut self.board, self.config.total_items)?;
            self.items_placed = true;
            placement_won = self.config.win_policy.is_satisfied(&self.board);
        }
        self.mark_started(now);

        if self.board[coords].has_item {
            self.board[coords].revealed = true;
            self.triggered_item = Some(coords);
            if self.config.reveal_all_on_loss {
                self.board.reveal_items();
            }
            self.end_game(GameStatus::Lost, now);
            return Ok(RevealOutcome::HitItem);
        }

        let revealed = self.board.reveal_region(coords);
        log::debug!("Revealed {} cells from {:?}", revealed, coords);

        if placement_won || reveal_complete(&self.board) {
            self.end_game(GameStatus::Won, now);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    pub fn set_mark(&mut self, coords: Coord2, mode: MarkMode) -> Result<MarkOutcome> {
        self.set_mark_at(coords, mode, Utc::now())
    }

    /// Toggles a flag or question mark on an unrevealed cell. The two marks replace each other.
    pub fn set_mark_at(
        &mut self,
        coords: Coord2,
        mode: MarkMode,
        now: DateTime<Utc>,
    ) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.board[coords];
        if cell.revealed {
            return Err(GameError::AlreadyRevealed);
        }

        let outcome = match mode {
            MarkMode::Flag if cell.flagged => {
                self.board[coords].flagged = false;
                self.flagged_count -= 1;
                MarkOutcome::Removed
            }
            MarkMode::Flag => {
                if self.out_of_flags() {
                    log::debug!("No flags left for {:?}", coords);
                    return Err(GameError::OutOfFlags);
                }
                let cell = &mut self.board[coords];
                cell.questioned = false;
                cell.flagged = true;
                self.flagged_count += 1;
                MarkOutcome::Placed
            }
            MarkMode::Question if cell.questioned => {
                self.board[coords].questioned = false;
                MarkOutcome::Removed
            }
            MarkMode::Question => {
                if cell.flagged {
                    self.flagged_count -= 1;
                }
                let cell = &mut self.board[coords];
                cell.flagged = false;
                cell.questioned = true;
                MarkOutcome::Placed
            }
        };
        self.mark_started(now);

        if self.items_placed && self.config.win_policy.is_satisfied(&self.board) {
            self.end_game(GameStatus::Won, now);
            return Ok(MarkOutcome::Won);
        }
        Ok(outcome)
    }

    /// Applies a click in the given mode and reports the resulting status.
    pub fn click(&mut self, coords: Coord2, mode: ClickMode) -> Result<GameStatus> {
        match mode.mark_mode() {
            None => self.reveal(coords).map(|_| self.status),
            Some(mark) => self.set_mark(coords, mark).map(|_| self.status),
        }
    }

    fn out_of_flags(&self) -> bool {
        match self.config.flag_limit {
            FlagLimit::Capped => self.flagged_count >= self.config.total_items,
            FlagLimit::Unlimited => false,
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn mark_started(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    fn end_game(&mut self, status: GameStatus, now: DateTime<Utc>) {
        if self.status.is_finished() {
            return;
        }
        log::debug!("Game ended: {:?}", status);
        self.status = status;
        self.ended_at = Some(now);
    }
}
