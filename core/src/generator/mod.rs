use crate::*;
pub use random::*;

mod random;

/// Strategy for placing items onto a board.
pub trait ItemGenerator {
    /// Places exactly `total_items` items on `board`, replacing any previous layout and refreshing neighbor counts.
    /// Reveal and mark state is left untouched.
    fn place_items(self, board: &mut Board, total_items: CellCount) -> Result<()>;

    fn generate(self, size: Coord2, total_items: CellCount) -> Result<Board>
    where
        Self: Sized,
    {
        let mut board = Board::new(size)?;
        self.place_items(&mut board, total_items)?;
        Ok(board)
    }
}
