use core::ops::{Index, IndexMut};
use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells, fixed in size for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    item_count: CellCount,
}

impl Board {
    /// Empty board with no items, every cell hidden and unmarked.
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        Ok(Self {
            cells: Array2::default(size.to_nd_index()),
            item_count: 0,
        })
    }

    /// Board with items at exactly `item_coords` and neighbor counts filled in.
    pub fn from_item_coords(size: Coord2, item_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size)?;
        for &coords in item_coords {
            let coords = board.validate_coords(coords)?;
            board[coords].has_item = true;
        }
        board.recount();
        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // Board::new only ever builds grids from Coord2 sizes
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size().0, self.size().1)
    }

    pub fn item_count(&self) -> CellCount {
        self.item_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.item_count
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn adjacent_item_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].has_item)
            .count() as u8
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.flagged)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.count_where(|cell| cell.revealed && !cell.has_item)
    }

    pub(crate) fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // a board never holds more than CellCount::MAX cells
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }

    /// Removes every item, keeping reveal and mark state.
    pub(crate) fn clear_items(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.has_item = false;
            cell.neighbor_count = 0;
        }
        self.item_count = 0;
    }

    /// Refreshes the item total and every neighbor count from the item layout.
    pub(crate) fn recount(&mut self) {
        self.item_count = self.count_where(|cell| cell.has_item);
        for coords in self.iter_coords() {
            let count = if self[coords].has_item {
                0
            } else {
                self.adjacent_item_count(coords)
            };
            self[coords].neighbor_count = count;
        }
    }

    /// Reveals `start` and, when it has no adjacent items, the connected zero region around it together with its
    /// numbered border. Marked cells are never opened and stop the expansion. Returns how many cells were revealed.
    pub(crate) fn reveal_region(&mut self, start: Coord2) -> CellCount {
        if !self[start].is_pristine() {
            return 0;
        }

        self[start].revealed = true;
        let mut revealed: CellCount = 1;
        if self[start].has_item || self[start].neighbor_count > 0 {
            return revealed;
        }

        let mut visited = HashSet::from([start]);
        let mut to_visit = VecDeque::from([start]);
        log::trace!("Starting flood reveal from {:?}", start);

        while let Some(center) = to_visit.pop_front() {
            for pos in self.iter_neighbors(center) {
                if !visited.insert(pos) {
                    continue;
                }

                // skip marked or already revealed cells
                if !self[pos].is_pristine() {
                    log::trace!("Skipping cell at {:?}", pos);
                    continue;
                }

                self[pos].revealed = true;
                revealed += 1;

                if self[pos].neighbor_count == 0 {
                    to_visit.push_back(pos);
                }
            }
        }

        revealed
    }

    /// Shows every item that is not under a flag, dropping question marks on them.
    pub(crate) fn reveal_items(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.has_item && !cell.flagged {
                cell.questioned = false;
                cell.revealed = true;
            }
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
