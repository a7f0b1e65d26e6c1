use rand::prelude::*;

use super::*;

/// Rejection-sampling rounds allowed per candidate cell before switching to shuffled placement.
const SAMPLING_ROUNDS_PER_CANDIDATE: u32 = 4;

/// Purely random placement that can optionally keep a safe zone (a cell and its neighbors) clear of items.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomItemGenerator {
    seed: u64,
    safe_cell: Option<Coord2>,
}

impl RandomItemGenerator {
    pub fn new(seed: u64, safe_cell: Option<Coord2>) -> Self {
        Self { seed, safe_cell }
    }

    fn excludes(&self, coords: Coord2) -> bool {
        self.safe_cell
            .is_some_and(|center| in_safe_zone(center, coords))
    }
}

impl ItemGenerator for RandomItemGenerator {
    fn place_items(self, board: &mut Board, total_items: CellCount) -> Result<()> {
        let size = board.size();
        let excluded = match self.safe_cell {
            Some(center) => safe_zone_len(board.validate_coords(center)?, size),
            None => 0,
        };
        let candidates = board.total_cells() - excluded;
        if total_items > candidates {
            log::debug!(
                "Cannot place {} items, only {} cells are outside the safe zone",
                total_items,
                candidates
            );
            return Err(GameError::TooManyItems);
        }

        log::debug!(
            "Placing {} items on {:?} with seed {} and safe cell {:?}",
            total_items,
            size,
            self.seed,
            self.safe_cell
        );
        board.clear_items();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        let mut rounds_left = u32::from(candidates) * SAMPLING_ROUNDS_PER_CANDIDATE;

        while placed < total_items && rounds_left > 0 {
            rounds_left -= 1;
            let coords = (rng.random_range(0..size.0), rng.random_range(0..size.1));
            if self.excludes(coords) || board[coords].has_item {
                continue;
            }
            board[coords].has_item = true;
            placed += 1;
        }

        // dense boards: finish from the shuffled list of free candidates so placement always terminates
        if placed < total_items {
            let mut free: Vec<Coord2> = board
                .iter_coords()
                .filter(|&coords| !self.excludes(coords) && !board[coords].has_item)
                .collect();
            let missing = usize::from(total_items - placed);
            log::debug!(
                "Sampling gave up after {} items, shuffling {} free cells for the remaining {}",
                placed,
                free.len(),
                missing
            );
            let (chosen, _) = free.partial_shuffle(&mut rng, missing);
            for &coords in chosen.iter() {
                board[coords].has_item = true;
            }
        }

        board.recount();
        Ok(())
    }
}
