//! Game rules for carrot finder, a minesweeper-style puzzle: board generation, flood reveal, flag and question marks,
//! and win/loss evaluation. Presentation is left to the caller, which owns the [`GameSession`] value and threads it
//! through the functions in [`api`].

pub use board::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use rules::*;
pub use tile::*;
pub use types::*;

pub mod api;
pub mod timer;

mod board;
mod config;
mod engine;
mod error;
mod generator;
mod rules;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed,
    HitItem,
    Won,
}

impl RevealOutcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::HitItem | Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    Placed,
    Removed,
    /// The mark completed a flag-based win.
    Won,
}
