//! The operations a presentation layer drives a game through. Each takes the current session by reference and
//! returns the next one; a rejected move returns the reason and leaves the caller's session as it was.
//!
//! `reveal` and `set_mark` read the system clock for the game timer. The `_at` variants take the time from the caller
//! and are fully deterministic.

use chrono::{DateTime, Utc};

use crate::*;

pub fn new_game(config: GameConfig) -> Result<GameSession> {
    GameSession::new(config)
}

pub fn reveal(session: &GameSession, coords: Coord2) -> Result<GameSession> {
    reveal_at(session, coords, Utc::now())
}

pub fn reveal_at(session: &GameSession, coords: Coord2, now: DateTime<Utc>) -> Result<GameSession> {
    let mut next = session.clone();
    next.reveal_at(coords, now)?;
    Ok(next)
}

pub fn set_mark(session: &GameSession, coords: Coord2, mode: MarkMode) -> Result<GameSession> {
    set_mark_at(session, coords, mode, Utc::now())
}

pub fn set_mark_at(
    session: &GameSession,
    coords: Coord2,
    mode: MarkMode,
    now: DateTime<Utc>,
) -> Result<GameSession> {
    let mut next = session.clone();
    next.set_mark_at(coords, mode, now)?;
    Ok(next)
}

pub fn elapsed_seconds(session: &GameSession, now: DateTime<Utc>) -> u32 {
    timer::elapsed_seconds(session, now)
}
