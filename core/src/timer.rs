//! Values behind the once-per-second clock display. Nothing here mutates a session.

use chrono::{DateTime, Utc};

use crate::GameSession;

/// Whole seconds since the first move, frozen once the game ends; 0 if it hasn't started.
pub fn elapsed_seconds(session: &GameSession, now: DateTime<Utc>) -> u32 {
    let Some(started_at) = session.started_at() else {
        return 0;
    };
    let seconds = (session.ended_at().unwrap_or(now) - started_at)
        .num_seconds()
        .max(0);
    u32::try_from(seconds).unwrap_or(u32::MAX)
}

/// Whether a display ticker should keep running for this session.
pub fn is_running(session: &GameSession) -> bool {
    session.started_at().is_some() && !session.is_finished()
}

/// `mm:ss`, with minutes growing past 59 instead of wrapping.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
