//! JSON-lines feed of scoreboard events and its replay against a board.
//!
//! One object per line, tagged by `action`:
//!
//! ```text
//! {"action":"start","home":"Mexico","away":"Canada"}
//! {"action":"update","home":"Mexico","away":"Canada","home_score":0,"away_score":5}
//! {"action":"finish","home":"Mexico","away":"Canada"}
//! {"action":"summary"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use serde::Deserialize;
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::scoreboard::{GameKey, ScoreBoard, Team};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FeedEvent {
    Start {
        home: String,
        away: String,
    },
    Update {
        home: String,
        away: String,
        home_score: u32,
        away_score: u32,
    },
    Finish {
        home: String,
        away: String,
    },
    /// Log the current ranking.
    Summary,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid feed event on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse every event in a JSON-lines feed.
pub fn parse_feed(reader: impl BufRead) -> Result<Vec<FeedEvent>, FeedError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| FeedError::Parse {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Counters from a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub started: usize,
    pub updated: usize,
    pub finished: usize,
    /// Finish events for games that were not on the board.
    pub ignored: usize,
    /// Events the board refused.
    pub rejected: usize,
}

/// Apply `events` to `board` in order.
///
/// A refused event is logged and counted; the replay carries on with the next.
pub fn replay(board: &mut ScoreBoard, events: &[FeedEvent]) -> ReplayReport {
    let mut report = ReplayReport::default();

    for (idx, event) in events.iter().enumerate() {
        match event {
            FeedEvent::Start { home, away } => {
                match board.start_game(Team::new(home.as_str()), Team::new(away.as_str())) {
                    Ok(_) => report.started += 1,
                    Err(e) => {
                        warn!("Event #{} rejected: {}", idx + 1, e);
                        report.rejected += 1;
                    }
                }
            }
            FeedEvent::Update {
                home,
                away,
                home_score,
                away_score,
            } => {
                let key = GameKey::from_names(home, away);
                match board.update_score(&key, *home_score, *away_score) {
                    Ok(game) => {
                        debug!("Score now {}", game);
                        report.updated += 1;
                    }
                    Err(e) => {
                        warn!("Event #{} rejected ({}): {}", idx + 1, key, e);
                        report.rejected += 1;
                    }
                }
            }
            FeedEvent::Finish { home, away } => {
                if board.finish_game(&GameKey::from_names(home, away)).is_some() {
                    report.finished += 1;
                } else {
                    report.ignored += 1;
                }
            }
            FeedEvent::Summary => {
                info!("Summary after event #{}:{}", idx + 1, board);
            }
        }
    }

    info!(
        "Replay done: {} started, {} updated, {} finished, {} ignored, {} rejected",
        report.started, report.updated, report.finished, report.ignored, report.rejected
    );
    report
}
