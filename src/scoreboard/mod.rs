//! The scoreboard: ongoing games keyed by their (home, away) pair.
//!
//! Games move from absent to ongoing on `start_game` and back to absent on
//! `finish_game`. Everything the board hands out is a copy, so score changes
//! always go through `update_score`.

pub mod clock;
pub mod error;
pub mod models;

pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use error::ScoreBoardError;
pub use models::{Game, GameKey, Team};

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// How `update_score` treats a score lower than the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    /// Any pair of scores is accepted, including corrections downwards.
    #[default]
    Permissive,
    /// Neither side may go down.
    NonDecreasing,
}

impl FromStr for ScorePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(ScorePolicy::Permissive),
            "non-decreasing" | "non_decreasing" | "monotonic" => Ok(ScorePolicy::NonDecreasing),
            other => Err(format!(
                "unknown score policy '{}' (expected 'permissive' or 'non-decreasing')",
                other
            )),
        }
    }
}

/// In-memory board of ongoing games.
pub struct ScoreBoard {
    clock: Box<dyn Clock>,
    policy: ScorePolicy,
    games: HashMap<GameKey, Game>,
    next_seq: u64,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    /// Board stamped by the wall clock, with permissive score updates.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        ScoreBoard {
            clock: Box::new(clock),
            policy: ScorePolicy::default(),
            games: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn with_policy(mut self, policy: ScorePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ScorePolicy {
        self.policy
    }

    /// Start a 0–0 game between `home` and `away`.
    ///
    /// The clock is read exactly once per call, including calls that fail.
    pub fn start_game(&mut self, home: Team, away: Team) -> Result<Game, ScoreBoardError> {
        let started_at = self.clock.now();
        let game = Game::start(GameKey::new(home, away), started_at, self.next_seq);

        if !game.is_valid_game() {
            return Err(ScoreBoardError::IllegalGame);
        }
        if self.games.contains_key(game.key()) {
            return Err(ScoreBoardError::DuplicatedGameKey {
                home: game.home_team().clone(),
                away: game.away_team().clone(),
            });
        }

        self.next_seq += 1;
        info!("Game started: {} at {}", game.key(), started_at);
        self.games.insert(game.key().clone(), game.clone());
        Ok(game)
    }

    /// Overwrite both scores of an ongoing game and return the updated game.
    pub fn update_score(
        &mut self,
        key: &GameKey,
        home_score: u32,
        away_score: u32,
    ) -> Result<Game, ScoreBoardError> {
        let policy = self.policy;
        let game = self
            .games
            .get_mut(key)
            .ok_or(ScoreBoardError::GameNotFound)?;

        if policy == ScorePolicy::NonDecreasing
            && (home_score < game.home_score() || away_score < game.away_score())
        {
            return Err(ScoreBoardError::ScoreRegression {
                home: key.home.clone(),
                away: key.away.clone(),
            });
        }

        debug!(
            "Score update {}: {}-{} -> {}-{}",
            key,
            game.home_score(),
            game.away_score(),
            home_score,
            away_score
        );
        game.set_score(home_score, away_score);
        Ok(game.clone())
    }

    /// Remove a game from the board. Finishing an unknown game does nothing.
    pub fn finish_game(&mut self, key: &GameKey) -> Option<Game> {
        let finished = self.games.remove(key);
        match &finished {
            Some(game) => info!("Game finished: {}", game),
            None => debug!("Finish ignored, no ongoing game for {}", key),
        }
        finished
    }

    /// Ongoing games ranked by total score, most recently started first on ties.
    pub fn summary(&self) -> Vec<Game> {
        let mut ranked: Vec<Game> = self.games.values().cloned().collect();
        ranked.sort_by(summary_order);
        ranked
    }

    pub fn get(&self, key: &GameKey) -> Option<&Game> {
        self.games.get(key)
    }

    pub fn is_ongoing(&self, key: &GameKey) -> bool {
        self.games.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn summary_order(a: &Game, b: &Game) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at().cmp(&a.started_at()))
        .then_with(|| b.seq().cmp(&a.seq()))
}

impl fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.summary().iter().map(Game::to_string).collect();
        write!(f, "\n{}\n", lines.join("\n"))
    }
}

impl fmt::Debug for ScoreBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreBoard")
            .field("policy", &self.policy)
            .field("games", &self.summary())
            .finish()
    }
}
