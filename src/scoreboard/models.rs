use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A team taking part in a game. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Team { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A team is valid when its name has at least one non-whitespace character.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered (home, away) pair identifying a game slot on the board.
///
/// `GameKey::new(a, b)` and `GameKey::new(b, a)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameKey {
    pub home: Team,
    pub away: Team,
}

impl GameKey {
    pub fn new(home: Team, away: Team) -> Self {
        GameKey { home, away }
    }

    pub fn from_names(home: &str, away: &str) -> Self {
        GameKey::new(Team::new(home), Team::new(away))
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// A game on the scoreboard.
///
/// Values handed out by [`ScoreBoard`](super::ScoreBoard) are copies; scores
/// only change through `ScoreBoard::update_score`.
///
/// `==` compares snapshots: teams, scores and start time. Two snapshots of the
/// same ongoing game taken before and after an update are not equal. Compare
/// [`Game::key`] to ask whether they are the same game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    key: GameKey,
    home_score: u32,
    away_score: u32,
    started_at: DateTime<Utc>,
    /// Start order on the owning board; breaks ties between equal timestamps
    seq: u64,
}

impl Game {
    pub(crate) fn start(key: GameKey, started_at: DateTime<Utc>, seq: u64) -> Self {
        Game {
            key,
            home_score: 0,
            away_score: 0,
            started_at,
            seq,
        }
    }

    pub fn key(&self) -> &GameKey {
        &self.key
    }

    pub fn home_team(&self) -> &Team {
        &self.key.home
    }

    pub fn away_team(&self) -> &Team {
        &self.key.away
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_valid_game(&self) -> bool {
        self.key.home.is_valid() && self.key.away.is_valid()
    }

    pub(crate) fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.key.home, self.home_score, self.key.away, self.away_score
        )
    }
}

impl Serialize for Game {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Game", 5)?;
        s.serialize_field("home_team", &self.key.home)?;
        s.serialize_field("away_team", &self.key.away)?;
        s.serialize_field("home_score", &self.home_score)?;
        s.serialize_field("away_score", &self.away_score)?;
        s.serialize_field("started_at", &self.started_at)?;
        s.end()
    }
}
