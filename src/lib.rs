//! In-memory scoreboard for live games between two teams.
//!
//! Start games, update their scores, finish them, and read a summary ranked by
//! total score (latest start first on ties). Start times come from an
//! injectable [`Clock`] so rankings are reproducible in tests.
//!
//! ```rust
//! use scoreboard::{ScoreBoard, Team};
//!
//! let mut board = ScoreBoard::new();
//! let game = board.start_game(Team::new("Spain"), Team::new("Brazil")).unwrap();
//! board.update_score(game.key(), 10, 2).unwrap();
//!
//! assert_eq!(board.summary()[0].to_string(), "Spain 10 - Brazil 2");
//! ```

pub mod feed;
pub mod scoreboard;

pub use feed::{parse_feed, replay, FeedError, FeedEvent, ReplayReport};
pub use scoreboard::{
    Clock, FixedClock, Game, GameKey, ScoreBoard, ScoreBoardError, ScorePolicy, SteppingClock,
    SystemClock, Team,
};
