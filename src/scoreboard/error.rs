use thiserror::Error;

use super::models::Team;

/// Errors returned by [`ScoreBoard`](super::ScoreBoard) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreBoardError {
    /// One of the teams has a blank name.
    #[error("Game cannot be started for a null team.")]
    IllegalGame,

    /// The exact (home, away) pair already has an ongoing game.
    #[error(
        "New game cannot be started for {home} and {away} until the ongoing game is not finished."
    )]
    DuplicatedGameKey { home: Team, away: Team },

    #[error("Cannot update score of an unknown game")]
    GameNotFound,

    /// Only raised under `ScorePolicy::NonDecreasing`.
    #[error("Score of {home} vs {away} cannot go down")]
    ScoreRegression { home: Team, away: Team },
}
