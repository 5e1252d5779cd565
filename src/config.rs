use clap::{Parser, ValueEnum};
use scoreboard::ScorePolicy;
use std::path::PathBuf;

/// Replay a feed of live game events and print the ranked scoreboard
#[derive(Parser, Debug, Clone)]
#[command(name = "scoreboard", version, about)]
pub struct Config {
    /// JSON-lines feed of start / update / finish / summary events
    #[arg(env = "SCOREBOARD_FEED")]
    pub feed: PathBuf,

    /// How score updates that lower a score are treated: permissive | non-decreasing
    #[arg(long, env = "SCORE_POLICY", default_value = "permissive")]
    pub score_policy: ScorePolicy,

    /// Output format of the final summary
    #[arg(long, env = "OUTPUT_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Time source used to stamp game starts
    #[arg(long, env = "SCOREBOARD_CLOCK", value_enum, default_value = "system")]
    pub clock: ClockKind,

    /// Seconds between consecutive starts with the stepping clock
    #[arg(long, env = "CLOCK_STEP_SECS", default_value = "1")]
    pub clock_step_secs: u64,
}

/// One day.
pub const MAX_CLOCK_STEP_SECS: u64 = 86_400;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    /// Wall clock
    System,
    /// Deterministic clock starting at the Unix epoch
    Stepping,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.feed.is_file() {
            anyhow::bail!("feed file not found: {}", self.feed.display());
        }
        if self.clock == ClockKind::Stepping && self.clock_step_secs == 0 {
            anyhow::bail!("clock_step_secs must be positive with the stepping clock");
        }
        if self.clock_step_secs > MAX_CLOCK_STEP_SECS {
            anyhow::bail!("clock_step_secs must be at most {}", MAX_CLOCK_STEP_SECS);
        }
        Ok(())
    }
}
