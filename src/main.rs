use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use tracing::info;

mod config;

use config::{ClockKind, Config, OutputFormat};
use scoreboard::{parse_feed, replay, ScoreBoard, SteppingClock};

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let file = File::open(&config.feed)
        .with_context(|| format!("Failed to open feed {}", config.feed.display()))?;
    let events = parse_feed(BufReader::new(file))
        .with_context(|| format!("Failed to parse feed {}", config.feed.display()))?;
    info!("Loaded {} event(s) from {}", events.len(), config.feed.display());

    let mut board = match config.clock {
        ClockKind::System => ScoreBoard::new(),
        ClockKind::Stepping => {
            // validate() caps the step at one day
            let step = Duration::seconds(config.clock_step_secs as i64);
            ScoreBoard::with_clock(SteppingClock::new(DateTime::<Utc>::UNIX_EPOCH, step))
        }
    }
    .with_policy(config.score_policy);

    let report = replay(&mut board, &events);
    if report.rejected > 0 {
        info!("{} event(s) were rejected, see warnings above", report.rejected);
    }

    match config.format {
        OutputFormat::Text => print!("{}", board),
        OutputFormat::Json => {
            let summary = board.summary();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
