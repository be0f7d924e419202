//! Season Simulator CLI Tool
//!
//! Runs a simulated league season against the in-memory stores: a roster of
//! players plays round-robin rounds, every match goes through the full
//! submit/approve workflow, and the final ladder is printed.
//!
//! Usage:
//!   cargo run --bin season-sim -- --help
//!   cargo run --bin season-sim -- --players 8 --rounds 2 --quota 4

use anyhow::Result;
use clap::Parser;
use league_engine::config::AppConfig;
use league_engine::quota::InMemoryMatchRecordStore;
use league_engine::rating::{EloCalculator, InMemoryRatingStorage, RatingStorage};
use league_engine::schedule::{format_period_time, InMemoryPeriodProvider, Period};
use league_engine::types::{MatchReport, MatchScore};
use league_engine::workflow::{InMemoryPendingMatchStore, MatchWorkflow};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "season-sim")]
#[command(about = "Simulate a league season through the full match workflow")]
struct Cli {
    /// Number of players in the roster
    #[arg(short, long, default_value = "6")]
    players: usize,

    /// Round-robin rounds to play
    #[arg(short, long, default_value = "2")]
    rounds: u32,

    /// Per-player match quota for the simulated period
    #[arg(short, long, default_value = "10")]
    quota: u32,

    /// Log level override
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(level) = &cli.log_level {
        config.service.log_level = level.clone();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.service.log_level)
                }),
        )
        .init();

    if cli.players < 2 {
        anyhow::bail!("Need at least 2 players to run a season");
    }

    // One Tuesday-evening period; week wrap-around makes it always active
    let period = Period::new("sim-period".to_string(), 2, 17, 0, cli.quota);
    info!(period = %format_period_time(&period), quota = cli.quota, "Season period");

    let periods = InMemoryPeriodProvider::new();
    periods.add_period(period)?;

    let ratings: Arc<InMemoryRatingStorage> = Arc::new(InMemoryRatingStorage::new());
    let workflow = MatchWorkflow::new(
        Arc::new(periods),
        Arc::new(InMemoryMatchRecordStore::new()),
        Arc::new(InMemoryPendingMatchStore::new()),
        ratings.clone(),
        Arc::new(EloCalculator::new(config.rating.clone())?),
    );

    let roster: Vec<String> = (1..=cli.players)
        .map(|n| format!("player{}@league.local", n))
        .collect();

    let mut played = 0u32;
    let mut blocked = 0u32;

    for round in 0..cli.rounds {
        for i in 0..roster.len() {
            for j in (i + 1)..roster.len() {
                // Deterministic but varied outcomes
                let one_wins = (i + j + round as usize) % 2 == 0;
                let close_game = (i * 3 + j + round as usize) % 3 == 0;
                let score = match (one_wins, close_game) {
                    (true, true) => MatchScore::new(2, 1),
                    (true, false) => MatchScore::new(2, 0),
                    (false, true) => MatchScore::new(1, 2),
                    (false, false) => MatchScore::new(0, 2),
                };

                let report = MatchReport {
                    player_one: roster[i].clone(),
                    player_two: roster[j].clone(),
                    deck_one: format!("Deck {}", i + 1),
                    deck_two: format!("Deck {}", j + 1),
                    score,
                };

                let pending = match workflow.submit(report).await {
                    Ok(pending) => pending,
                    Err(error) => {
                        warn!(%error, "Submission blocked");
                        blocked += 1;
                        continue;
                    }
                };

                let approved = workflow.approve(&pending.id, &roster[j]).await?;
                played += 1;
                info!(
                    round = round + 1,
                    player_one = %approved.record.player_one,
                    player_two = %approved.record.player_two,
                    score = %approved.record.score,
                    delta_one = approved.record.elo_change_one,
                    delta_two = approved.record.elo_change_two,
                    "Match approved"
                );
            }
        }
    }

    println!("\nSeason complete: {} matches played, {} blocked by quota\n", played, blocked);
    println!("{:<4} {:<28} {:>6} {:>5} {:>6}", "#", "Player", "Elo", "W", "L");

    for (rank, entry) in ratings.leaderboard(None)?.iter().enumerate() {
        println!(
            "{:<4} {:<28} {:>6} {:>5} {:>6}",
            rank + 1,
            entry.player_id,
            entry.rating,
            entry.wins,
            entry.losses
        );
    }

    Ok(())
}
