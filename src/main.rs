//! Gorillas terminal driver
//!
//! Reads throws from stdin ("angle velocity" per line) and reports how each
//! one landed. `new` starts the next round, `reset` starts over, `quit` exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gorillas::sim::{HitTarget, MatchState, PlayerId};
use gorillas::validation::ThrowInput;
use gorillas::{Duel, Settings, ThrowReport};

#[derive(Debug, Parser)]
#[command(name = "gorillas", about = "Banana-throwing artillery duel")]
struct Args {
    /// Seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print a JSON snapshot of the match after every throw
    #[arg(long)]
    json: bool,
}

fn describe_round(state: &MatchState) -> String {
    let wind = match state.wind {
        0 => "no wind".to_string(),
        w if w > 0 => format!("wind → {}", w),
        w => format!("wind ← {}", -w),
    };
    format!(
        "Round {}: {} buildings, {}",
        state.round,
        state.city.len(),
        wind
    )
}

fn describe_throw(report: &ThrowReport) -> String {
    if report.self_kill {
        return format!("{} dropped the banana!", report.thrower);
    }
    if !report.result.hit {
        return "The banana vanished into the sky".to_string();
    }
    let at = report
        .result
        .hit_pos
        .map(|p| format!(" at ({:.0}, {:.0})", p.x, p.y))
        .unwrap_or_default();
    match report.result.target {
        Some(HitTarget::Avatar(player)) => format!("Direct hit on {}{}", player, at),
        Some(HitTarget::Terrain) if report.winner.is_some() => format!("Boom{}! Caught in the blast", at),
        Some(HitTarget::Terrain) => format!("Boom{}", at),
        Some(HitTarget::Sun) => "Hit the sun!".to_string(),
        None => "Out of bounds".to_string(),
    }
}

fn prompt(state: &MatchState) -> String {
    format!(
        "[{} {} - {} {}] {}, angle velocity> ",
        PlayerId::One,
        state.score(PlayerId::One),
        state.score(PlayerId::Two),
        PlayerId::Two,
        state.current_player
    )
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    log::info!("Gorillas starting...");
    let mut duel = Duel::new(settings);
    println!("{}", describe_round(duel.state()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt(duel.state()))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "new" => {
                duel.new_round();
                println!("{}", describe_round(duel.state()));
            }
            "reset" => {
                duel.reset();
                println!("{}", describe_round(duel.state()));
            }
            input => match ThrowInput::parse(input) {
                Ok(throw) => {
                    let report = duel.resolve_throw(throw.angle, throw.velocity)?;
                    println!("{}", describe_throw(&report));
                    if args.json {
                        println!("{}", duel.snapshot_json()?);
                    }
                    if let Some(winner) = report.winner {
                        println!("{} wins the round!", winner);
                        duel.new_round();
                        println!("{}", describe_round(duel.state()));
                    }
                }
                Err(e) => println!("Invalid input! {}", e),
            },
        }
        write!(stdout, "{}", prompt(duel.state()))?;
        stdout.flush()?;
    }

    let state = duel.state();
    println!(
        "\nFinal score: {} {} - {} {}",
        PlayerId::One,
        state.score(PlayerId::One),
        state.score(PlayerId::Two),
        PlayerId::Two
    );
    Ok(())
}
