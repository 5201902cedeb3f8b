use std::path::PathBuf;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::Serialize;
use stackfall_engine::{GameSession, GameSnapshot, PieceSeed, TickOutcome};

use crate::util;

const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Piece seed as 32 hex digits (random if omitted)
    #[arg(long)]
    seed: Option<PieceSeed>,
    /// Seed for the random input policy
    #[arg(long, default_value_t = 0)]
    input_seed: u64,
    /// Stop after this many ticks even if the game is still running
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Player command issued before a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Nothing,
    Left,
    Right,
    SoftDown,
    Rotate,
}

impl Distribution<Input> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Input {
        match rng.random_range(0..5) {
            0 => Input::Nothing,
            1 => Input::Left,
            2 => Input::Right,
            3 => Input::SoftDown,
            _ => Input::Rotate,
        }
    }
}

impl Input {
    /// Sends the input to the session; returns whether it was accepted.
    fn apply(self, session: &mut GameSession) -> bool {
        let result = match self {
            Input::Nothing => return true,
            Input::Left => session.try_move_left(),
            Input::Right => session.try_move_right(),
            Input::SoftDown => session.try_soft_down(),
            Input::Rotate => session.try_rotate(),
        };
        result.is_ok()
    }
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    input_seed: u64,
    max_ticks: u64,
    inputs_sent: u64,
    inputs_rejected: u64,
    snapshot: GameSnapshot,
}

fn simulate(seed: PieceSeed, input_seed: u64, max_ticks: u64) -> SimulationReport {
    let mut session = GameSession::with_seed(seed);
    let mut rng = Pcg32::seed_from_u64(input_seed);
    let mut inputs_sent = 0;
    let mut inputs_rejected = 0;

    session.start();
    while session.wants_ticks() && session.ticks() < max_ticks {
        let input: Input = rng.random();
        if input != Input::Nothing {
            inputs_sent += 1;
            if !input.apply(&mut session) {
                inputs_rejected += 1;
            }
        }
        match session.tick() {
            TickOutcome::Landed { .. } => {
                let stats = session.stats();
                if stats.completed_pieces() % PROGRESS_INTERVAL == 0 {
                    eprintln!(
                        "  {} pieces landed, {} lines, score {}",
                        stats.completed_pieces(),
                        stats.total_cleared_lines(),
                        stats.score()
                    );
                }
            }
            TickOutcome::Ignored | TickOutcome::Descended | TickOutcome::GameOver { .. } => {}
        }
    }

    SimulationReport {
        input_seed,
        max_ticks,
        inputs_sent,
        inputs_rejected,
        snapshot: session.snapshot(),
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        seed,
        input_seed,
        max_ticks,
        output,
    } = arg;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Simulating with piece seed {seed} and input seed {input_seed}...");

    let report = simulate(seed, *input_seed, *max_ticks);
    let snapshot = &report.snapshot;
    eprintln!(
        "Stopped after {} ticks: {}, score {} ({} lines, {} pieces)",
        snapshot.ticks,
        snapshot.status,
        snapshot.stats.score(),
        snapshot.stats.total_cleared_lines(),
        snapshot.stats.completed_pieces(),
    );

    util::save_json(&report, output.as_deref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use stackfall_engine::GameStatus;

    use super::*;

    const SEED: &str = "0123456789abcdeffedcba9876543210";

    #[test]
    fn test_simulation_is_deterministic() {
        let seed = SEED.parse().unwrap();
        let a = simulate(seed, 7, 5_000);
        let b = simulate(seed, 7, 5_000);
        assert_eq!(a.snapshot, b.snapshot);
        assert_eq!(a.inputs_sent, b.inputs_sent);
        assert_eq!(a.inputs_rejected, b.inputs_rejected);
    }

    #[test]
    fn test_simulation_respects_tick_limit() {
        let report = simulate(SEED.parse().unwrap(), 1, 10);
        assert_eq!(report.snapshot.ticks, 10);
        assert_eq!(report.snapshot.status, GameStatus::Running);
    }

    #[test]
    fn test_simulation_runs_until_game_over() {
        let report = simulate(SEED.parse().unwrap(), 3, 1_000_000);
        assert_eq!(report.snapshot.status, GameStatus::Over);
        assert!(report.snapshot.stats.completed_pieces() > 0);
        assert!(report.inputs_rejected <= report.inputs_sent);
    }

    #[test]
    fn test_report_serialization() {
        let report = simulate(SEED.parse().unwrap(), 0, 3);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["max_ticks"], 3);
        assert_eq!(json["snapshot"]["seed"], SEED);
        assert_eq!(json["snapshot"]["ticks"], 3);
    }
}
