use std::time::Duration;

use stackfall_engine::PieceSeed;

use crate::tui::Tui;

use self::app::PlayApp;

mod app;
mod screen;

const DEFAULT_TICK_MS: u64 = 500;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Milliseconds between gravity ticks
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) tick_ms: u64,
    /// Piece seed as 32 hex digits (random if omitted)
    #[arg(long)]
    pub(crate) seed: Option<PieceSeed>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { tick_ms, seed } = arg;

    let mut app = PlayApp::new(Duration::from_millis(*tick_ms), *seed);
    Tui::new().run(&mut app)?;

    let session = app.session();
    let stats = session.stats();
    eprintln!(
        "Seed {}: {}, score {} ({} lines, {} pieces)",
        session.seed(),
        session.status(),
        stats.score(),
        stats.total_cleared_lines(),
        stats.completed_pieces(),
    );

    Ok(())
}
