use clap::{Parser, Subcommand};

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Run a seeded game headlessly with random inputs and print the final state
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_no_mode() {
        let args = CommandArgs::try_parse_from(["stackfall"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_parses_play_options() {
        let args = CommandArgs::try_parse_from([
            "stackfall",
            "play",
            "--tick-ms",
            "250",
            "--seed",
            "0123456789abcdeffedcba9876543210",
        ])
        .unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play mode");
        };
        assert_eq!(arg.tick_ms, 250);
        assert_eq!(
            arg.seed.map(|seed| seed.to_string()).as_deref(),
            Some("0123456789abcdeffedcba9876543210")
        );
    }

    #[test]
    fn test_rejects_bad_seed() {
        let result = CommandArgs::try_parse_from(["stackfall", "simulate", "--seed", "xyz"]);
        assert!(result.is_err());
    }
}
