//! Command line interface definitions.
//!
//! Lives in the library so the `xtask` crate can render the man page from
//! the same definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string: package version plus git SHA on dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("GAZEPLAY_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gaze Playback - play recorded eye-tracking sessions in the terminal.
#[derive(Debug, Parser)]
#[command(name = "gazeplay", version = VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a gaze data file as an animated overlay
    #[command(long_about = "Play a gaze data file as an animated overlay.

Controls:
  space      play / pause        r        restart
  +/-        speed up / down     1-4      speed presets
  n/p ]/[    next / previous     <-/->    seek
  o          overview            ?        help
  q / Esc    quit

Drag the progress bar with the mouse to scrub.")]
    Play {
        /// Gaze data file (JSON, optionally wrapped as `EyeData = ...;`)
        file: PathBuf,
        /// Stimulus to open, by id or 1-based number
        #[arg(short, long, value_name = "N")]
        stim: Option<String>,
        /// Render loop frames per second
        #[arg(long, value_name = "F")]
        fps: Option<f64>,
        /// Initial playback speed multiplier
        #[arg(long, value_name = "X")]
        speed: Option<f64>,
        /// Open paused instead of playing right away
        #[arg(long)]
        paused: bool,
    },

    /// Show stimuli, viewers and groups in a gaze data file
    Info {
        /// Gaze data file
        file: PathBuf,
    },

    /// Inspect the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR, creating it with defaults if missing
    Edit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_parses_flags() {
        let cli = Cli::try_parse_from([
            "gazeplay", "play", "data.json", "--stim", "2", "--fps", "60", "--speed", "0.5",
            "--paused",
        ])
        .unwrap();
        match cli.command {
            Commands::Play {
                file,
                stim,
                fps,
                speed,
                paused,
            } => {
                assert_eq!(file, PathBuf::from("data.json"));
                assert_eq!(stim.as_deref(), Some("2"));
                assert_eq!(fps, Some(60.0));
                assert_eq!(speed, Some(0.5));
                assert!(paused);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn play_flags_are_optional() {
        let cli = Cli::try_parse_from(["gazeplay", "play", "data.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Play {
                stim: None,
                fps: None,
                speed: None,
                paused: false,
                ..
            }
        ));
    }

    #[test]
    fn config_subcommands_parse() {
        let cli = Cli::try_parse_from(["gazeplay", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Path)));
        let cli = Cli::try_parse_from(["gazeplay", "config", "edit"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Edit)));
    }

    #[test]
    fn completions_require_known_shell() {
        assert!(Cli::try_parse_from(["gazeplay", "completions", "bash"]).is_ok());
        assert!(Cli::try_parse_from(["gazeplay", "completions", "cmd"]).is_err());
    }
}
