use anyhow::Result;
use clap::Parser;

use gazeplay::cli::{Cli, Commands, ConfigCommands};

mod commands;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            file,
            stim,
            fps,
            speed,
            paused,
        } => commands::play::handle(&file, stim, fps, speed, paused),
        Commands::Info { file } => commands::info::handle(&file),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
