//! Config subcommands handler

use anyhow::{Context, Result};

use gazeplay::theme::current_theme;
use gazeplay::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file path, noting whether it exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();
    if config_path.exists() {
        println!("{}", theme.primary_text(&config_path.display().to_string()));
    } else {
        println!(
            "{} {}",
            theme.primary_text(&config_path.display().to_string()),
            theme.secondary_text("(not created, defaults in use)")
        );
    }
    Ok(())
}

/// Open the config file in `$EDITOR` (default `vi`).
///
/// Writes the default config first when the file does not exist yet.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save()?;
        println!(
            "{}",
            theme.success_text(&format!("Created {}", config_path.display()))
        );
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor: {}", editor))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }
    Ok(())
}
