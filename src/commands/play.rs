//! Play command handler

use std::path::Path;

use anyhow::{Context, Result};

use gazeplay::player::play_view_data;
use gazeplay::{Config, ViewData};

/// Play a gaze data file in the terminal.
///
/// Config values are the defaults; flags given on the command line win.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: &Path,
    stim: Option<String>,
    fps: Option<f64>,
    speed: Option<f64>,
    paused: bool,
) -> Result<()> {
    let config = Config::load()?;
    let mut options = config.play_options()?;
    options.stimulus = stim;
    options.start_paused = paused;
    if let Some(fps) = fps {
        options.fps = fps;
    }
    if let Some(speed) = speed {
        options.speed = speed;
    }

    let data = ViewData::load(file)
        .with_context(|| format!("Failed to load gaze data from {}", file.display()))?;
    play_view_data(data, &options)
}
