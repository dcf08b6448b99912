//! Rendering components for the native player.
//!
//! This module contains the UI rendering functions for the player: the gaze
//! canvas, progress bar (which doubles as the scrub slider), status bar and
//! help overlay.

mod canvas;
mod help;
mod progress;
mod status;

pub use canvas::render_canvas;
pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{
    bar_width, build_progress_bar_chars, column_to_percent, format_seconds, is_on_bar,
    render_progress_bar, BAR_START_COL,
};
pub use status::{count_digits, render_separator_line, render_status_bar, StatusInfo};
