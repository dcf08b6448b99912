//! Terminal host state: layout, overlays and redraw tracking.

use super::observer::PlayerObserver;
use super::state::PlayState;

/// Host-side state of the terminal player.
#[derive(Debug, Clone)]
pub struct ScreenState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Whether the canvas shows the all-frames overview instead of a frame
    pub overview: bool,
    /// One-line message shown in the status bar (errors, notices)
    pub message: Option<String>,
}

impl ScreenState {
    /// Number of status/chrome lines (separator + progress + status bar)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            show_help: false,
            overview: false,
            message: None,
        }
    }

    /// Rows available to the gaze canvas.
    pub fn canvas_rows(&self) -> u16 {
        self.term_rows.saturating_sub(Self::STATUS_LINES)
    }

    pub fn separator_row(&self) -> u16 {
        self.term_rows.saturating_sub(3)
    }

    pub fn progress_row(&self) -> u16 {
        self.term_rows.saturating_sub(2)
    }

    pub fn status_row(&self) -> u16 {
        self.term_rows.saturating_sub(1)
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.term_cols = cols;
        self.term_rows = rows;
    }
}

/// Keyboard control tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Multiplier applied per speed up/down press
    pub speed_step: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Timeline percent moved per arrow key press
    pub seek_step_percent: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            speed_step: 1.5,
            min_speed: 0.1,
            max_speed: 16.0,
            seek_step_percent: 5.0,
        }
    }
}

/// Player observer that tracks when the terminal must be redrawn.
#[derive(Debug, Clone, Default)]
pub struct ScreenSync {
    /// Something visible changed since the last screen update
    pub needs_render: bool,
    /// The stimulus changed; stale chrome must be wiped
    pub needs_clear: bool,
}

impl ScreenSync {
    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Take the pending flags, resetting them.
    pub fn take(&mut self) -> (bool, bool) {
        let flags = (self.needs_render, self.needs_clear);
        self.needs_render = false;
        self.needs_clear = false;
        flags
    }
}

impl PlayerObserver for ScreenSync {
    fn progress(&mut self, _seconds: f64, _percent: f64) {
        self.needs_render = true;
    }

    fn stimulus_selected(&mut self, _index: usize, _stim: &str, _duration_seconds: f64) {
        self.needs_render = true;
        self.needs_clear = true;
    }

    fn state_changed(&mut self, _state: PlayState) {
        self.needs_render = true;
    }
}
