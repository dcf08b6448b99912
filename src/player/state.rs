//! Player state management
//!
//! Contains the central `PlaybackState` struct that holds the playhead and
//! play-clock anchor, the `PlayState` state machine tag, and shared types
//! used across player modules.

use std::time::Instant;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Whether the play clock is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Paused,
    Playing,
}

/// Player state machine tag.
///
/// While scrubbing, the render loop is suspended and `resume` remembers what
/// to go back to when the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Idle(Mode),
    Scrubbing { resume: Mode },
}

impl PlayState {
    pub fn is_playing(self) -> bool {
        self == PlayState::Idle(Mode::Playing)
    }

    pub fn is_scrubbing(self) -> bool {
        matches!(self, PlayState::Scrubbing { .. })
    }
}

impl Default for PlayState {
    fn default() -> Self {
        PlayState::Idle(Mode::Paused)
    }
}

impl std::fmt::Display for PlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayState::Idle(Mode::Paused) => write!(f, "paused"),
            PlayState::Idle(Mode::Playing) => write!(f, "playing"),
            PlayState::Scrubbing {
                resume: Mode::Paused,
            } => write!(f, "scrub-paused"),
            PlayState::Scrubbing {
                resume: Mode::Playing,
            } => write!(f, "scrub-playing"),
        }
    }
}

/// Playback state of one player.
///
/// Fields are read freely by hosts and renderers; transitions go through
/// [`crate::player::GazePlayer`], which keeps the invariants
/// (`point_index < gaze_len`, `play_started_at` set only while playing).
#[derive(Debug, Clone)]
pub struct PlaybackState {
    // === Position ===
    /// Index of the active stimulus in the view data
    pub stim_index: usize,
    /// Current sample index, always in `[0, gaze_len - 1]`
    pub point_index: usize,
    /// Sample index at the moment the play clock was last anchored
    pub point_index_offset: usize,
    /// Longest viewing of the active stimulus
    pub gaze_len: usize,

    // === Timing ===
    /// Wall clock time the current play segment started
    pub play_started_at: Option<Instant>,
    /// Playback speed multiplier (1.0 = recorded speed)
    pub playback_speed: f64,

    // === State machine ===
    pub state: PlayState,
}

impl PlaybackState {
    /// Create a paused state at the start of a stimulus with `gaze_len` samples.
    pub fn new(stim_index: usize, gaze_len: usize) -> Self {
        Self {
            stim_index,
            point_index: 0,
            point_index_offset: 0,
            gaze_len,
            play_started_at: None,
            playback_speed: 1.0,
            state: PlayState::default(),
        }
    }

    /// Index of the last sample.
    pub fn last_index(&self) -> usize {
        self.gaze_len.saturating_sub(1)
    }

    /// Whether the playhead sits on the last sample.
    pub fn at_end(&self) -> bool {
        self.point_index >= self.last_index()
    }

    /// Clamp an index into the timeline.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Re-anchor the play clock at the current playhead.
    pub fn anchor(&mut self, now: Instant) {
        self.point_index_offset = self.point_index;
        self.play_started_at = Some(now);
    }

    /// Reset position for a newly selected stimulus.
    ///
    /// Speed is kept; the player always lands paused.
    pub fn reset_for_stimulus(&mut self, stim_index: usize, gaze_len: usize) {
        self.stim_index = stim_index;
        self.gaze_len = gaze_len;
        self.point_index = 0;
        self.point_index_offset = 0;
        self.play_started_at = None;
        self.state = PlayState::Idle(Mode::Paused);
    }
}
