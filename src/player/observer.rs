//! Notifications from the player to the surrounding UI.
//!
//! The player reports progress after every drawn frame, the selected stimulus
//! after every switch, and every state transition. Hosts use these to keep a
//! progress bar, navigation list or play/pause label in sync.

use super::state::PlayState;

/// Receiver of player notifications. Every method defaults to doing nothing.
pub trait PlayerObserver {
    /// A frame was drawn; `seconds` is the time of its sample.
    fn progress(&mut self, seconds: f64, percent: f64) {
        let _ = (seconds, percent);
    }

    /// A stimulus became active.
    fn stimulus_selected(&mut self, index: usize, stim: &str, duration_seconds: f64) {
        let _ = (index, stim, duration_seconds);
    }

    /// The state machine moved to `state`.
    fn state_changed(&mut self, state: PlayState) {
        let _ = state;
    }
}

impl PlayerObserver for () {}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Progress { seconds: f64, percent: f64 },
    StimulusSelected { index: usize, stim: String, duration_seconds: f64 },
    StateChanged(PlayState),
}

/// Observer that keeps every notification.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<PlayerEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent progress report, as `(seconds, percent)`.
    pub fn last_progress(&self) -> Option<(f64, f64)> {
        self.events.iter().rev().find_map(|e| match e {
            PlayerEvent::Progress { seconds, percent } => Some((*seconds, *percent)),
            _ => None,
        })
    }

    /// Every state the player moved through, in order.
    pub fn states(&self) -> Vec<PlayState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PlayerEvent::StateChanged(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    /// Number of progress reports (one per drawn frame).
    pub fn progress_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PlayerEvent::Progress { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PlayerObserver for EventLog {
    fn progress(&mut self, seconds: f64, percent: f64) {
        self.events.push(PlayerEvent::Progress { seconds, percent });
    }

    fn stimulus_selected(&mut self, index: usize, stim: &str, duration_seconds: f64) {
        self.events.push(PlayerEvent::StimulusSelected {
            index,
            stim: stim.to_string(),
            duration_seconds,
        });
    }

    fn state_changed(&mut self, state: PlayState) {
        self.events.push(PlayerEvent::StateChanged(state));
    }
}
