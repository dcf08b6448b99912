//! Player errors.

use crate::viewdata::ViewDataError;

/// Errors raised by player operations.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Stimulus index {index} out of range ({count} stimuli)")]
    StimulusOutOfRange { index: usize, count: usize },

    #[error("Stimulus '{0}' has no samples")]
    EmptyStimulus(String),

    #[error("Invalid playback speed {0} (must be a positive number)")]
    InvalidSpeed(f64),

    #[error("Invalid frame rate {0} (must be a positive number)")]
    InvalidFrameRate(f64),

    #[error(transparent)]
    ViewData(#[from] ViewDataError),
}
