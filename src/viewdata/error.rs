//! View data loading and validation errors.

use std::path::PathBuf;

/// Errors that can occur while loading or validating view data.
#[derive(Debug, thiserror::Error)]
pub enum ViewDataError {
    #[error("Failed to read view data from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed view data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid sample rate {0} (must be a positive number)")]
    InvalidSampleRate(f64),

    #[error("View data contains no stimuli")]
    NoStimuli,

    #[error("Stimulus '{0}' has no sample data")]
    UnknownStimulus(String),

    #[error("Viewer '{viewer}' in stimulus '{stim}' is not declared in viewers")]
    UnknownViewer { stim: String, viewer: String },

    #[error("Viewer '{viewer}' belongs to undeclared group '{group}'")]
    UndeclaredGroup { viewer: String, group: String },
}
