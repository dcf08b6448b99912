//! Conversions between elapsed time, sample index, percent and seconds.
//!
//! All functions are pure. Indices are computed from the whole elapsed time
//! since the last anchor rather than accumulated tick by tick, so timer
//! jitter never makes playback drift: a slow tick just makes the next one
//! jump further ahead.

/// Absolute sample index reached `elapsed_ms` after the anchor.
///
/// `offset + floor(elapsed_ms * speed * sample_rate / 1000)`. Negative or
/// non-finite products count as zero progress.
pub fn next_index(elapsed_ms: f64, offset: usize, speed: f64, sample_rate: f64) -> usize {
    let advanced = (elapsed_ms * speed * sample_rate / 1000.0).floor();
    if advanced.is_finite() && advanced > 0.0 {
        offset.saturating_add(advanced as usize)
    } else {
        offset
    }
}

/// Position of `index` on the timeline, in percent.
///
/// A single-sample timeline has nowhere to go and always reports 100.
pub fn percent_from_index(index: usize, gaze_len: usize) -> f64 {
    if gaze_len <= 1 {
        return 100.0;
    }
    100.0 * index as f64 / (gaze_len - 1) as f64
}

/// Nearest sample index for a timeline percentage.
///
/// The percentage is clamped to `[0, 100]`.
pub fn index_from_percent(percent: f64, gaze_len: usize) -> usize {
    if gaze_len <= 1 || percent.is_nan() {
        return 0;
    }
    let pct = percent.clamp(0.0, 100.0);
    (pct / 100.0 * (gaze_len - 1) as f64).round() as usize
}

/// Time of `index` from the start of the recording, in seconds.
pub fn seconds_from_index(index: usize, sample_rate: f64) -> f64 {
    index as f64 / sample_rate
}

/// Length of a timeline of `gaze_len` samples, in seconds.
///
/// The last sample sits at `gaze_len - 1`, so that is the duration.
pub fn duration_seconds(gaze_len: usize, sample_rate: f64) -> f64 {
    seconds_from_index(gaze_len.saturating_sub(1), sample_rate)
}
