//! Progress bar rendering for the terminal player.
//!
//! The progress bar doubles as the scrub slider: mouse input maps columns on
//! the bar back to timeline percentages with [`column_to_percent`].

use std::io::{self, Write};

use anyhow::Result;

use crate::theme::{bg_ansi, fg_ansi, Theme, ANSI_RESET};

/// Column the bar starts at (after one column of padding).
pub const BAR_START_COL: u16 = 1;

/// Columns reserved for padding and the time display.
const BAR_RESERVED_COLS: usize = 22;

/// Width of the bar for a terminal `term_cols` wide.
pub fn bar_width(term_cols: u16) -> usize {
    (term_cols as usize).saturating_sub(BAR_RESERVED_COLS)
}

/// Whether a column lies on the bar.
pub fn is_on_bar(column: u16, term_cols: u16) -> bool {
    let width = bar_width(term_cols);
    column >= BAR_START_COL && ((column - BAR_START_COL) as usize) < width
}

/// Timeline percentage for a column, clamped to the bar's extent.
///
/// The first column is 0% and the last column is 100%.
pub fn column_to_percent(column: u16, term_cols: u16) -> f64 {
    let width = bar_width(term_cols);
    if width <= 1 {
        return 0.0;
    }
    let pos = column.saturating_sub(BAR_START_COL) as f64;
    (pos / (width - 1) as f64 * 100.0).clamp(0.0, 100.0)
}

/// Format seconds as `M:SS.mmm`.
pub fn format_seconds(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let mins = total_ms / 60_000;
    let secs = (total_ms % 60_000) as f64 / 1000.0;
    format!("{}:{:06.3}", mins, secs)
}

/// Build the progress bar character array.
///
/// Returns the bar characters and the index of the playhead.
pub fn build_progress_bar_chars(bar_width: usize, percent: f64) -> (Vec<char>, usize) {
    let mut bar: Vec<char> = vec!['─'; bar_width];
    if bar_width == 0 {
        return (bar, 0);
    }
    let progress = (percent / 100.0).clamp(0.0, 1.0);
    let head = ((bar_width - 1) as f64 * progress).round() as usize;
    for c in bar.iter_mut().take(head) {
        *c = '━';
    }
    bar[head] = '⏺';
    (bar, head)
}

/// Render the progress bar with the time display.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `percent` - Playhead position on the timeline
/// * `current_secs` - Time of the playhead
/// * `total_secs` - Duration of the stimulus
/// * `scrubbing` - Whether a scrub gesture is in progress
#[allow(clippy::too_many_arguments)]
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    theme: &Theme,
    width: u16,
    row: u16,
    percent: f64,
    current_secs: f64,
    total_secs: f64,
    scrubbing: bool,
) -> Result<()> {
    let output = build_progress_line(
        theme,
        width,
        row,
        percent,
        current_secs,
        total_secs,
        scrubbing,
    );
    write!(stdout, "{}", output)?;
    Ok(())
}

fn build_progress_line(
    theme: &Theme,
    width: u16,
    row: u16,
    percent: f64,
    current_secs: f64,
    total_secs: f64,
    scrubbing: bool,
) -> String {
    let bar_width = bar_width(width);
    let (bar, head) = build_progress_bar_chars(bar_width, percent);
    let time_display = format!(
        " {}/{}",
        format_seconds(current_secs),
        format_seconds(total_secs)
    );

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1)); // Move cursor
    output.push_str(&bg_ansi(ratatui::style::Color::Indexed(236)));
    output.push(' ');

    let head_color = if scrubbing { theme.scrub } else { theme.text_primary };
    output.push_str(&fg_ansi(theme.accent));
    for (i, &c) in bar.iter().enumerate() {
        if i == head {
            output.push_str(&fg_ansi(head_color));
            output.push(c);
            output.push_str(&fg_ansi(theme.text_secondary));
        } else {
            output.push(c);
        }
    }

    output.push_str(&fg_ansi(theme.text_primary));
    output.push_str(&time_display);

    // Fill remaining width
    let used_width = 1 + bar_width + time_display.chars().count();
    let remaining = (width as usize).saturating_sub(used_width);
    output.push_str(&" ".repeat(remaining));
    output.push_str(ANSI_RESET);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_seconds_formats_correctly() {
        assert_eq!(format_seconds(0.0), "0:00.000");
        assert_eq!(format_seconds(2.5), "0:02.500");
        assert_eq!(format_seconds(65.25), "1:05.250");
        assert_eq!(format_seconds(3.3), "0:03.300");
    }

    #[test]
    fn format_seconds_negative_treated_as_zero() {
        assert_eq!(format_seconds(-5.0), "0:00.000");
    }

    #[test]
    fn bar_at_zero() {
        let (bar, head) = build_progress_bar_chars(10, 0.0);
        assert_eq!(head, 0);
        assert_eq!(bar[0], '⏺');
        assert_eq!(bar[1], '─');
    }

    #[test]
    fn bar_at_end() {
        let (bar, head) = build_progress_bar_chars(10, 100.0);
        assert_eq!(head, 9);
        assert_eq!(bar[9], '⏺');
        assert!(bar[..9].iter().all(|&c| c == '━'));
    }

    #[test]
    fn bar_half_way() {
        let (bar, head) = build_progress_bar_chars(11, 50.0);
        assert_eq!(head, 5);
        assert_eq!(bar[4], '━');
        assert_eq!(bar[6], '─');
    }

    #[test]
    fn bar_clamps_out_of_range_percent() {
        assert_eq!(build_progress_bar_chars(10, 250.0).1, 9);
        assert_eq!(build_progress_bar_chars(10, -3.0).1, 0);
    }

    #[test]
    fn zero_width_bar_is_empty() {
        let (bar, head) = build_progress_bar_chars(0, 50.0);
        assert!(bar.is_empty());
        assert_eq!(head, 0);
    }

    #[test]
    fn column_mapping_covers_whole_bar() {
        // 80 columns -> 58 column bar starting at column 1
        assert_eq!(bar_width(80), 58);
        assert_eq!(column_to_percent(1, 80), 0.0);
        assert_eq!(column_to_percent(58, 80), 100.0);
        assert!((column_to_percent(30, 80) - 50.877).abs() < 0.01);
    }

    #[test]
    fn column_mapping_clamps_outside_bar() {
        assert_eq!(column_to_percent(0, 80), 0.0);
        assert_eq!(column_to_percent(79, 80), 100.0);
    }

    #[test]
    fn is_on_bar_bounds() {
        assert!(!is_on_bar(0, 80));
        assert!(is_on_bar(1, 80));
        assert!(is_on_bar(58, 80));
        assert!(!is_on_bar(59, 80));
        assert!(!is_on_bar(5, 10)); // bar has no width
    }

    #[test]
    fn progress_line_contains_times_and_is_positioned() {
        let theme = Theme::default();
        let line = build_progress_line(&theme, 80, 25, 50.0, 1.5, 3.0, false);
        assert!(line.starts_with("\x1b[26;1H"));
        assert!(line.contains("0:01.500/0:03.000"));
        assert!(line.contains('⏺'));
        assert!(line.ends_with(ANSI_RESET));
    }

    #[test]
    fn scrubbing_highlights_playhead() {
        let theme = Theme::default();
        let line = build_progress_line(&theme, 80, 0, 0.0, 0.0, 1.0, true);
        let head_pos = line.find('⏺').unwrap();
        let scrub_code = fg_ansi(theme.scrub);
        assert!(line[..head_pos].ends_with(&scrub_code));
    }
}
