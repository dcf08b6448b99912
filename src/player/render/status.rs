//! Status bar rendering for the native player.
//!
//! Displays playback state, speed, the active stimulus, and keyboard shortcuts.

use std::io::{self, Write};

use anyhow::Result;

use crate::player::state::PlayState;
use crate::theme::{fg_ansi, Theme, ANSI_RESET};

/// Count digits in a number (for width calculation).
///
/// # Arguments
/// * `n` - The number to count digits of
///
/// # Returns
/// The number of digits in the base-10 representation
#[inline]
pub fn count_digits(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (n as f64).log10().floor() as usize + 1
    }
}

/// What the status bar shows.
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo<'a> {
    pub state: PlayState,
    pub speed: f64,
    /// Zero-based index of the active stimulus
    pub stim_index: usize,
    pub stim_count: usize,
    pub stim_id: &'a str,
    pub overview: bool,
    /// Replaces the shortcut hints when set
    pub message: Option<&'a str>,
}

/// Render a separator line.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    // Build line as string to minimize syscalls
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1)); // Move + dark gray
    output.push_str(&"─".repeat(width as usize));
    output.push_str(ANSI_RESET);
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `theme` - Colors for the bar
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `info` - What to show
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    theme: &Theme,
    width: u16,
    row: u16,
    info: &StatusInfo<'_>,
) -> Result<()> {
    let output = build_status_line(theme, width, row, info);
    write!(stdout, "{}", output)?;
    Ok(())
}

fn build_status_line(theme: &Theme, width: u16, row: u16, info: &StatusInfo<'_>) -> String {
    let primary = fg_ansi(theme.text_primary);
    let secondary = fg_ansi(theme.text_secondary);
    let accent = fg_ansi(theme.accent);

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0; // Track visible width manually

    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str(&primary);
    output.push(' ');
    visible_len += 1;

    // State icon (▶ and ⏸ are double-width unicode)
    let icon = match info.state {
        PlayState::Scrubbing { .. } => "⇄  ",
        s if s.is_playing() => "⏸  ",
        _ => "▶  ",
    };
    if info.state.is_scrubbing() {
        output.push_str(&fg_ansi(theme.scrub));
    }
    output.push_str(icon);
    visible_len += 4; // icon (2) + 2 spaces

    output.push_str(&secondary);
    output.push_str("spd:");
    visible_len += 4;
    output.push_str(&primary);
    let speed_str = format!("{:.2}x ", info.speed);
    visible_len += speed_str.len();
    output.push_str(&speed_str);

    output.push_str(&secondary);
    output.push_str("stim:");
    visible_len += 5;
    output.push_str(&accent);
    let stim_str = format!("{}/{} {} ", info.stim_index + 1, info.stim_count, info.stim_id);
    visible_len += count_digits(info.stim_index + 1)
        + 1
        + count_digits(info.stim_count)
        + 1
        + info.stim_id.chars().count()
        + 1;
    output.push_str(&stim_str);

    if info.overview {
        output.push_str(&fg_ansi(theme.scrub));
        output.push_str("[O] ");
        visible_len += 4;
    }

    output.push_str(&secondary);
    output.push_str("│ ");
    visible_len += 2;

    match info.message {
        Some(message) => {
            output.push_str(&fg_ansi(theme.error));
            output.push_str(message);
            visible_len += message.chars().count();
        }
        None => {
            let play_action = if info.state.is_playing() {
                ":pause "
            } else {
                ":play "
            };
            let hints: [(&str, &str); 6] = [
                ("space", play_action),
                ("+/-", ":spd "),
                ("n/p", ":stim "),
                ("o", ":all "),
                ("?", ":hlp "),
                ("q", ":quit"),
            ];
            for (key, action) in hints {
                output.push_str(&accent);
                output.push_str(key);
                output.push_str(&secondary);
                output.push_str(action);
                visible_len += key.len() + action.len();
            }
        }
    }

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    output.push_str(&" ".repeat(padding));
    output.push_str(ANSI_RESET);
    output
}
