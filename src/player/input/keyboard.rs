//! Keyboard input handling for the native player.
//!
//! Handles all keyboard shortcuts including playback controls, speed,
//! seeking, stimulus navigation and overlay toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::player::clock::Clock;
use crate::player::engine::GazePlayer;
use crate::player::error::PlayerError;
use crate::player::screen::{Controls, ScreenState, ScreenSync};
use crate::player::state::InputResult;
use crate::surface::Surface;

/// Speeds bound to the number keys `1` to `4`.
const SPEED_PRESETS: [f64; 4] = [0.5, 1.0, 2.0, 4.0];

/// Next faster speed, capped at `controls.max_speed`.
pub fn speed_up(current: f64, controls: &Controls) -> f64 {
    (current * controls.speed_step).min(controls.max_speed)
}

/// Next slower speed, floored at `controls.min_speed`.
pub fn speed_down(current: f64, controls: &Controls) -> f64 {
    (current / controls.speed_step).max(controls.min_speed)
}

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates state or returns control flow signals.
pub fn handle_key_event<S, C>(
    key: KeyEvent,
    player: &mut GazePlayer<S, ScreenSync, C>,
    screen: &mut ScreenState,
    controls: &Controls,
) -> InputResult
where
    S: Surface,
    C: Clock,
{
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if screen.show_help {
        screen.show_help = false;
        player.observer_mut().needs_clear = true;
        player.observer_mut().request_render();
        return InputResult::Continue;
    }

    if screen.message.take().is_some() {
        player.observer_mut().request_render();
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc => {
            if screen.overview {
                leave_overview(player, screen);
                InputResult::Continue
            } else {
                InputResult::Quit
            }
        }

        // === Overlays ===
        KeyCode::Char('?') => {
            screen.show_help = true;
            player.observer_mut().request_render();
            InputResult::Continue
        }
        KeyCode::Char('o') => {
            if screen.overview {
                leave_overview(player, screen);
            } else {
                player.pause();
                player.render_overview();
                screen.overview = true;
                player.observer_mut().request_render();
            }
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            screen.overview = false;
            player.toggle_play_pause();
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            screen.overview = false;
            player.play(true);
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let speed = speed_up(player.state().playback_speed, controls);
            apply_speed(player, screen, speed);
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            let speed = speed_down(player.state().playback_speed, controls);
            apply_speed(player, screen, speed);
            InputResult::Continue
        }
        KeyCode::Char(c @ '1'..='4') => {
            let preset = SPEED_PRESETS[(c as u8 - b'1') as usize];
            apply_speed(player, screen, preset);
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            screen.overview = false;
            player.seek_by_percent(-controls.seek_step_percent);
            InputResult::Continue
        }
        KeyCode::Right => {
            screen.overview = false;
            player.seek_by_percent(controls.seek_step_percent);
            InputResult::Continue
        }
        KeyCode::Home => {
            screen.overview = false;
            player.seek_to_percent(0.0);
            InputResult::Continue
        }
        KeyCode::End => {
            screen.overview = false;
            player.seek_to_percent(100.0);
            InputResult::Continue
        }

        // === Stimulus navigation ===
        KeyCode::Char('n') | KeyCode::Char(']') => {
            screen.overview = false;
            let result = player.next_stimulus();
            report(player, screen, result);
            InputResult::Continue
        }
        KeyCode::Char('p') | KeyCode::Char('[') => {
            screen.overview = false;
            let result = player.previous_stimulus();
            report(player, screen, result);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Drop the overview and put the current frame back.
fn leave_overview<S: Surface, C: Clock>(
    player: &mut GazePlayer<S, ScreenSync, C>,
    screen: &mut ScreenState,
) {
    screen.overview = false;
    player.redraw();
}

fn apply_speed<S: Surface, C: Clock>(
    player: &mut GazePlayer<S, ScreenSync, C>,
    screen: &mut ScreenState,
    speed: f64,
) {
    let result = player.set_playback_speed(speed);
    report(player, screen, result);
    player.observer_mut().request_render();
}

/// Show a failed operation in the status bar.
fn report<S: Surface, C: Clock>(
    player: &mut GazePlayer<S, ScreenSync, C>,
    screen: &mut ScreenState,
    result: Result<(), PlayerError>,
) {
    if let Err(e) = result {
        warn!(error = %e, "player operation failed");
        screen.message = Some(e.to_string());
        player.observer_mut().request_render();
    }
}
