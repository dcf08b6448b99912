//! Input handling for the native player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::player::clock::Clock;
use crate::player::engine::GazePlayer;
use crate::player::screen::{Controls, ScreenState, ScreenSync};
use crate::player::state::InputResult;
use crate::surface::Surface;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `player` - The player to drive
/// * `screen` - Host layout and overlay state
/// * `controls` - Speed and seek tuning
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<S, C>(
    event: Event,
    player: &mut GazePlayer<S, ScreenSync, C>,
    screen: &mut ScreenState,
    controls: &Controls,
) -> InputResult
where
    S: Surface,
    C: Clock,
{
    match event {
        Event::Key(key) => handle_key_event(key, player, screen, controls),
        Event::Mouse(mouse) => handle_mouse_event(mouse, player, screen),
        Event::Resize(new_cols, new_rows) => {
            screen.handle_resize(new_cols, new_rows);
            player.observer_mut().needs_clear = true;
            player.observer_mut().request_render();
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}
