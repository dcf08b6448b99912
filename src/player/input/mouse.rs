//! Mouse input handling for the native player.
//!
//! The progress bar is the scrub slider: pressing on it starts a scrub
//! gesture, dragging moves the playhead and releasing ends the gesture.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::clock::Clock;
use crate::player::engine::GazePlayer;
use crate::player::render::{column_to_percent, is_on_bar};
use crate::player::screen::{ScreenState, ScreenSync};
use crate::player::state::InputResult;
use crate::surface::Surface;

/// Handle a mouse event.
///
/// Currently handles:
/// - Left press on the progress bar: begin scrubbing at that position
/// - Left drag while scrubbing: follow the pointer (clamped to the bar)
/// - Left release while scrubbing: end the scrub
pub fn handle_mouse_event<S, C>(
    mouse: MouseEvent,
    player: &mut GazePlayer<S, ScreenSync, C>,
    screen: &mut ScreenState,
) -> InputResult
where
    S: Surface,
    C: Clock,
{
    if screen.show_help {
        return InputResult::Continue;
    }
    let scrubbing = player.state().state.is_scrubbing();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row == screen.progress_row() && is_on_bar(mouse.column, screen.term_cols) {
                screen.overview = false;
                player.begin_scrub();
                player.scrub_to(column_to_percent(mouse.column, screen.term_cols));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if scrubbing => {
            // Rows are ignored so a sloppy drag keeps scrubbing
            player.scrub_to(column_to_percent(mouse.column, screen.term_cols));
        }
        MouseEventKind::Up(MouseButton::Left) if scrubbing => {
            player.end_scrub();
        }
        _ => {}
    }

    InputResult::Continue
}
