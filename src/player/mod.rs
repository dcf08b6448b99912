//! Gaze playback engine and terminal player
//!
//! Plays recorded gaze samples as an animated overlay, synchronized to wall
//! clock time, with play/pause, variable speed and scrubbing.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `timing`: pure elapsed-time / index / percent / seconds conversions
//! - `state`: `PlaybackState` and the `PlayState` state machine tag
//! - `frame`: `FrameRenderer`, draws the points of one sample index
//! - `engine`: `GazePlayer`, the state machine and its render loop
//! - `clock`, `observer`: time source and UI notification seams
//! - `screen`, `input/`, `render/`, `native`: the terminal host
//!
//! # Usage
//!
//! ```no_run
//! use gazeplay::player::{GazePlayer, SystemClock};
//! use gazeplay::scheme::ColorScheme;
//! use gazeplay::surface::RecordingSurface;
//! use gazeplay::ViewData;
//!
//! let data = ViewData::load("session.json").unwrap();
//! let scheme = ColorScheme::for_groups(data.viewer_groups(), &[]);
//! let mut player =
//!     GazePlayer::new(data, RecordingSurface::new(), 30.0, scheme, (), SystemClock).unwrap();
//! player.play(true);
//! while player.state().state.is_playing() {
//!     if let Some(due) = player.tick_due() {
//!         std::thread::sleep(due.saturating_duration_since(std::time::Instant::now()));
//!     }
//!     player.run_due_tick();
//! }
//! ```

pub mod clock;
mod engine;
mod error;
mod frame;
pub(crate) mod input;
mod native;
pub mod observer;
pub mod render;
pub mod screen;
pub mod state;
pub mod timing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{GazePlayer, TickOutcome};
pub use error::PlayerError;
pub use frame::{FramePos, FrameRenderer, DEFAULT_POINT_RADIUS};
pub use native::{build_player, play_view_data, resolve_stimulus, PlayOptions, TerminalPlayer};
pub use observer::{EventLog, PlayerEvent, PlayerObserver};
pub use screen::{Controls, ScreenState, ScreenSync};
pub use state::{InputResult, Mode, PlayState, PlaybackState};
