//! gazeplay - playback of recorded eye-tracking sessions
//!
//! Loads gaze recordings ("view data") and plays them back as an animated
//! overlay of colored points, one per viewer, synchronized to wall clock time.
//! The [`player::GazePlayer`] engine draws onto any [`surface::Surface`]; the
//! binary drives it in a terminal.

pub mod cli;
pub mod config;
pub mod player;
pub mod scheme;
pub mod surface;
pub mod theme;
pub mod viewdata;

pub use config::Config;
pub use viewdata::ViewData;
