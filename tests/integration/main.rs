//! Integration tests for gazeplay

mod helpers;

mod cli_test;
mod config_test;
mod playback_test;
mod viewdata_test;
