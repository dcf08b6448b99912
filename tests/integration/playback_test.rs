//! Integration tests for driving the playback engine through its public API

use std::rc::Rc;

use gazeplay::player::{
    EventLog, GazePlayer, ManualClock, Mode, PlayState, PlayerError, PlayerEvent, TickOutcome,
};
use gazeplay::scheme::ColorScheme;
use gazeplay::surface::RecordingSurface;
use gazeplay::ViewData;

use super::helpers::load_fixture;

type Player = GazePlayer<RecordingSurface, EventLog, Rc<ManualClock>>;

fn session_player() -> (Player, Rc<ManualClock>) {
    let data = ViewData::from_json_str(&load_fixture("session.json")).unwrap();
    let scheme = ColorScheme::for_groups(data.viewer_groups(), &[]);
    let clock = Rc::new(ManualClock::new());
    let player = GazePlayer::new(
        data,
        RecordingSurface::new(),
        30.0,
        scheme,
        EventLog::new(),
        clock.clone(),
    )
    .expect("Should create player");
    (player, clock)
}

/// Step the clock in 10ms increments, running ticks as they come due.
fn run_until_finished(player: &mut Player, clock: &ManualClock, max_ms: u64) -> bool {
    for _ in 0..max_ms / 10 {
        if player.run_due_tick() == Some(TickOutcome::Finished) {
            return true;
        }
        clock.advance_ms(10);
    }
    false
}

#[test]
fn plays_stimulus_to_the_end() {
    let (mut player, clock) = session_player();
    player.select_stimulus_by_id("city").unwrap();
    player.play(false);

    assert!(run_until_finished(&mut player, &clock, 1000));

    let state = player.state();
    assert_eq!(state.point_index, 9);
    assert_eq!(state.state, PlayState::Idle(Mode::Paused));
    assert_eq!(player.current_progress_percent(), 100.0);
    assert!((player.current_progress_seconds() - 0.3).abs() < 1e-9);
    assert_eq!(player.tick_due(), None);
}

#[test]
fn observer_sees_every_transition() {
    let (mut player, clock) = session_player();
    player.select_stimulus_by_id("city").unwrap();
    player.observer_mut().clear();

    player.play(false);
    run_until_finished(&mut player, &clock, 1000);

    assert_eq!(
        player.observer().states(),
        vec![
            PlayState::Idle(Mode::Playing),
            PlayState::Idle(Mode::Paused)
        ]
    );
    assert_eq!(player.observer().last_progress().map(|(_, pct)| pct), Some(100.0));
}

#[test]
fn frames_show_every_present_sample() {
    let (mut player, _clock) = session_player();

    // beach at index 0: 006, 007 and both viewings of 012
    assert_eq!(player.surface().visible().len(), 4);

    player.begin_scrub();
    player.scrub_to(60.0); // index 3 of 6
    assert_eq!(player.state().point_index, 3);
    assert_eq!(player.surface().visible().len(), 1);
    player.end_scrub();
    assert_eq!(player.state().state, PlayState::Idle(Mode::Paused));
}

#[test]
fn speed_change_mid_playback_recomputes_from_anchor() {
    let (mut player, clock) = session_player();
    player.select_stimulus_by_id("city").unwrap();
    player.play(false);
    player.run_due_tick();

    clock.advance_ms(100);
    player.set_playback_speed(2.0).unwrap();
    player.tick();

    // 100ms at 2x and 30Hz covers 6 samples from the start
    assert_eq!(player.state().point_index, 6);
}

#[test]
fn empty_stimulus_is_rejected_and_state_kept() {
    let (mut player, _clock) = session_player();
    player.select_stimulus_by_id("city").unwrap();

    let err = player.select_stimulus_by_id("blank").unwrap_err();
    assert!(matches!(err, PlayerError::EmptyStimulus(ref s) if s == "blank"));
    assert_eq!(player.current_stim_id(), "city");
}

#[test]
fn next_stimulus_steps_over_empty_stimulus() {
    let (mut player, _clock) = session_player();
    player.select_stimulus_by_id("city").unwrap();

    player.next_stimulus().unwrap();
    assert_eq!(player.current_stim_id(), "beach");

    player.previous_stimulus().unwrap();
    assert_eq!(player.current_stim_id(), "city");
}

#[test]
fn switching_stimulus_stops_playback() {
    let (mut player, clock) = session_player();
    player.play(false);
    player.run_due_tick();
    clock.advance_ms(50);
    player.run_due_tick();

    player.select_stimulus(1).unwrap();

    assert_eq!(player.state().state, PlayState::Idle(Mode::Paused));
    assert_eq!(player.state().point_index, 0);
    assert_eq!(player.tick_due(), None);
    assert!(player
        .observer()
        .events
        .iter()
        .any(|e| matches!(e, PlayerEvent::StimulusSelected { index: 1, .. })));
}
