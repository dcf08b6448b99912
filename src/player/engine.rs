//! The playback state machine and its render loop.
//!
//! [`GazePlayer`] owns the view data, a drawing surface and the playback
//! state. Hosts forward user events to its operations and drive the render
//! loop by sleeping until [`GazePlayer::tick_due`] and then calling
//! [`GazePlayer::run_due_tick`].
//!
//! The loop is a chain of single deferred ticks. A tick that finds the player
//! still playing re-arms itself `1000 / fps` milliseconds later; anything
//! that stops playback (pause, scrub, stimulus switch, end of data) clears the
//! pending deadline, and the tick re-checks the state before drawing, so at
//! most one tick is ever outstanding and none fires past a transition.

use std::time::{Duration, Instant};

use tracing::debug;

use super::clock::Clock;
use super::error::PlayerError;
use super::frame::{FramePos, FrameRenderer, DEFAULT_POINT_RADIUS};
use super::observer::PlayerObserver;
use super::state::{Mode, PlayState, PlaybackState};
use super::timing::{
    duration_seconds, index_from_percent, next_index, percent_from_index, seconds_from_index,
};
use crate::scheme::ColorScheme;
use crate::surface::Surface;
use crate::viewdata::{SampleStore, ViewData, ViewDataError};

/// What a render loop tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Drew a frame and scheduled the next tick at the given time
    Rescheduled(Instant),
    /// Drew a frame and reached the end of the data; playback is paused
    Finished,
    /// Player was not playing; nothing was drawn
    Idle,
}

/// Gaze playback engine for one viewer widget.
pub struct GazePlayer<S, O, C> {
    data: ViewData,
    surface: S,
    renderer: FrameRenderer,
    observer: O,
    clock: C,
    state: PlaybackState,
    frame_interval: Duration,
    next_tick: Option<Instant>,
}

impl<S, O, C> GazePlayer<S, O, C>
where
    S: Surface,
    O: PlayerObserver,
    C: Clock,
{
    /// Create a player showing the first stimulus with samples, paused at
    /// its start.
    pub fn new(
        data: ViewData,
        surface: S,
        fps: f64,
        scheme: ColorScheme,
        observer: O,
        clock: C,
    ) -> Result<Self, PlayerError> {
        let frame_interval = frame_interval(fps)?;
        let mut player = Self {
            data,
            surface,
            renderer: FrameRenderer::new(scheme, DEFAULT_POINT_RADIUS),
            observer,
            clock,
            state: PlaybackState::new(0, 1),
            frame_interval,
            next_tick: None,
        };
        let first = player.playable_stimulus(0, 1).ok_or_else(|| player.no_samples(0))?;
        player.select_stimulus(first)?;
        Ok(player)
    }

    // === Stimulus selection ===

    /// Switch to the stimulus at `index`.
    ///
    /// Always stops playback and rewinds to the first sample; speed is kept.
    pub fn select_stimulus(&mut self, index: usize) -> Result<(), PlayerError> {
        let count = self.data.stims().len();
        let store = self
            .data
            .store(index)
            .ok_or(PlayerError::StimulusOutOfRange { index, count })?;
        let gaze_len = store.gaze_len();
        if gaze_len == 0 {
            return Err(PlayerError::EmptyStimulus(store.stim_id().to_string()));
        }
        let stim = store.stim_id().to_string();

        self.next_tick = None;
        self.state.reset_for_stimulus(index, gaze_len);
        debug!(index, stim = %stim, gaze_len, "selected stimulus");

        let duration = duration_seconds(gaze_len, self.data.samples_per_second());
        self.observer.stimulus_selected(index, &stim, duration);
        self.observer.state_changed(self.state.state);
        self.redraw();
        Ok(())
    }

    /// Switch to a stimulus by id.
    pub fn select_stimulus_by_id(&mut self, stim: &str) -> Result<(), PlayerError> {
        let index = self
            .data
            .stims()
            .iter()
            .position(|s| s == stim)
            .ok_or_else(|| ViewDataError::UnknownStimulus(stim.to_string()))?;
        self.select_stimulus(index)
    }

    /// Switch to the next stimulus with samples, wrapping around.
    pub fn next_stimulus(&mut self) -> Result<(), PlayerError> {
        let count = self.data.stims().len();
        let start = (self.state.stim_index + 1) % count;
        let index = self
            .playable_stimulus(start, 1)
            .ok_or_else(|| self.no_samples(start))?;
        self.select_stimulus(index)
    }

    /// Switch to the previous stimulus with samples, wrapping around.
    pub fn previous_stimulus(&mut self) -> Result<(), PlayerError> {
        let count = self.data.stims().len();
        let start = (self.state.stim_index + count - 1) % count;
        let index = self
            .playable_stimulus(start, count - 1)
            .ok_or_else(|| self.no_samples(start))?;
        self.select_stimulus(index)
    }

    /// First stimulus with samples, walking from `start` in steps of `step`
    /// (mod the stimulus count). Every stimulus is visited once.
    fn playable_stimulus(&self, start: usize, step: usize) -> Option<usize> {
        let count = self.data.stims().len();
        (0..count)
            .map(|k| (start + k * step) % count)
            .find(|&index| self.data.store(index).is_some_and(|s| s.gaze_len() > 0))
    }

    fn no_samples(&self, index: usize) -> PlayerError {
        let stim = self.data.stims().get(index).cloned().unwrap_or_default();
        PlayerError::EmptyStimulus(stim)
    }

    // === Play / pause ===

    /// Start or resume playback.
    ///
    /// Restarts from the first sample when `from_start` is set or the
    /// playhead is already on the last sample. Ignored while scrubbing.
    pub fn play(&mut self, from_start: bool) {
        if self.state.state.is_scrubbing() {
            debug!("play ignored while scrubbing");
            return;
        }
        self.start_playing(from_start);
    }

    fn start_playing(&mut self, from_start: bool) {
        let now = self.clock.now();
        if from_start || self.state.at_end() {
            self.state.point_index = 0;
        }
        self.state.anchor(now);
        self.state.state = PlayState::Idle(Mode::Playing);
        if self.next_tick.is_none() {
            self.next_tick = Some(now);
        }
        debug!(
            from = self.state.point_index,
            speed = self.state.playback_speed,
            "playback started"
        );
        self.observer.state_changed(self.state.state);
    }

    /// Stop playback, keeping the playhead where it is.
    ///
    /// Takes effect immediately: the pending tick is cancelled. While
    /// scrubbing, makes the scrub end paused. No-op when already paused.
    pub fn pause(&mut self) {
        match self.state.state {
            PlayState::Idle(Mode::Playing) => {
                self.next_tick = None;
                self.state.state = PlayState::Idle(Mode::Paused);
                self.state.play_started_at = None;
                self.state.point_index_offset = self.state.point_index;
                debug!(at = self.state.point_index, "playback paused");
                self.observer.state_changed(self.state.state);
            }
            PlayState::Scrubbing {
                resume: Mode::Playing,
            } => {
                self.state.state = PlayState::Scrubbing {
                    resume: Mode::Paused,
                };
                self.observer.state_changed(self.state.state);
            }
            _ => {}
        }
    }

    /// Flip between playing and paused. Does nothing while scrubbing.
    pub fn toggle_play_pause(&mut self) {
        match self.state.state {
            PlayState::Idle(Mode::Paused) => self.play(false),
            PlayState::Idle(Mode::Playing) => self.pause(),
            PlayState::Scrubbing { .. } => {}
        }
    }

    /// Change the playback speed.
    ///
    /// The play clock is not re-anchored; the next tick recomputes the index
    /// from the whole elapsed time at the new speed.
    pub fn set_playback_speed(&mut self, speed: f64) -> Result<(), PlayerError> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(PlayerError::InvalidSpeed(speed));
        }
        self.state.playback_speed = speed;
        debug!(speed, "playback speed changed");
        Ok(())
    }

    // === Scrubbing ===

    /// Start a scrub gesture. Suspends the render loop.
    pub fn begin_scrub(&mut self) {
        if let PlayState::Idle(mode) = self.state.state {
            self.next_tick = None;
            self.state.play_started_at = None;
            self.state.state = PlayState::Scrubbing { resume: mode };
            debug!(resume = ?mode, "scrub started");
            self.observer.state_changed(self.state.state);
        }
    }

    /// Move the playhead to `percent` of the timeline and draw that frame.
    ///
    /// Only acts during a scrub gesture; use [`Self::seek_to_percent`]
    /// otherwise. Out-of-range percentages are clamped.
    pub fn scrub_to(&mut self, percent: f64) {
        if !self.state.state.is_scrubbing() {
            debug!(percent, "scrub_to ignored outside a scrub gesture");
            return;
        }
        self.state.point_index = index_from_percent(percent, self.state.gaze_len);
        self.redraw();
    }

    /// Finish a scrub gesture, resuming the state it interrupted.
    ///
    /// Future playback is anchored at the scrub landing point. A gesture that
    /// ends on the last sample has nothing left to play and ends paused.
    pub fn end_scrub(&mut self) {
        let PlayState::Scrubbing { resume } = self.state.state else {
            return;
        };
        self.state.point_index_offset = self.state.point_index;
        debug!(at = self.state.point_index, resume = ?resume, "scrub ended");

        if resume == Mode::Playing && !self.state.at_end() {
            self.start_playing(false);
        } else {
            self.state.state = PlayState::Idle(Mode::Paused);
            self.observer.state_changed(self.state.state);
        }
    }

    /// A complete scrub gesture to a single position.
    pub fn seek_to_percent(&mut self, percent: f64) {
        self.begin_scrub();
        self.scrub_to(percent);
        self.end_scrub();
    }

    /// Seek relative to the current position, in percent of the timeline.
    pub fn seek_by_percent(&mut self, delta: f64) {
        let target = self.current_progress_percent() + delta;
        self.seek_to_percent(target);
    }

    // === Render loop ===

    /// When the pending render loop tick is due, if one is scheduled.
    pub fn tick_due(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Run the pending tick if its time has come.
    pub fn run_due_tick(&mut self) -> Option<TickOutcome> {
        let due = self.next_tick?;
        if self.clock.now() < due {
            return None;
        }
        Some(self.tick())
    }

    /// Run one render loop tick now.
    ///
    /// Draws the frame at the current index, then advances the playhead to
    /// the index for the current time. The frame on screen therefore lags
    /// the playhead by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.next_tick = None;
        if !self.state.state.is_playing() {
            return TickOutcome::Idle;
        }
        let now = self.clock.now();
        let started = *self.state.play_started_at.get_or_insert(now);
        let elapsed_ms = now.saturating_duration_since(started).as_secs_f64() * 1000.0;

        let mut next = next_index(
            elapsed_ms,
            self.state.point_index_offset,
            self.state.playback_speed,
            self.data.samples_per_second(),
        );
        let finished = next >= self.state.gaze_len;
        if finished {
            next = self.state.clamp_index(next);
            self.state.state = PlayState::Idle(Mode::Paused);
            self.state.play_started_at = None;
        }

        self.redraw();
        self.state.point_index = next;

        if finished {
            self.state.point_index_offset = next;
            debug!(elapsed_ms, at = next, "reached end of data");
            self.observer.state_changed(self.state.state);
            TickOutcome::Finished
        } else {
            let due = now + self.frame_interval;
            self.next_tick = Some(due);
            TickOutcome::Rescheduled(due)
        }
    }

    // === Drawing ===

    /// Draw the frame at the current playhead and report progress.
    pub fn redraw(&mut self) {
        let Some(store) = self.data.store(self.state.stim_index) else {
            return;
        };
        let pos = FramePos {
            index: self.state.point_index,
            gaze_len: self.state.gaze_len,
            sample_rate: self.data.samples_per_second(),
        };
        self.renderer
            .render_frame(&mut self.surface, &store, pos, &mut self.observer);
    }

    /// Draw every frame of the active stimulus on top of each other.
    ///
    /// Leaves the playhead alone; the next tick or redraw replaces it.
    pub fn render_overview(&mut self) -> usize {
        match self.data.store(self.state.stim_index) {
            Some(store) => self.renderer.render_overview(&mut self.surface, &store),
            None => 0,
        }
    }

    // === Queries ===

    pub fn current_progress_percent(&self) -> f64 {
        percent_from_index(self.state.point_index, self.state.gaze_len)
    }

    pub fn current_progress_seconds(&self) -> f64 {
        seconds_from_index(self.state.point_index, self.data.samples_per_second())
    }

    pub fn total_duration_seconds(&self) -> f64 {
        duration_seconds(self.state.gaze_len, self.data.samples_per_second())
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn view_data(&self) -> &ViewData {
        &self.data
    }

    /// Sample store of the active stimulus.
    pub fn store(&self) -> Option<SampleStore<'_>> {
        self.data.store(self.state.stim_index)
    }

    /// Id of the active stimulus.
    pub fn current_stim_id(&self) -> &str {
        self.data
            .stims()
            .get(self.state.stim_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn set_point_radius(&mut self, radius: f64) {
        self.renderer.set_point_radius(radius);
    }
}

fn frame_interval(fps: f64) -> Result<Duration, PlayerError> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(PlayerError::InvalidFrameRate(fps));
    }
    Ok(Duration::from_secs_f64(1.0 / fps))
}
