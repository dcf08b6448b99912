//! Native terminal gaze player.
//!
//! Draws the gaze canvas, progress bar and status bar with raw ANSI output
//! and drives the player's render loop from the terminal event loop: events
//! are polled until the next tick is due, then the tick runs.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

use super::clock::SystemClock;
use super::engine::GazePlayer;
use super::frame::DEFAULT_POINT_RADIUS;
use super::input::handle_event;
use super::render::{
    render_canvas, render_help, render_progress_bar, render_separator_line, render_status_bar,
    StatusInfo,
};
use super::screen::{Controls, ScreenState, ScreenSync};
use super::state::InputResult;
use crate::scheme::{ColorScheme, PointStyle};
use crate::surface::CellCanvas;
use crate::theme::{current_theme, Theme};
use crate::viewdata::ViewData;

/// Player wired to the terminal canvas and the wall clock.
pub type TerminalPlayer = GazePlayer<CellCanvas, ScreenSync, SystemClock>;

/// How long to wait for input when no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Settings for a terminal playback session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub fps: f64,
    pub speed: f64,
    /// Point radius in stimulus units
    pub point_radius: f64,
    /// Styles assigned to viewer groups in order; empty uses the default palette
    pub palette: Vec<PointStyle>,
    /// Stimulus to open: an id, or a 1-based position
    pub stimulus: Option<String>,
    pub start_paused: bool,
    pub controls: Controls,
    /// Stimulus area `(width, height)`; defaults to the data's bounds
    pub extent: Option<(f64, f64)>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            fps: 30.0,
            speed: 1.0,
            point_radius: DEFAULT_POINT_RADIUS,
            palette: Vec::new(),
            stimulus: None,
            start_paused: false,
            controls: Controls::default(),
            extent: None,
        }
    }
}

/// Find a stimulus by id, falling back to a 1-based position.
pub fn resolve_stimulus(data: &ViewData, selector: &str) -> Result<usize> {
    if let Some(index) = data.stims().iter().position(|s| s == selector) {
        return Ok(index);
    }
    match selector.parse::<usize>() {
        Ok(n) if (1..=data.stims().len()).contains(&n) => Ok(n - 1),
        Ok(n) => bail!(
            "Stimulus number {} is out of range (1-{})",
            n,
            data.stims().len()
        ),
        Err(_) => bail!("Unknown stimulus: {}", selector),
    }
}

/// Build the player for a terminal of `cols x rows` without touching the terminal.
pub fn build_player(
    data: ViewData,
    options: &PlayOptions,
    cols: u16,
    rows: u16,
) -> Result<(TerminalPlayer, ScreenState)> {
    let screen = ScreenState::new(cols, rows);
    let stimulus = options
        .stimulus
        .as_deref()
        .map(|s| resolve_stimulus(&data, s))
        .transpose()?;

    let (width, height) = options.extent.unwrap_or_else(|| data.bounds());
    let canvas = CellCanvas::new(
        cols as usize,
        screen.canvas_rows() as usize,
        width,
        height,
    );
    let scheme = ColorScheme::for_groups(data.viewer_groups(), &options.palette);

    let mut player = GazePlayer::new(
        data,
        canvas,
        options.fps,
        scheme,
        ScreenSync::default(),
        SystemClock,
    )
    .context("Failed to start player")?;
    player.set_point_radius(options.point_radius);
    player.set_playback_speed(options.speed)?;
    match stimulus {
        Some(index) => player.select_stimulus(index)?,
        None => player.redraw(),
    }
    if !options.start_paused {
        player.play(true);
    }
    Ok((player, screen))
}

/// Play view data in the terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_view_data(data: ViewData, options: &PlayOptions) -> Result<()> {
    let (cols, rows) = terminal::size().context("Failed to get terminal size")?;
    let (mut player, mut screen) = build_player(data, options, cols, rows)?;

    let _guard = TerminalGuard::new()?;
    run_loop(&mut player, &mut screen, &options.controls)
}

#[cfg(not(tarpaulin_include))]
fn run_loop(
    player: &mut TerminalPlayer,
    screen: &mut ScreenState,
    controls: &Controls,
) -> Result<()> {
    let theme = current_theme();
    let mut stdout = io::stdout();
    let mut help_on_screen = false;

    player.observer_mut().needs_clear = true;
    player.observer_mut().request_render();

    loop {
        player.run_due_tick();

        let (cols, rows) = (screen.term_cols as usize, screen.canvas_rows() as usize);
        if player.surface().cols() != cols || player.surface().rows() != rows {
            player.surface_mut().resize(cols, rows);
            if screen.overview {
                player.render_overview();
            } else {
                player.redraw();
            }
        }

        let (needs_render, needs_clear) = player.observer_mut().take();
        if screen.show_help {
            if !help_on_screen {
                render_help(&mut stdout, screen.term_cols, screen.term_rows)?;
                stdout.flush()?;
                help_on_screen = true;
            }
        } else if needs_render {
            help_on_screen = false;
            render_screen(&mut stdout, player, screen, &theme, needs_clear)?;
        }

        let timeout = match player.tick_due() {
            Some(due) => due.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };
        if event::poll(timeout)? {
            let event = event::read()?;
            if handle_event(event, player, screen, controls) == InputResult::Quit {
                debug!("player quit");
                return Ok(());
            }
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn render_screen(
    stdout: &mut io::Stdout,
    player: &TerminalPlayer,
    screen: &ScreenState,
    theme: &Theme,
    clear: bool,
) -> Result<()> {
    if clear {
        execute!(stdout, Clear(ClearType::All))?;
    }
    render_canvas(stdout, player.surface())?;
    render_separator_line(stdout, screen.term_cols, screen.separator_row())?;

    let state = player.state();
    render_progress_bar(
        stdout,
        theme,
        screen.term_cols,
        screen.progress_row(),
        player.current_progress_percent(),
        player.current_progress_seconds(),
        player.total_duration_seconds(),
        state.state.is_scrubbing(),
    )?;

    let info = StatusInfo {
        state: state.state,
        speed: state.playback_speed,
        stim_index: state.stim_index,
        stim_count: player.view_data().stims().len(),
        stim_id: player.current_stim_id(),
        overview: screen.overview,
        message: screen.message.as_deref(),
    };
    render_status_bar(stdout, theme, screen.term_cols, screen.status_row(), &info)?;
    stdout.flush()?;
    Ok(())
}

/// Puts the terminal into player mode and restores it when dropped.
struct TerminalGuard;

impl TerminalGuard {
    #[cfg(not(tarpaulin_include))]
    fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        // Restore the terminal before the panic message is printed
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            original_hook(panic_info);
        }));
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = execute!(
        io::stdout(),
        cursor::Show,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}
