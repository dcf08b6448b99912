//! Gaze canvas rendering for the native player.
//!
//! Writes the rasterized gaze points above the progress and status lines.

use std::io::{self, Write};

use anyhow::Result;

use crate::surface::CellCanvas;

/// Render the canvas to stdout starting at the top row.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `canvas` - The rasterized frame
pub fn render_canvas(stdout: &mut io::Stdout, canvas: &CellCanvas) -> Result<()> {
    // Build output string to minimize syscalls
    let mut output = String::with_capacity(canvas.cols() * canvas.rows() * 2);
    canvas.render_ansi(&mut output, 0);
    write!(stdout, "{}", output)?;
    Ok(())
}
