//! Drawing surfaces for gaze overlays.
//!
//! The player only needs two primitives from a surface: clear everything, and
//! draw a filled, outlined ellipse. Coordinates are stimulus coordinates (the
//! space the eye tracker recorded in); each surface maps them to its own
//! output.
//!
//! - [`CellCanvas`]: rasterizes into a terminal character grid
//! - [`RecordingSurface`]: records the calls, for headless hosts and tests

mod canvas;
mod recording;

pub use canvas::{Cell, CellCanvas};
pub use recording::{DrawCall, RecordingSurface};

use crate::scheme::PointStyle;

/// An axis-aligned ellipse in stimulus coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            rx: r,
            ry: r,
        }
    }
}

/// Immediate-mode 2D drawing target.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw a filled ellipse with an outline.
    fn ellipse(&mut self, shape: Ellipse, style: PointStyle);

    /// Draw a filled circle with an outline.
    fn circle(&mut self, cx: f64, cy: f64, r: f64, style: PointStyle) {
        self.ellipse(Ellipse::circle(cx, cy, r), style);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn ellipse(&mut self, shape: Ellipse, style: PointStyle) {
        (**self).ellipse(shape, style);
    }
}
