//! Surface that records draw calls instead of drawing.

use super::{Ellipse, Surface};
use crate::scheme::PointStyle;

/// One recorded call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear,
    Ellipse(Ellipse, PointStyle),
}

/// Records every call made to it, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls since creation (or the last [`Self::take`]).
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Ellipses drawn since the most recent clear.
    pub fn visible(&self) -> Vec<(Ellipse, PointStyle)> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCall::Ellipse(e, s) => Some((*e, *s)),
                DrawCall::Clear => None,
            })
            .collect()
    }

    /// Number of clears recorded, i.e. frames started.
    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear))
            .count()
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn ellipse(&mut self, shape: Ellipse, style: PointStyle) {
        self.calls.push(DrawCall::Ellipse(shape, style));
    }
}
