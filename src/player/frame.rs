//! Draws one frame of gaze points.

use super::observer::PlayerObserver;
use super::timing::{percent_from_index, seconds_from_index};
use crate::scheme::ColorScheme;
use crate::surface::Surface;
use crate::viewdata::SampleStore;

/// Default point radius, in stimulus units.
pub const DEFAULT_POINT_RADIUS: f64 = 6.0;

/// Timeline position of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePos {
    pub index: usize,
    pub gaze_len: usize,
    pub sample_rate: f64,
}

/// Turns samples into draw calls, one styled circle per present sample.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    scheme: ColorScheme,
    point_radius: f64,
}

impl FrameRenderer {
    pub fn new(scheme: ColorScheme, point_radius: f64) -> Self {
        Self {
            scheme,
            point_radius,
        }
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn point_radius(&self) -> f64 {
        self.point_radius
    }

    pub fn set_point_radius(&mut self, radius: f64) {
        self.point_radius = radius;
    }

    /// Draw the points at `index` without clearing. Returns how many were drawn.
    ///
    /// Viewings without a sample at `index` are skipped.
    pub fn draw_points<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        store: &SampleStore<'_>,
        index: usize,
    ) -> usize {
        let mut drawn = 0;
        for sample in store.points_at(index) {
            let style = self.scheme.style(sample.group);
            surface.circle(sample.point.x, sample.point.y, self.point_radius, style);
            drawn += 1;
        }
        drawn
    }

    /// Clear the surface, draw the frame, then report its progress.
    pub fn render_frame<S, O>(
        &self,
        surface: &mut S,
        store: &SampleStore<'_>,
        pos: FramePos,
        observer: &mut O,
    ) -> usize
    where
        S: Surface + ?Sized,
        O: PlayerObserver + ?Sized,
    {
        surface.clear();
        let drawn = self.draw_points(surface, store, pos.index);
        observer.progress(
            seconds_from_index(pos.index, pos.sample_rate),
            percent_from_index(pos.index, pos.gaze_len),
        );
        drawn
    }

    /// Overlay every frame of the stimulus on one cleared surface.
    ///
    /// Shows the whole scanpath at once; progress is not reported.
    pub fn render_overview<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        store: &SampleStore<'_>,
    ) -> usize {
        surface.clear();
        (0..store.gaze_len())
            .map(|index| self.draw_points(surface, store, index))
            .sum()
    }
}
