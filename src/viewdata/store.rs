//! Read-only per-stimulus view of the recorded samples.

use std::collections::BTreeMap;

use super::{GazePoint, Viewing, ViewerRecord};

/// A present sample together with who recorded it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSample<'a> {
    pub viewer: &'a str,
    pub group: &'a str,
    pub point: GazePoint,
}

/// Samples of every viewer for a single stimulus.
#[derive(Debug, Clone, Copy)]
pub struct SampleStore<'a> {
    stim_id: &'a str,
    per_viewer: &'a BTreeMap<String, Vec<Viewing>>,
    viewers: &'a BTreeMap<String, ViewerRecord>,
}

impl<'a> SampleStore<'a> {
    pub(super) fn new(
        stim_id: &'a str,
        per_viewer: &'a BTreeMap<String, Vec<Viewing>>,
        viewers: &'a BTreeMap<String, ViewerRecord>,
    ) -> Self {
        Self {
            stim_id,
            per_viewer,
            viewers,
        }
    }

    pub fn stim_id(&self) -> &'a str {
        self.stim_id
    }

    /// Longest viewing for this stimulus, i.e. the length of its timeline.
    ///
    /// Scans every viewing once.
    pub fn gaze_len(&self) -> usize {
        self.per_viewer
            .values()
            .flatten()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    /// Number of viewings across all viewers.
    pub fn viewing_count(&self) -> usize {
        self.per_viewer.values().map(Vec::len).sum()
    }

    /// Sample of a viewer's first viewing at `index`.
    ///
    /// `None` when the viewer is unknown, the index is past the end of the
    /// recording, or the sample itself is absent. Sparse data is expected.
    pub fn point_at(&self, viewer: &str, index: usize) -> Option<GazePoint> {
        self.per_viewer
            .get(viewer)?
            .first()?
            .get(index)
            .copied()
            .flatten()
    }

    /// Every present sample at `index`, one per viewing, in viewer id order.
    pub fn points_at(&self, index: usize) -> impl Iterator<Item = PlacedSample<'a>> + 'a {
        let viewers = self.viewers;
        let per_viewer = self.per_viewer;
        per_viewer.iter().flat_map(move |(viewer, viewings)| {
            let group = viewers
                .get(viewer)
                .map(|r| r.group.as_str())
                .unwrap_or_default();
            viewings.iter().filter_map(move |viewing| {
                let point = viewing.get(index).copied().flatten()?;
                Some(PlacedSample {
                    viewer: viewer.as_str(),
                    group,
                    point,
                })
            })
        })
    }
}
