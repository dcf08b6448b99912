//! Recorded gaze data for a viewing session.
//!
//! A [`ViewData`] file holds, for every stimulus shown during a session, the
//! gaze samples of every viewer who saw it. It is loaded once and never
//! mutated; playback reads it through a per-stimulus [`SampleStore`].
//!
//! # File format
//!
//! ```json
//! {
//!   "stims": ["beach", "city"],
//!   "viewers": {"006": {"group": "light_fix"}, "007": {"group": "dark_fix"}},
//!   "viewer_groups": ["light_fix", "dark_fix"],
//!   "stim_images": {"beach": "beach.png"},
//!   "samples_per_second": 60,
//!   "viewdata": {
//!     "beach": {"006": [[10, 20], [11, 21], null], "007": [[300, 40]]},
//!     "city": {"006": [[[5, 5], [6, 6]], [[50, 50]]]}
//!   }
//! }
//! ```
//!
//! A viewer's samples are either one array of `[x, y]` / `null` entries or a
//! list of such arrays (one per viewing). The viewer table may also be given
//! as a list of `{"name": ..., "group": ...}` records, and the whole document
//! may be wrapped as `EyeData = {...};`.

mod error;
mod store;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ViewDataError;
pub use store::{PlacedSample, SampleStore};

/// A single gaze position in stimulus coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GazePoint {
    pub x: f64,
    pub y: f64,
}

impl GazePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for GazePoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<GazePoint> for [f64; 2] {
    fn from(p: GazePoint) -> Self {
        [p.x, p.y]
    }
}

/// One recorded sample: a point, or nothing (blink, track loss, padding).
pub type Sample = Option<GazePoint>;

/// The samples of one viewing of one stimulus by one viewer.
pub type Viewing = Vec<Sample>;

/// Per-viewer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerRecord {
    pub group: String,
}

/// Viewer table as written on disk: a map keyed by viewer id, or a list of
/// named records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawViewers {
    Map(BTreeMap<String, ViewerRecord>),
    List(Vec<NamedViewer>),
}

#[derive(Debug, Deserialize)]
struct NamedViewer {
    name: String,
    group: String,
}

/// A viewer's samples as written on disk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawViewings {
    Single(Viewing),
    Multiple(Vec<Viewing>),
}

#[derive(Debug, Deserialize)]
struct RawViewData {
    stims: Vec<String>,
    viewers: RawViewers,
    viewer_groups: Vec<String>,
    #[serde(default)]
    stim_images: HashMap<String, String>,
    samples_per_second: f64,
    viewdata: HashMap<String, BTreeMap<String, RawViewings>>,
}

/// Immutable gaze data for every stimulus of a session.
#[derive(Debug, Clone)]
pub struct ViewData {
    stims: Vec<String>,
    viewers: BTreeMap<String, ViewerRecord>,
    viewer_groups: Vec<String>,
    stim_images: HashMap<String, String>,
    samples_per_second: f64,
    viewdata: HashMap<String, BTreeMap<String, Vec<Viewing>>>,
}

impl ViewData {
    /// Load and validate view data from a JSON (or `EyeData = ...` wrapped) file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewDataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ViewDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            stims = data.stims.len(),
            viewers = data.viewers.len(),
            "loaded view data"
        );
        Ok(data)
    }

    /// Parse and validate view data from a string.
    pub fn from_json_str(content: &str) -> Result<Self, ViewDataError> {
        let raw: RawViewData = serde_json::from_str(strip_js_wrapper(content))?;

        let viewers = match raw.viewers {
            RawViewers::Map(map) => map,
            RawViewers::List(list) => list
                .into_iter()
                .map(|v| (v.name, ViewerRecord { group: v.group }))
                .collect(),
        };

        let viewdata = raw
            .viewdata
            .into_iter()
            .map(|(stim, per_viewer)| {
                let per_viewer = per_viewer
                    .into_iter()
                    .map(|(viewer, viewings)| {
                        let viewings = match viewings {
                            RawViewings::Single(v) => vec![v],
                            RawViewings::Multiple(vs) => vs,
                        };
                        (viewer, viewings)
                    })
                    .collect();
                (stim, per_viewer)
            })
            .collect();

        Self::new(
            raw.stims,
            viewers,
            raw.viewer_groups,
            raw.stim_images,
            raw.samples_per_second,
            viewdata,
        )
    }

    /// Build view data from already-parsed parts, validating cross references.
    pub fn new(
        stims: Vec<String>,
        viewers: BTreeMap<String, ViewerRecord>,
        viewer_groups: Vec<String>,
        stim_images: HashMap<String, String>,
        samples_per_second: f64,
        viewdata: HashMap<String, BTreeMap<String, Vec<Viewing>>>,
    ) -> Result<Self, ViewDataError> {
        let data = Self {
            stims,
            viewers,
            viewer_groups,
            stim_images,
            samples_per_second,
            viewdata,
        };
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<(), ViewDataError> {
        if !(self.samples_per_second.is_finite() && self.samples_per_second > 0.0) {
            return Err(ViewDataError::InvalidSampleRate(self.samples_per_second));
        }
        if self.stims.is_empty() {
            return Err(ViewDataError::NoStimuli);
        }

        for (viewer, record) in &self.viewers {
            if !self.viewer_groups.contains(&record.group) {
                return Err(ViewDataError::UndeclaredGroup {
                    viewer: viewer.clone(),
                    group: record.group.clone(),
                });
            }
        }

        for stim in &self.stims {
            let per_viewer = self
                .viewdata
                .get(stim)
                .ok_or_else(|| ViewDataError::UnknownStimulus(stim.clone()))?;
            if let Some(viewer) = per_viewer.keys().find(|v| !self.viewers.contains_key(*v)) {
                return Err(ViewDataError::UnknownViewer {
                    stim: stim.clone(),
                    viewer: viewer.clone(),
                });
            }
        }

        for group in &self.viewer_groups {
            if !self.viewers.values().any(|r| &r.group == group) {
                tracing::warn!(group = %group, "viewer group has no viewers");
            }
        }

        Ok(())
    }

    /// Ordered stimulus ids.
    pub fn stims(&self) -> &[String] {
        &self.stims
    }

    /// Viewer table, ordered by viewer id.
    pub fn viewers(&self) -> &BTreeMap<String, ViewerRecord> {
        &self.viewers
    }

    /// Declared viewer groups, in style-assignment order.
    pub fn viewer_groups(&self) -> &[String] {
        &self.viewer_groups
    }

    /// Sample rate shared by every recording in the session.
    pub fn samples_per_second(&self) -> f64 {
        self.samples_per_second
    }

    /// Image file name for a stimulus, if the exporter recorded one.
    pub fn stim_image(&self, stim: &str) -> Option<&str> {
        self.stim_images.get(stim).map(String::as_str)
    }

    /// Largest x and y over every sample of every stimulus, at least 1.
    ///
    /// Stimulus images are not read, so this is the extent hosts use to
    /// scale coordinates when no explicit one is configured.
    pub fn bounds(&self) -> (f64, f64) {
        self.viewdata
            .values()
            .flat_map(|per_viewer| per_viewer.values())
            .flatten()
            .flatten()
            .flatten()
            .fold((1.0_f64, 1.0_f64), |(w, h), p| (w.max(p.x), h.max(p.y)))
    }

    /// Sample store for the stimulus at `index` in [`Self::stims`].
    ///
    /// Returns `None` if the index is out of range.
    pub fn store(&self, index: usize) -> Option<SampleStore<'_>> {
        let stim = self.stims.get(index)?;
        let per_viewer = self.viewdata.get(stim)?;
        Some(SampleStore::new(stim, per_viewer, &self.viewers))
    }

    /// Sample store for a stimulus by id.
    pub fn store_by_id(&self, stim: &str) -> Result<SampleStore<'_>, ViewDataError> {
        let (id, per_viewer) = self
            .viewdata
            .get_key_value(stim)
            .ok_or_else(|| ViewDataError::UnknownStimulus(stim.to_string()))?;
        Ok(SampleStore::new(id, per_viewer, &self.viewers))
    }
}

/// Strip an optional `EyeData = ...;` JavaScript assignment around the JSON body.
fn strip_js_wrapper(content: &str) -> &str {
    let trimmed = content.trim();
    let body = match trimmed.strip_prefix("EyeData") {
        Some(rest) => rest.trim_start().strip_prefix('=').unwrap_or(rest),
        None => trimmed,
    };
    body.trim().trim_end_matches(';').trim_end()
}
