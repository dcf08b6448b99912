//! Per-group point styles.
//!
//! Each viewer group gets one fill/stroke pair. Styles are handed out in
//! group declaration order, cycling through the palette when there are more
//! groups than palette entries.

use std::collections::HashMap;

use ratatui::style::Color;

/// Fill and stroke colors for one group's gaze points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointStyle {
    pub fill: Color,
    pub stroke: Color,
}

impl PointStyle {
    pub const fn new(fill: Color, stroke: Color) -> Self {
        Self { fill, stroke }
    }
}

/// Built-in palette, light fill with a darker outline.
pub const DEFAULT_PALETTE: &[PointStyle] = &[
    PointStyle::new(Color::LightGreen, Color::Green),
    PointStyle::new(Color::LightMagenta, Color::Magenta),
    PointStyle::new(Color::LightCyan, Color::Cyan),
    PointStyle::new(Color::LightYellow, Color::Yellow),
    PointStyle::new(Color::LightRed, Color::Red),
    PointStyle::new(Color::LightBlue, Color::Blue),
];

/// Used for points whose group has no assigned style.
const FALLBACK_STYLE: PointStyle = PointStyle::new(Color::White, Color::Gray);

/// Mapping from group id to point style.
#[derive(Debug, Clone, Default)]
pub struct ColorScheme {
    styles: HashMap<String, PointStyle>,
}

impl ColorScheme {
    /// Assign palette entries to `groups` in order.
    ///
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn for_groups(groups: &[String], palette: &[PointStyle]) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE
        } else {
            palette
        };
        let styles = groups
            .iter()
            .zip(palette.iter().cycle())
            .map(|(group, style)| (group.clone(), *style))
            .collect();
        Self { styles }
    }

    /// Style for a group, or a neutral fallback for unknown groups.
    pub fn style(&self, group: &str) -> PointStyle {
        self.styles.get(group).copied().unwrap_or(FALLBACK_STYLE)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Parse a color name (`"lightgreen"`, `"#ff8800"`, `"236"`).
pub fn parse_color(name: &str) -> Option<Color> {
    name.parse::<Color>().ok()
}
