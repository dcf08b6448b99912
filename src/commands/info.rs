//! Info command handler

use std::path::Path;

use anyhow::{Context, Result};

use gazeplay::player::timing::duration_seconds;
use gazeplay::theme::{current_theme, Theme};
use gazeplay::ViewData;

/// Print a summary of a gaze data file.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path) -> Result<()> {
    let data = ViewData::load(file)
        .with_context(|| format!("Failed to load gaze data from {}", file.display()))?;
    let theme = current_theme();
    for line in summary_lines(&data, &theme) {
        println!("{}", line);
    }
    Ok(())
}

fn summary_lines(data: &ViewData, theme: &Theme) -> Vec<String> {
    let rate = data.samples_per_second();
    let mut lines = vec![
        theme.success_text(&format!(
            "{} stimuli, {} viewers, {} groups at {} Hz",
            data.stims().len(),
            data.viewers().len(),
            data.viewer_groups().len(),
            rate
        )),
        String::new(),
        theme.accent_text("Stimuli:"),
    ];

    for (index, stim) in data.stims().iter().enumerate() {
        let Some(store) = data.store(index) else {
            continue;
        };
        let gaze_len = store.gaze_len();
        let image = data
            .stim_image(stim)
            .map(|img| format!("  [{}]", img))
            .unwrap_or_default();
        lines.push(format!(
            "  {:>3}. {}  {}{}",
            index + 1,
            theme.primary_text(stim),
            theme.secondary_text(&format!(
                "{} samples, {:.2}s, {} viewings",
                gaze_len,
                duration_seconds(gaze_len, rate),
                store.viewing_count()
            )),
            theme.secondary_text(&image)
        ));
    }

    lines.push(String::new());
    lines.push(theme.accent_text("Groups:"));
    for group in data.viewer_groups() {
        let members: Vec<&str> = data
            .viewers()
            .iter()
            .filter(|(_, record)| &record.group == group)
            .map(|(id, _)| id.as_str())
            .collect();
        lines.push(format!(
            "  {}  {}",
            theme.primary_text(group),
            theme.secondary_text(&members.join(", "))
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_stimuli_and_groups() {
        let data = ViewData::from_json_str(
            r#"{
                "stims": ["beach", "city"],
                "viewers": {"006": {"group": "light"}, "007": {"group": "dark"}},
                "viewer_groups": ["light", "dark"],
                "stim_images": {"beach": "beach.png"},
                "samples_per_second": 10,
                "viewdata": {
                    "beach": {"006": [[1, 1], [2, 2], [3, 3]]},
                    "city": {"007": [[4, 4]]}
                }
            }"#,
        )
        .unwrap();
        let text = summary_lines(&data, &Theme::default()).join("\n");

        assert!(text.contains("2 stimuli, 2 viewers, 2 groups at 10 Hz"));
        assert!(text.contains("3 samples, 0.20s, 1 viewings"));
        assert!(text.contains("[beach.png]"));
        assert!(text.contains("city"));
        assert!(text.contains("006"));
    }
}
