//! Integration tests for loading view data files

use gazeplay::viewdata::{GazePoint, ViewDataError};
use gazeplay::ViewData;

use super::helpers::{load_fixture, temp_fixture};

#[test]
fn loads_session_fixture() {
    let (temp_dir, path) = temp_fixture("session.json");
    let data = ViewData::load(&path).expect("Should load session.json");

    assert_eq!(data.stims(), ["beach", "city", "blank"]);
    assert_eq!(data.viewers().len(), 3);
    assert_eq!(data.viewer_groups(), ["light_fix", "dark_fix"]);
    assert_eq!(data.samples_per_second(), 30.0);
    assert_eq!(data.stim_image("city"), Some("city.png"));
    assert_eq!(data.stim_image("blank"), None);

    drop(temp_dir);
}

#[test]
fn gaze_len_is_longest_viewing() {
    let data = ViewData::from_json_str(&load_fixture("session.json")).unwrap();
    let beach = data.store_by_id("beach").unwrap();

    // 006 has 6 samples, 007 has 3, 012 has viewings of 2 and 4
    assert_eq!(beach.gaze_len(), 6);
    assert_eq!(beach.viewing_count(), 4);
    assert_eq!(data.store_by_id("blank").unwrap().gaze_len(), 0);
}

#[test]
fn sparse_samples_are_skipped() {
    let data = ViewData::from_json_str(&load_fixture("session.json")).unwrap();
    let beach = data.store_by_id("beach").unwrap();

    // Every viewing has a sample at 0
    assert_eq!(beach.points_at(0).count(), 4);

    // At 3: 006 blinked, 007 and 012's first viewing are over
    let at_three: Vec<_> = beach.points_at(3).collect();
    assert_eq!(at_three.len(), 1);
    assert_eq!(at_three[0].viewer, "012");
    assert_eq!(at_three[0].group, "dark_fix");
    assert_eq!(at_three[0].point, GazePoint::new(13.0, 13.0));

    assert_eq!(beach.points_at(6).count(), 0);
}

#[test]
fn point_lookup_by_viewer() {
    let data = ViewData::from_json_str(&load_fixture("session.json")).unwrap();
    let beach = data.store_by_id("beach").unwrap();

    assert_eq!(beach.point_at("006", 1), Some(GazePoint::new(102.0, 121.0)));
    assert_eq!(beach.point_at("006", 3), None);
    assert_eq!(beach.point_at("nobody", 0), None);
}

#[test]
fn bounds_span_all_stimuli() {
    let data = ViewData::from_json_str(&load_fixture("session.json")).unwrap();
    assert_eq!(data.bounds(), (640.0, 480.0));
}

#[test]
fn loads_wrapped_script_with_viewer_list() {
    let (_temp_dir, path) = temp_fixture("wrapped.js");
    let data = ViewData::load(&path).expect("Should load EyeData wrapped file");

    assert_eq!(data.stims(), ["only"]);
    assert_eq!(data.viewers()["a"].group, "g");
    assert_eq!(data.store(0).unwrap().gaze_len(), 2);
}

#[test]
fn rejects_undeclared_group() {
    let err = ViewData::from_json_str(&load_fixture("undeclared_group.json")).unwrap_err();
    assert!(
        matches!(err, ViewDataError::UndeclaredGroup { ref group, .. } if group == "light_fix"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn missing_file_reports_path() {
    let err = ViewData::load("/nonexistent/path/session.json").unwrap_err();
    assert!(matches!(err, ViewDataError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/path/session.json"));
}
