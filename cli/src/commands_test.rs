#![allow(clippy::float_cmp)]

use super::*;

const SAMPLE: &str = r##"{
  "boxes": [
    {"id":"a","left":0,"top":0,"width":200,"height":150,"backgroundColor":"rgb(255, 0, 0)","text":"first"},
    {"id":"b","left":400,"top":100,"width":200,"height":150,"backgroundColor":"#00ff00","text":"second"}
  ],
  "connections": [
    {"fromBoxId":"a","toBoxId":"b"},
    {"fromBoxId":"a","toBoxId":"ghost"}
  ]
}"##;

fn sample() -> Profile {
    Profile::from_json(SAMPLE).unwrap()
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("linkboard-cli-{}-{name}", std::process::id()))
}

// =============================================================
// inspect
// =============================================================

#[test]
fn inspect_counts_everything() {
    let report = inspect(&sample());
    assert_eq!(report.boxes, 2);
    assert_eq!(report.connections, 2);
    assert_eq!(report.dangling, 1);
    assert_eq!(report.extent.width, 700.0);
    assert_eq!(report.extent.height, 350.0);
}

#[test]
fn inspect_display_lists_fields() {
    let text = inspect(&sample()).to_string();
    assert!(text.contains("boxes:       2"));
    assert!(text.contains("connections: 2 (1 dangling)"));
    assert!(text.contains("extent:      700 x 350"));
}

#[test]
fn inspect_empty_profile() {
    let report = inspect(&Profile::default());
    assert_eq!(report.boxes, 0);
    assert_eq!(report.extent.width, 100.0);
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_flags_dangling_connection() {
    let report = validate(&sample());
    assert!(!report.is_ok());
    assert_eq!(report.problem_count(), 1);
    assert_eq!(report.dangling[0].to_box_id, "ghost");
    assert!(report.to_string().contains("dangling connection: a -> ghost"));
}

#[test]
fn validate_flags_duplicate_ids_once() {
    let mut profile = sample();
    profile.connections.clear();
    let copy = profile.boxes[0].clone();
    profile.boxes.push(copy.clone());
    profile.boxes.push(copy);
    let report = validate(&profile);
    assert_eq!(report.duplicate_ids, vec!["a".to_owned()]);
    assert_eq!(report.problem_count(), 1);
}

#[test]
fn validate_warns_on_unknown_colors_without_failing() {
    let mut profile = sample();
    profile.connections.truncate(1);
    profile.boxes[1].background_color = "papayawhip".to_owned();
    let report = validate(&profile);
    assert!(report.is_ok());
    assert_eq!(report.unknown_colors, vec![("b".to_owned(), "papayawhip".to_owned())]);
    let text = report.to_string();
    assert!(text.contains("warning: box b"));
    assert!(text.ends_with("ok\n"));
}

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_drops_dangling_and_canonicalizes_colors() {
    let (normalized, stats) = normalize(sample());
    assert_eq!(stats, NormalizeStats { dropped_connections: 1, recolored_boxes: 1 });
    assert_eq!(normalized.connections.len(), 1);
    assert_eq!(normalized.boxes[0].background_color, "#ff0000");
    assert_eq!(normalized.boxes[1].background_color, "#00ff00");
    assert!(validate(&normalized).is_ok());
}

#[test]
fn normalize_keeps_colors_without_hex_form() {
    let mut profile = sample();
    profile.boxes[0].background_color = "hsl(0, 100%, 50%)".to_owned();
    profile.boxes[1].background_color = "rgba(255, 0, 0, 0.2)".to_owned();
    let (normalized, stats) = normalize(profile);
    assert_eq!(normalized.boxes[0].background_color, "hsl(0, 100%, 50%)");
    assert_eq!(normalized.boxes[1].background_color, "rgba(255, 0, 0, 0.2)");
    assert_eq!(stats.recolored_boxes, 0);
}

#[test]
fn normalize_flattens_fully_opaque_rgba() {
    let mut profile = sample();
    profile.boxes[1].background_color = "rgba(0, 0, 255, 1)".to_owned();
    let (normalized, stats) = normalize(profile);
    assert_eq!(normalized.boxes[1].background_color, "#0000ff");
    assert_eq!(stats.recolored_boxes, 2);
}

#[test]
fn normalize_is_idempotent() {
    let (once, _) = normalize(sample());
    let (twice, stats) = normalize(once.clone());
    assert_eq!(once, twice);
    assert_eq!(stats, NormalizeStats::default());
}

// =============================================================
// file I/O
// =============================================================

#[test]
fn read_profile_reports_missing_file() {
    let err = read_profile(&temp_path("missing.json")).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}

#[test]
fn read_profile_reports_bad_json() {
    let path = temp_path("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = read_profile(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, CliError::Profile { .. }));
}

#[test]
fn write_then_read_round_trips() {
    let path = temp_path("roundtrip.json");
    let (normalized, _) = normalize(sample());
    write_output(Some(&path), &normalized.to_json_pretty().unwrap()).unwrap();
    let back = read_profile(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back, normalized);
}
