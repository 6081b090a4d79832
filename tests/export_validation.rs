//! Integration tests for export pre-flight validation and output.

use std::path::PathBuf;

use eventcatalog::core::event_record::{CategoryRef, CulturalEvent};
use eventcatalog::export::csv_export::export_csv;
use eventcatalog::export::json_export::export_json;
use eventcatalog::export::validate_export_path;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("eventcatalog_{}_{name}", std::process::id()))
}

fn sample() -> Vec<CulturalEvent> {
    vec![
        CulturalEvent {
            id: Some(1),
            name_left: Some("Poetry night".into()),
            description_table_left: Some("Arabic poetry".into()),
            city_left: Some("Yerevan".into()),
            navigation_category: Some(CategoryRef {
                id: Some(2),
                name: Some("Literature".into()),
            }),
            publish: true,
            ..Default::default()
        },
        CulturalEvent {
            id: Some(2),
            name_right: Some("أمسية".into()),
            ..Default::default()
        },
    ]
}

#[test]
fn validate_export_path_valid_directory() {
    let path = temp_file("export.csv");
    let result = validate_export_path(&path);
    assert!(result.is_ok(), "Temp dir should be writable: {result:?}");
}

#[test]
fn validate_export_path_nonexistent_directory() {
    let path = std::env::temp_dir()
        .join("eventcatalog_no_such_dir_12345")
        .join("output.csv");
    let result = validate_export_path(&path);
    assert!(result.is_err(), "Non-existent dir should fail");
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("does not exist"), "Should indicate dir missing: {msg}");
}

#[test]
fn validate_export_path_rejects_directory() {
    let result = validate_export_path(&std::env::temp_dir());
    assert!(result.is_err(), "A directory is not an export target");
}

#[test]
fn validate_export_path_bare_file_name() {
    // Relative to the working directory, which exists.
    assert!(validate_export_path(&PathBuf::from("just_a_filename.csv")).is_ok());
}

#[test]
fn csv_export_writes_header_and_rows() {
    let rows = sample();
    let refs: Vec<&CulturalEvent> = rows.iter().collect();
    let path = temp_file("rows.csv");
    export_csv(&refs, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two rows: {text}");
    assert!(lines[0].starts_with("Name,"));
    assert!(lines[1].contains("Poetry night"));
    assert!(lines[1].contains("Literature"));
    assert!(lines[2].contains("أمسية"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn json_export_round_trips_events() {
    let rows = sample();
    let refs: Vec<&CulturalEvent> = rows.iter().collect();
    let path = temp_file("rows.json");
    export_json(&refs, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<CulturalEvent> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, rows);
    let _ = std::fs::remove_file(&path);
}
