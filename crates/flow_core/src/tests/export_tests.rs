use super::*;

use chrono::{TimeZone, Utc};

fn sample_timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 0)
        .single()
        .expect("timestamp")
}

#[test]
fn exported_json_round_trips() {
    let mut matches = std::collections::BTreeMap::new();
    matches.insert("Didaktik".to_string(), "Projekt Lehrkonzepte".to_string());
    matches.insert("KI".to_string(), "Lernassistent/Analytics".to_string());

    let export = ProfileExport::new(3, matches.clone(), sample_timestamp());
    let rendered = export.render_json().expect("render");

    let parsed: ProfileExport = serde_json::from_str(&rendered).expect("parse");
    assert_eq!(parsed.quiz_score, 3);
    assert_eq!(parsed.matches, matches);
    assert_eq!(parsed.timestamp, export.timestamp);
}

#[test]
fn empty_matches_serialize_as_an_empty_object() {
    let export = ProfileExport::new(3, Default::default(), sample_timestamp());
    let rendered = export.render_json().expect("render");

    let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse");
    assert_eq!(value["quizScore"], 3);
    assert_eq!(value["matches"], serde_json::json!({}));
}

#[test]
fn document_has_exactly_three_top_level_keys() {
    let export = ProfileExport::new(0, Default::default(), sample_timestamp());
    let rendered = export.render_json().expect("render");

    let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("quizScore"));
    assert!(object.contains_key("matches"));
    assert!(object.contains_key("timestamp"));
}

#[test]
fn timestamp_renders_as_a_valid_iso_8601_string() {
    let export = ProfileExport::new(1, Default::default(), sample_timestamp());
    let rendered = export.render_json().expect("render");

    let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse");
    let raw = value["timestamp"].as_str().expect("timestamp string");
    chrono::DateTime::parse_from_rfc3339(raw).expect("iso-8601 timestamp");
}

#[test]
fn rendering_uses_two_space_indentation() {
    let export = ProfileExport::new(2, Default::default(), sample_timestamp());
    let rendered = export.render_json().expect("render");

    assert!(rendered.lines().any(|line| line.starts_with("  \"quizScore\"")));
}

#[test]
fn export_file_name_is_fixed() {
    assert_eq!(EXPORT_FILE_NAME, "bewerbung-profile-notizen.json");
}
