#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// DeskStatus
// =============================================================

#[test]
fn exact_available_string_is_available() {
    assert_eq!(DeskStatus::from("Available"), DeskStatus::Available);
    assert!(DeskStatus::from("Available").is_available());
}

#[test]
fn other_strings_are_kept_verbatim() {
    let s = DeskStatus::from("Occupied");
    assert_eq!(s, DeskStatus::Other("Occupied".to_owned()));
    assert!(!s.is_available());
    assert_eq!(s.as_str(), "Occupied");
}

#[test]
fn status_match_is_case_sensitive() {
    assert!(!DeskStatus::from("available").is_available());
    assert!(!DeskStatus::from(" Available").is_available());
}

#[test]
fn default_status_is_not_available() {
    assert!(!DeskStatus::default().is_available());
}

// =============================================================
// parse_desks
// =============================================================

#[test]
fn parse_keeps_input_order() {
    let raw = json!([
        { "position": [10.0, 20.0], "status": "Available" },
        { "position": [30.0, 40.0], "status": "Occupied" },
    ])
    .to_string();
    let desks = parse_desks(&raw).unwrap();
    assert_eq!(desks.len(), 2);
    assert_eq!(desks[0], DeskRecord::new(10.0, 20.0, "Available"));
    assert_eq!(desks[1], DeskRecord::new(30.0, 40.0, "Occupied"));
}

#[test]
fn parse_missing_status_falls_back_to_not_available() {
    let raw = json!([{ "position": [1, 2] }]).to_string();
    let desks = parse_desks(&raw).unwrap();
    assert_eq!(desks[0].status, DeskStatus::default());
    assert_eq!(desks[0].position, Point::new(1.0, 2.0));
}

#[test]
fn parse_empty_array_yields_no_desks() {
    assert!(parse_desks("[]").unwrap().is_empty());
}

#[test]
fn parse_rejects_short_position() {
    let raw = json!([{ "position": [1.0], "status": "Available" }]).to_string();
    let err = parse_desks(&raw).unwrap_err();
    assert!(matches!(err, FloorplanError::DeskData(_)));
}

#[test]
fn parse_rejects_non_array() {
    assert!(parse_desks("{\"position\": [1, 2]}").is_err());
}
