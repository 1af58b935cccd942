use serde_json::json;

use super::*;
use floorplan::desk::DeskStatus;

// =============================================================
// Defaults
// =============================================================

#[test]
fn no_override_uses_defaults() {
    let config = FloorplanConfig::load(None).unwrap();
    assert_eq!(config.image_src, "office_floorplan.png");
    assert_eq!(config.map_id, "map");
    assert_eq!(config.popup_id, "popup");
}

#[test]
fn builtin_desks_parse_and_mix_statuses() {
    let config = FloorplanConfig::load(None).unwrap();
    assert!(!config.desks.is_empty());
    assert!(config.desks.iter().any(|d| d.status.is_available()));
    assert!(config.desks.iter().any(|d| !d.status.is_available()));
}

#[test]
fn blank_override_is_treated_as_absent() {
    let config = FloorplanConfig::load(Some("  \n ")).unwrap();
    assert_eq!(config, FloorplanConfig::load(None).unwrap());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn override_image_keeps_other_defaults() {
    let raw = json!({ "image_src": "floor2.png" }).to_string();
    let config = FloorplanConfig::load(Some(&raw)).unwrap();
    assert_eq!(config.image_src, "floor2.png");
    assert_eq!(config.map_id, "map");
    assert_eq!(config.desks, FloorplanConfig::load(None).unwrap().desks);
}

#[test]
fn override_desks_replaces_builtin_list() {
    let raw = json!({
        "desks": [
            { "position": [10, 20], "status": "Available" },
            { "position": [30, 40], "status": "Occupied" },
        ]
    })
    .to_string();
    let config = FloorplanConfig::load(Some(&raw)).unwrap();
    assert_eq!(config.desks.len(), 2);
    assert_eq!(config.desks[0].status, DeskStatus::Available);
    assert_eq!(config.desks[1].status, DeskStatus::Other("Occupied".to_owned()));
}

#[test]
fn empty_desk_override_is_allowed() {
    let raw = json!({ "desks": [] }).to_string();
    let config = FloorplanConfig::load(Some(&raw)).unwrap();
    assert!(config.desks.is_empty());
}

// =============================================================
// Errors
// =============================================================

#[test]
fn malformed_json_is_a_parse_error() {
    let err = FloorplanConfig::load(Some("{ not json")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_key_is_rejected() {
    let raw = json!({ "imgae_src": "typo.png" }).to_string();
    assert!(matches!(FloorplanConfig::load(Some(&raw)), Err(ConfigError::Parse(_))));
}

#[test]
fn load_or_default_falls_back_on_error() {
    let config = FloorplanConfig::load_or_default(Some("[1, 2, 3]"));
    assert_eq!(config, FloorplanConfig::load(None).unwrap());
}
