use chrono::{TimeZone, Utc};
use odolog_store::{Error, Store};
use odolog_types::{PartRecord, ServiceEvent, VehicleState};
use std::fs;
use tempfile::TempDir;

fn sample_state() -> VehicleState {
    let mut state = VehicleState {
        current_mileage: 128500,
        ..Default::default()
    };
    state.parts.insert(
        "engine oil".to_string(),
        PartRecord {
            interval: 10000,
            last_change_mileage: 120000,
            notes: Some("5W-30".to_string()),
        },
    );
    state.service_log.push(ServiceEvent {
        description: "annual inspection".to_string(),
        mileage: 125000,
        cost: Some(80.0),
        details: None,
        timestamp: Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap(),
    });
    state
}

#[test]
fn missing_file_loads_as_empty_state() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("nothing_here.json"));

    let state = store.load().unwrap();
    assert_eq!(state, VehicleState::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("data.json"));

    let state = sample_state();
    store.save(&state).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, state);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("data.json"));

    store.save(&sample_state()).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["data.json".to_string()]);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("nested/deeper/data.json"));

    store.save(&sample_state()).unwrap();
    assert_eq!(store.load().unwrap(), sample_state());
}

#[test]
fn malformed_file_fails_with_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{ this is not json").unwrap();

    let err = Store::open(&path).load().unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got: {err:?}");
}

#[test]
fn wrong_shape_fails_with_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, r#"{"current_mileage": "not a number"}"#).unwrap();

    let err = Store::open(&path).load().unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got: {err:?}");
}

#[test]
fn save_overwrites_prior_content() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("data.json"));

    store.save(&sample_state()).unwrap();

    let mut updated = sample_state();
    updated.current_mileage = 130000;
    updated.parts.clear();
    store.save(&updated).unwrap();

    assert_eq!(store.load().unwrap(), updated);
}
