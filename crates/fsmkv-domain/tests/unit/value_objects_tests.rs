//! Unit tests for domain value objects

use fsmkv_domain::{RecordKind, State, StorageKey};

#[test]
fn test_storage_key_thread() {
    let key = StorageKey::new(1, 2, 3);
    assert!(!key.has_thread());
    assert_eq!(key.thread_id, 0);

    let threaded = key.with_thread(9);
    assert!(threaded.has_thread());
    assert_ne!(key, threaded);
}

#[test]
fn test_storage_key_display() {
    assert_eq!(StorageKey::new(1, -2, 3).to_string(), "1/-2/3");
    assert_eq!(StorageKey::new(1, -2, 3).with_thread(4).to_string(), "1/-2/3#4");
}

#[test]
fn test_storage_key_deserializes_without_thread() {
    let key: StorageKey =
        serde_json::from_str(r#"{"bot_id":1,"chat_id":2,"user_id":3}"#).unwrap();
    assert_eq!(key, StorageKey::new(1, 2, 3));
}

#[test]
fn test_state_default() {
    assert!(State::default().is_default());
    assert_eq!(State::default(), State::DEFAULT);
    assert!(!State::new("step").is_default());
}

#[test]
fn test_state_conversions() {
    let state = State::from("awaiting_email");
    assert_eq!(state.as_str(), "awaiting_email");
    assert_eq!(state.to_string(), "awaiting_email");
    assert_eq!(State::from(String::from("x")).into_inner(), "x");
    assert_eq!(serde_json::to_string(&state).unwrap(), r#""awaiting_email""#);
}

#[test]
fn test_record_kind_tags() {
    assert_eq!(RecordKind::State.as_str(), "state");
    assert_eq!(RecordKind::Data.as_str(), "data");
    assert_eq!(RecordKind::ALL.len(), 2);
    assert_eq!(RecordKind::Data.to_string(), "data");
}
