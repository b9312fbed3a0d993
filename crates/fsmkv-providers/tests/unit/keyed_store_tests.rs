//! Keyed state store tests over the in-memory backend

use fsmkv_domain::{FsmStorage, State, StorageKey};
use fsmkv_providers::kv::MemoryKeyValueStore;
use fsmkv_providers::storage::{KeyedStateStore, StorageSettings};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    age: u32,
    tags: Vec<String>,
    address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Address {
    city: String,
    lines: Vec<String>,
}

fn storage(settings: StorageSettings) -> (KeyedStateStore, Arc<MemoryKeyValueStore>) {
    let backend = Arc::new(MemoryKeyValueStore::new());
    (KeyedStateStore::new(backend.clone(), settings), backend)
}

fn identity() -> StorageKey {
    StorageKey::new(10, -100, 7)
}

#[tokio::test]
async fn test_state_defaults_when_absent() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();

    let state = storage.state(&ctx, identity()).await.unwrap();
    assert!(state.is_default());
    assert_eq!(state, State::DEFAULT);
}

#[tokio::test]
async fn test_set_then_get_state() {
    let (storage, backend) = storage(StorageSettings::default().with_prefix("test"));
    let ctx = CancellationToken::new();

    storage
        .set_state(&ctx, identity(), State::new("awaiting_name"))
        .await
        .unwrap();

    let state = storage.state(&ctx, identity()).await.unwrap();
    assert_eq!(state.as_str(), "awaiting_name");
    assert_eq!(backend.keys(), vec!["test:10:-100:7:state".to_string()]);
}

#[tokio::test]
async fn test_threads_are_isolated() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();
    let threaded = identity().with_thread(3);

    storage
        .set_state(&ctx, threaded, State::new("in_thread"))
        .await
        .unwrap();

    assert!(storage.state(&ctx, identity()).await.unwrap().is_default());
    assert_eq!(
        storage.state(&ctx, threaded).await.unwrap(),
        State::new("in_thread")
    );
}

#[tokio::test]
async fn test_data_round_trip_representative_values() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();
    let key = identity();

    storage.set_data(&ctx, key, "int", Some(&-42_i64)).await.unwrap();
    storage.set_data(&ctx, key, "float", Some(&2.5_f64)).await.unwrap();
    storage
        .set_data(&ctx, key, "text", Some(&"hello".to_string()))
        .await
        .unwrap();
    let profile = Profile {
        name: "Ada".to_string(),
        age: 36,
        tags: vec!["math".to_string(), "engines".to_string()],
        address: Address {
            city: "London".to_string(),
            lines: vec!["12 St James's Square".to_string()],
        },
    };
    storage
        .set_data(&ctx, key, "profile", Some(&profile))
        .await
        .unwrap();

    let int: i64 = storage.data(&ctx, key, "int").await.unwrap();
    let float: f64 = storage.data(&ctx, key, "float").await.unwrap();
    let text: String = storage.data(&ctx, key, "text").await.unwrap();
    let decoded: Profile = storage.data(&ctx, key, "profile").await.unwrap();

    assert_eq!(int, -42);
    assert!((float - 2.5).abs() < f64::EPSILON);
    assert_eq!(text, "hello");
    assert_eq!(decoded, profile);
}

#[tokio::test]
async fn test_missing_data_is_not_found() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();

    let err = storage
        .data::<String>(&ctx, identity(), "missing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.operation(), None);
}

#[tokio::test]
async fn test_set_data_none_deletes_entry() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();
    let key = identity();

    storage.set_data(&ctx, key, "k", Some(&1_u8)).await.unwrap();
    storage.set_data::<u8>(&ctx, key, "k", None).await.unwrap();

    let err = storage.data::<u8>(&ctx, key, "k").await.unwrap_err();
    assert!(err.is_not_found());

    // Deleting an absent entry is not an error
    storage.delete_data(&ctx, key, "k").await.unwrap();
}

#[tokio::test]
async fn test_data_or_default() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();
    let key = identity();

    let count: u32 = storage.data_or_default(&ctx, key, "count").await.unwrap();
    assert_eq!(count, 0);

    storage.set_data(&ctx, key, "count", Some(&3_u32)).await.unwrap();
    let count: u32 = storage.data_or_default(&ctx, key, "count").await.unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_data_named_state_does_not_touch_state() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();
    let key = identity();

    storage.set_state(&ctx, key, State::new("real")).await.unwrap();
    storage
        .set_data(&ctx, key, "state", Some(&"shadow".to_string()))
        .await
        .unwrap();

    assert_eq!(storage.state(&ctx, key).await.unwrap(), State::new("real"));
    let shadow: String = storage.data(&ctx, key, "state").await.unwrap();
    assert_eq!(shadow, "shadow");
}

#[tokio::test]
async fn test_reset_state_without_data_keeps_data() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();
    let key = identity();

    storage.set_state(&ctx, key, State::new("step")).await.unwrap();
    storage.set_data(&ctx, key, "k", Some(&1_u8)).await.unwrap();

    storage.reset_state(&ctx, key, false).await.unwrap();

    assert!(storage.state(&ctx, key).await.unwrap().is_default());
    let value: u8 = storage.data(&ctx, key, "k").await.unwrap();
    assert_eq!(value, 1);
}

#[tokio::test]
async fn test_reset_state_removes_state_record() {
    let (storage, backend) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();

    storage
        .set_state(&ctx, identity(), State::new("step"))
        .await
        .unwrap();
    storage.reset_state(&ctx, identity(), false).await.unwrap();

    assert!(backend.is_empty());
}

#[tokio::test]
async fn test_reset_with_data_only_touches_own_identity() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();
    let key = identity();
    let other = StorageKey::new(10, -100, 8);
    let threaded = key.with_thread(2);

    for name in ["a", "b", "c", "state"] {
        storage.set_data(&ctx, key, name, Some(&name)).await.unwrap();
        storage.set_data(&ctx, other, name, Some(&name)).await.unwrap();
        storage
            .set_data(&ctx, threaded, name, Some(&name))
            .await
            .unwrap();
    }
    storage.set_state(&ctx, other, State::new("kept")).await.unwrap();

    storage.reset_state(&ctx, key, true).await.unwrap();

    for name in ["a", "b", "c", "state"] {
        let err = storage.data::<String>(&ctx, key, name).await.unwrap_err();
        assert!(err.is_not_found(), "{name} survived reset");

        let kept: String = storage.data(&ctx, other, name).await.unwrap();
        assert_eq!(kept, name);
        let kept: String = storage.data(&ctx, threaded, name).await.unwrap();
        assert_eq!(kept, name);
    }
    assert_eq!(storage.state(&ctx, other).await.unwrap(), State::new("kept"));
}

#[tokio::test]
async fn test_reset_pages_through_more_entries_than_one_batch() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let storage = KeyedStateStore::new(
        backend.clone(),
        StorageSettings::default().with_reset_batch_size(3),
    );
    let ctx = CancellationToken::new();
    let key = identity();

    for i in 0..50 {
        storage
            .set_data(&ctx, key, &format!("entry-{i}"), Some(&i))
            .await
            .unwrap();
    }
    storage
        .set_data(&ctx, StorageKey::new(1, 1, 1), "unrelated", Some(&0))
        .await
        .unwrap();

    storage.reset_state(&ctx, key, true).await.unwrap();

    for i in 0..50 {
        let err = storage
            .data::<i32>(&ctx, key, &format!("entry-{i}"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
    assert_eq!(backend.keys(), vec!["fsm:1:1:1:data:unrelated".to_string()]);
}

#[tokio::test]
async fn test_reset_with_glob_characters_in_prefix() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let wild = KeyedStateStore::new(
        backend.clone(),
        StorageSettings::default().with_prefix("b*"),
    );
    let neighbour = KeyedStateStore::new(
        backend.clone(),
        StorageSettings::default().with_prefix("bot"),
    );
    let ctx = CancellationToken::new();
    let key = identity();

    wild.set_data(&ctx, key, "x", Some(&1)).await.unwrap();
    neighbour.set_data(&ctx, key, "x", Some(&2)).await.unwrap();

    wild.reset_state(&ctx, key, true).await.unwrap();

    assert_eq!(backend.keys(), vec!["bot:10:-100:7:data:x".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_ttls_are_applied_per_record_kind() {
    let (storage, _) = storage(
        StorageSettings::default()
            .with_state_ttl(Duration::from_secs(10))
            .with_data_ttl(Duration::from_secs(60)),
    );
    let ctx = CancellationToken::new();
    let key = identity();

    storage.set_state(&ctx, key, State::new("s")).await.unwrap();
    storage.set_data(&ctx, key, "d", Some(&1)).await.unwrap();

    tokio::time::advance(Duration::from_secs(11)).await;
    assert!(storage.state(&ctx, key).await.unwrap().is_default());
    let value: i32 = storage.data(&ctx, key, "d").await.unwrap();
    assert_eq!(value, 1);

    tokio::time::advance(Duration::from_secs(50)).await;
    assert!(
        storage
            .data::<i32>(&ctx, key, "d")
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[tokio::test]
async fn test_empty_prefix_falls_back_to_default() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let settings = StorageSettings {
        prefix: String::new(),
        ..StorageSettings::default()
    };
    let storage = KeyedStateStore::new(backend.clone(), settings);

    assert_eq!(storage.settings().prefix, "fsm");
}

#[tokio::test]
async fn test_zero_settings_assigned_directly_mean_unset() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let settings = StorageSettings {
        state_ttl: Some(Duration::ZERO),
        data_ttl: Some(Duration::ZERO),
        reset_batch_size: Some(0),
        ..StorageSettings::default()
    };
    let storage = KeyedStateStore::new(backend.clone(), settings);
    let ctx = CancellationToken::new();
    let key = identity();

    assert_eq!(storage.settings().state_ttl, None);
    assert_eq!(storage.settings().data_ttl, None);
    assert_eq!(storage.settings().reset_batch_size, None);

    storage.set_state(&ctx, key, State::new("s")).await.unwrap();
    storage.set_data(&ctx, key, "k", Some(&1_u8)).await.unwrap();

    assert_eq!(storage.state(&ctx, key).await.unwrap(), State::new("s"));
    let value: u8 = storage.data(&ctx, key, "k").await.unwrap();
    assert_eq!(value, 1);

    storage.reset_state(&ctx, key, true).await.unwrap();
    assert!(backend.is_empty());
}

#[tokio::test]
async fn test_close_releases_backend() {
    let (storage, _) = storage(StorageSettings::default());
    let ctx = CancellationToken::new();

    storage.close().await.unwrap();

    let err = storage.state(&ctx, identity()).await.unwrap_err();
    assert_eq!(
        err.operation(),
        Some(fsmkv_domain::StorageOperation::GetState)
    );
}
