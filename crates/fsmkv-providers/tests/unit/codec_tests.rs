//! Data codec tests

use fsmkv_providers::codec::{decode, encode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Order {
    id: u64,
    items: Vec<String>,
    shipping: Option<Address>,
    extras: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Address {
    city: String,
    zip: String,
}

#[test]
fn test_nested_record_round_trip() {
    let order = Order {
        id: 42,
        items: vec!["tea".to_string(), "scone".to_string()],
        shipping: Some(Address {
            city: "Leeds".to_string(),
            zip: "LS1".to_string(),
        }),
        extras: BTreeMap::from([("tip".to_string(), 1.5)]),
    };

    let bytes = encode(&order).unwrap();
    let decoded: Order = decode(&bytes).unwrap();
    assert_eq!(decoded, order);
}

#[test]
fn test_decode_into_wrong_shape_fails() {
    let bytes = encode(&"plain string").unwrap();
    let result: fsmkv_providers::Result<Order> = decode(&bytes);
    assert!(matches!(result, Err(fsmkv_providers::Error::Codec { .. })));
}

#[test]
fn test_decode_garbage_fails() {
    let result: fsmkv_providers::Result<u32> = decode(b"\x00\xffnot json");
    assert!(result.is_err());
}
