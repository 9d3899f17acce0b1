/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use elasticinference::model::{AcceleratorTypeOffering, Filter, LocationType};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn filter_deserializes_to_an_equal_value() {
    let filter = Filter::builder()
        .name("instance-id")
        .values("i-123")
        .values("i-456")
        .build();
    let serialized = serde_json::to_value(&filter).expect("serializes");
    assert_eq!(serialized, json!({"name": "instance-id", "values": ["i-123", "i-456"]}));
    let parsed: Filter = serde_json::from_value(serialized).expect("valid");
    assert_eq!(parsed, filter);
    assert_ne!(parsed, Filter::builder().name("instance-id").values("i-123").build());
}

#[test]
fn set_values_replaces_the_list() {
    let builder = Filter::builder().values("i-123");
    assert_eq!(
        builder.clone().values("i-456").build().values,
        Some(vec!["i-123".to_string(), "i-456".to_string()])
    );
    assert_eq!(
        builder.set_values(Some(vec!["i-789".to_string()])).build().values,
        Some(vec!["i-789".to_string()])
    );
}

#[test]
fn unknown_location_type() {
    let parsed: AcceleratorTypeOffering = serde_json::from_str(
        r#"{"acceleratorType":"eia2.medium","locationType":"local-zone","location":"us-west-2-lax-1a"}"#,
    )
    .expect("valid");
    assert_eq!(
        parsed.location_type,
        Some(LocationType::Unknown("local-zone".to_string()))
    );
    assert_eq!(
        serde_json::to_value(&parsed).expect("serializes")["locationType"],
        json!("local-zone")
    );
    let mut other = parsed.clone();
    other.location_type = Some(LocationType::AvailabilityZone);
    assert_ne!(other, parsed);
}

proptest! {
    #[test]
    fn filter_roundtrip(name in "[a-z-]{1,20}", values in proptest::collection::vec("[a-z0-9-]{1,12}", 0..5)) {
        let filter = Filter::builder().name(name).set_values(Some(values)).build();
        let serialized = serde_json::to_string(&filter).expect("serializes");
        let parsed: Filter = serde_json::from_str(&serialized).expect("valid");
        prop_assert_eq!(parsed, filter);
    }
}
