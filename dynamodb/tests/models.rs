/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use dynamodb::model::{AttributeValue, KeySchemaElement, KeyType, TableDescription, TableStatus};
use proptest::prelude::*;
use serde_json::json;
use smithy_types::{Blob, Instant};
use std::collections::HashMap;

fn attribute_value() -> impl Strategy<Value = AttributeValue> {
    let leaf = prop_oneof![
        ".*".prop_map(AttributeValue::S),
        any::<i64>().prop_map(|n| AttributeValue::N(n.to_string())),
        proptest::collection::vec(any::<u8>(), 0..16)
            .prop_map(|bytes| AttributeValue::B(Blob::new(bytes))),
        proptest::collection::vec("[a-z]{0,8}", 0..4).prop_map(AttributeValue::Ss),
        proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..8), 0..4)
            .prop_map(|items| AttributeValue::Bs(items.into_iter().map(Blob::new).collect())),
        any::<bool>().prop_map(AttributeValue::Bool),
        Just(AttributeValue::Null(true)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(AttributeValue::L),
            proptest::collection::hash_map("[a-z]{1,6}", inner, 0..4).prop_map(AttributeValue::M),
        ]
    })
}

fn table(created: Instant) -> TableDescription {
    TableDescription::builder()
        .table_name("movies")
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("title")
                .key_type(KeyType::Hash)
                .build(),
        )
        .table_status(TableStatus::Active)
        .creation_date_time(created)
        .item_count(2)
        .table_arn("arn:aws:dynamodb:us-east-1:123456789012:table/movies")
        .build()
}

#[test]
fn every_attribute_value_variant_round_trips() {
    let mut nested = HashMap::new();
    nested.insert("rating".to_string(), AttributeValue::N("8.3".to_string()));
    let value = AttributeValue::L(vec![
        AttributeValue::S("Rush".to_string()),
        AttributeValue::N("2013".to_string()),
        AttributeValue::B(Blob::new("hello")),
        AttributeValue::Ss(vec!["Action".to_string(), "Biography".to_string()]),
        AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]),
        AttributeValue::Bs(vec![Blob::new("a"), Blob::new("bc")]),
        AttributeValue::M(nested),
        AttributeValue::Null(true),
        AttributeValue::Bool(false),
    ]);
    let serialized = serde_json::to_value(&value).expect("serializes");
    assert_eq!(
        serialized,
        json!({"L": [
            {"S": "Rush"},
            {"N": "2013"},
            {"B": "aGVsbG8="},
            {"SS": ["Action", "Biography"]},
            {"NS": ["1", "2.5"]},
            {"BS": ["YQ==", "YmM="]},
            {"M": {"rating": {"N": "8.3"}}},
            {"NULL": true},
            {"BOOL": false}
        ]})
    );
    let parsed: AttributeValue = serde_json::from_value(serialized).expect("valid");
    assert_eq!(parsed, value);
}

#[test]
fn variants_with_equal_payloads_differ() {
    assert_ne!(
        AttributeValue::S("1".to_string()),
        AttributeValue::N("1".to_string())
    );
    assert_ne!(AttributeValue::Null(true), AttributeValue::Bool(true));
    assert_ne!(
        AttributeValue::Ss(vec!["a".to_string()]),
        AttributeValue::Ns(vec!["a".to_string()])
    );
    assert_eq!(AttributeValue::N("1".to_string()).as_s(), Err(&AttributeValue::N("1".to_string())));
    assert!(AttributeValue::B(Blob::new("x")).is_b());
}

#[test]
fn table_description_fields() {
    let base = table(Instant::from_secs_and_nanos(1614952162, 250_000_000));
    let changes: [fn(&mut TableDescription); 6] = [
        |t| t.table_name = Some("shows".to_string()),
        |t| t.key_schema = Some(vec![]),
        |t| t.table_status = Some(TableStatus::Unknown("RESTORING".to_string())),
        |t| t.creation_date_time = Some(Instant::from_epoch_seconds(1614952162)),
        |t| t.item_count = Some(3),
        |t| t.table_arn = None,
    ];
    for change in changes.iter() {
        let mut changed = base.clone();
        change(&mut changed);
        assert_ne!(changed, base);
    }

    let unknown: TableDescription =
        serde_json::from_str(r#"{"TableName":"movies","TableStatus":"RESTORING"}"#).expect("valid");
    assert_eq!(
        unknown.table_status,
        Some(TableStatus::Unknown("RESTORING".to_string()))
    );
    assert_eq!(
        serde_json::to_value(&unknown).expect("serializes"),
        json!({"TableName": "movies", "TableStatus": "RESTORING"})
    );
}

#[test]
fn key_schema_appends_and_set_key_schema_replaces() {
    let hash = KeySchemaElement::builder()
        .attribute_name("artist")
        .key_type(KeyType::Hash)
        .build();
    let range = KeySchemaElement::builder()
        .attribute_name("song")
        .key_type(KeyType::Range)
        .build();
    let builder = TableDescription::builder()
        .key_schema(hash.clone())
        .key_schema(range.clone());
    assert_eq!(builder.clone().build().key_schema, Some(vec![hash, range.clone()]));
    assert_eq!(
        builder.set_key_schema(Some(vec![range.clone()])).build().key_schema,
        Some(vec![range])
    );
}

proptest! {
    #[test]
    fn attribute_values_roundtrip(value in attribute_value()) {
        let serialized = serde_json::to_string(&value).expect("serializes");
        let parsed: AttributeValue = serde_json::from_str(&serialized).expect("valid");
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn table_description_roundtrip(seconds in 0..253402300799_i64, millis in 0..1000_u32) {
        let table = table(Instant::from_secs_and_nanos(seconds, millis * 1_000_000));
        let serialized = serde_json::to_string(&table).expect("serializes");
        let parsed: TableDescription = serde_json::from_str(&serialized).expect("valid");
        prop_assert_eq!(parsed, table);
    }
}
