/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use honeycode::model::{
    DestinationOptions, Format, ImportDataSource, ImportDataSourceConfig, ImportJobSubmitter,
    ImportOptions, ResultHeader, SourceDataColumnProperties, TableDataImportJobMetadata,
};
use proptest::prelude::*;
use serde_json::json;
use smithy_types::Instant;

fn metadata(submitted: Instant) -> TableDataImportJobMetadata {
    TableDataImportJobMetadata::builder()
        .submitter(
            ImportJobSubmitter::builder()
                .email("owner@example.com")
                .user_arn("arn:aws:honeycode:us-west-2:123456789012:user/owner")
                .build(),
        )
        .submit_time(submitted)
        .import_options(
            ImportOptions::builder()
                .destination_options(
                    DestinationOptions::builder()
                        .column_map(
                            "column-1",
                            SourceDataColumnProperties::builder().column_index(1).build(),
                        )
                        .build(),
                )
                .build(),
        )
        .data_source(
            ImportDataSource::builder()
                .data_source_config(
                    ImportDataSourceConfig::builder()
                        .data_source_url("https://example.com/tasks.csv")
                        .build(),
                )
                .build(),
        )
        .build()
}

#[test]
fn any_single_field_change_is_unequal() {
    let base = metadata(Instant::from_epoch_seconds(1613511323));
    let changes: [fn(&mut TableDataImportJobMetadata); 4] = [
        |m| m.submitter = Some(ImportJobSubmitter::builder().email("other@example.com").build()),
        |m| m.submit_time = Some(Instant::from_secs_and_nanos(1613511323, 1_000_000)),
        |m| m.import_options = None,
        |m| m.data_source = Some(ImportDataSource::builder().build()),
    ];
    for change in changes.iter() {
        let mut changed = base.clone();
        change(&mut changed);
        assert_ne!(changed, base);
    }
}

#[test]
fn column_map_inserts_and_set_column_map_replaces() {
    let builder = DestinationOptions::builder()
        .column_map("a", SourceDataColumnProperties::builder().column_index(1).build())
        .column_map("b", SourceDataColumnProperties::builder().column_index(2).build());
    let columns = builder.clone().build().column_map.expect("columns");
    assert_eq!(columns.len(), 2);
    assert_eq!(columns["b"].column_index, Some(2));
    let replaced = builder.set_column_map(None).build();
    assert_eq!(replaced.column_map, None);
}

#[test]
fn unknown_formats_round_trip() {
    let body = json!({"name": "Rating", "format": "STARS"});
    let parsed: ResultHeader = serde_json::from_value(body.clone()).expect("valid");
    assert_eq!(parsed.format, Some(Format::Unknown("STARS".to_string())));
    assert_ne!(parsed, ResultHeader::builder().name("Rating").format(Format::Number).build());
    assert_eq!(serde_json::to_value(&parsed).expect("serializes"), body);
}

proptest! {
    #[test]
    fn import_metadata_roundtrip(seconds in 0..253402300799_i64, millis in 0..1000_u32) {
        let metadata = metadata(Instant::from_secs_and_nanos(seconds, millis * 1_000_000));
        let serialized = serde_json::to_string(&metadata).expect("serializes");
        let parsed: TableDataImportJobMetadata = serde_json::from_str(&serialized).expect("valid");
        prop_assert_eq!(parsed, metadata);
    }
}
