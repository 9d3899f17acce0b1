/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::model::{
    AnalyzerStatus, AnalyzerSummary, Criterion, ReasonCode, StatusReason, Type,
};
use proptest::prelude::*;
use serde_json::json;
use smithy_types::Instant;

fn analyzer(created_at: Instant) -> AnalyzerSummary {
    AnalyzerSummary::builder()
        .arn("arn:aws:access-analyzer:us-east-1:123456789012:analyzer/example")
        .name("example")
        .r#type(Type::Account)
        .created_at(created_at)
        .last_resource_analyzed("arn:aws:s3:::example-bucket")
        .last_resource_analyzed_at(Instant::from_epoch_seconds(1576540200))
        .tags("team", "security")
        .status(AnalyzerStatus::Active)
        .status_reason(
            StatusReason::builder()
                .code(ReasonCode::ServiceLinkedRoleCreationFailed)
                .build(),
        )
        .build()
}

#[test]
fn millisecond_timestamps_are_exact() {
    let summary = AnalyzerSummary::builder()
        .created_at(Instant::from_secs_and_nanos(1576540098, 123_000_000))
        .build();
    let serialized = serde_json::to_string(&summary).expect("serializes");
    assert_eq!(serialized, r#"{"createdAt":1576540098.123}"#);
    let parsed: AnalyzerSummary = serde_json::from_str(&serialized).expect("valid");
    assert_eq!(parsed, summary);
}

#[test]
fn any_single_field_change_is_unequal() {
    let base = analyzer(Instant::from_epoch_seconds(1576540098));
    let changes: [fn(&mut AnalyzerSummary); 9] = [
        |a| a.arn = None,
        |a| a.name = Some("other".to_string()),
        |a| a.r#type = Some(Type::Organization),
        |a| a.created_at = Some(Instant::from_secs_and_nanos(1576540098, 1_000_000)),
        |a| a.last_resource_analyzed = None,
        |a| a.last_resource_analyzed_at = None,
        |a| {
            a.tags
                .get_or_insert_with(Default::default)
                .insert("team".to_string(), "platform".to_string());
        },
        |a| a.status = Some(AnalyzerStatus::Unknown("PAUSED".to_string())),
        |a| a.status_reason = Some(StatusReason::builder().build()),
    ];
    for change in changes.iter() {
        let mut changed = base.clone();
        change(&mut changed);
        assert_ne!(changed, base);
    }
    assert_eq!(base.clone(), base);
}

#[test]
fn unknown_enum_values_round_trip() {
    let body = json!({"type": "SERVICE", "status": "PAUSED", "statusReason": {"code": "NEW_REASON"}});
    let parsed: AnalyzerSummary = serde_json::from_value(body.clone()).expect("valid");
    assert_eq!(parsed.r#type, Some(Type::Unknown("SERVICE".to_string())));
    assert_eq!(
        parsed.status_reason.as_ref().and_then(|reason| reason.code.clone()),
        Some(ReasonCode::Unknown("NEW_REASON".to_string()))
    );
    assert_eq!(serde_json::to_value(&parsed).expect("serializes"), body);
}

#[test]
fn list_setters_append_and_set_replaces() {
    let criterion = Criterion::builder().eq("ACTIVE").eq("ARCHIVED");
    assert_eq!(
        criterion.clone().build().eq,
        Some(vec!["ACTIVE".to_string(), "ARCHIVED".to_string()])
    );
    let replaced = criterion
        .clone()
        .set_eq(Some(vec!["RESOLVED".to_string()]))
        .build();
    assert_eq!(replaced.eq, Some(vec!["RESOLVED".to_string()]));
    assert_eq!(criterion.set_eq(None).exists(true).build().eq, None);
}

proptest! {
    #[test]
    fn analyzer_summary_roundtrip(seconds in 0..253402300799_i64, millis in 0..1000_u32, name in "[a-zA-Z0-9_.-]{1,32}") {
        let mut summary = analyzer(Instant::from_secs_and_nanos(seconds, millis * 1_000_000));
        summary.name = Some(name);
        let serialized = serde_json::to_string(&summary).expect("serializes");
        let parsed: AnalyzerSummary = serde_json::from_str(&serialized).expect("valid");
        prop_assert_eq!(parsed, summary);
    }
}
