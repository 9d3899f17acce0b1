/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use health::model::{
    DateTimeRange, Event, EventFilter, EventScopeCode, EventStatusCode, EventTypeCategory,
};
use proptest::prelude::*;
use serde_json::json;
use smithy_types::Instant;
use std::collections::HashMap;

fn event(start: Instant) -> Event {
    Event::builder()
        .arn("arn:aws:health:us-east-1::event/EC2/AWS_EC2_INSTANCE_NETWORK_MAINTENANCE_SCHEDULED/example")
        .service("EC2")
        .event_type_code("AWS_EC2_INSTANCE_NETWORK_MAINTENANCE_SCHEDULED")
        .event_type_category(EventTypeCategory::ScheduledChange)
        .region("us-east-1")
        .availability_zone("us-east-1a")
        .start_time(start)
        .end_time(Instant::from_epoch_seconds(1587690000))
        .last_updated_time(Instant::from_secs_and_nanos(1587600000, 250_000_000))
        .status_code(EventStatusCode::Upcoming)
        .event_scope_code(EventScopeCode::AccountSpecific)
        .build()
}

#[test]
fn timestamps_keep_milliseconds() {
    let parsed: Event = serde_json::from_str(
        r#"{"arn":"arn","startTime":1587686400.075,"lastUpdatedTime":1587600000.25}"#,
    )
    .expect("valid");
    assert_eq!(
        parsed.start_time,
        Some(Instant::from_secs_and_nanos(1587686400, 75_000_000))
    );
    assert_eq!(
        serde_json::to_value(&parsed).expect("serializes"),
        json!({"arn": "arn", "startTime": 1587686400.075, "lastUpdatedTime": 1587600000.25})
    );
}

#[test]
fn any_single_field_change_is_unequal() {
    let base = event(Instant::from_epoch_seconds(1587686400));
    let changes: [fn(&mut Event); 11] = [
        |e| e.arn = None,
        |e| e.service = Some("RDS".to_string()),
        |e| e.event_type_code = None,
        |e| e.event_type_category = Some(EventTypeCategory::Issue),
        |e| e.region = Some("us-west-2".to_string()),
        |e| e.availability_zone = None,
        |e| e.start_time = Some(Instant::from_secs_and_nanos(1587686400, 1)),
        |e| e.end_time = None,
        |e| e.last_updated_time = Some(Instant::from_epoch_seconds(1587600000)),
        |e| e.status_code = Some(EventStatusCode::Open),
        |e| e.event_scope_code = Some(EventScopeCode::Unknown("REGIONAL".to_string())),
    ];
    for change in changes.iter() {
        let mut changed = base.clone();
        change(&mut changed);
        assert_ne!(changed, base);
    }
}

#[test]
fn unknown_categories_round_trip() {
    let body = json!({"eventTypeCategory": "billing", "statusCode": "paused"});
    let parsed: Event = serde_json::from_value(body.clone()).expect("valid");
    assert_eq!(
        parsed.event_type_category,
        Some(EventTypeCategory::Unknown("billing".to_string()))
    );
    assert_eq!(parsed.status_code, Some(EventStatusCode::Unknown("paused".to_string())));
    assert_eq!(serde_json::to_value(&parsed).expect("serializes"), body);
}

#[test]
fn filter_list_setters_append() {
    let window = DateTimeRange::builder()
        .from(Instant::from_epoch_seconds(1587600000))
        .to(Instant::from_epoch_seconds(1587686400))
        .build();
    let tags: HashMap<String, String> = vec![("stage".to_string(), "prod".to_string())]
        .into_iter()
        .collect();
    let builder = EventFilter::builder()
        .services("EC2")
        .services("RDS")
        .start_times(window.clone())
        .tags(tags.clone());
    let filter = builder.clone().build();
    assert_eq!(
        filter.services,
        Some(vec!["EC2".to_string(), "RDS".to_string()])
    );
    assert_eq!(filter.start_times, Some(vec![window]));
    assert_eq!(filter.tags, Some(vec![tags]));

    let replaced = builder.set_services(Some(vec!["S3".to_string()])).build();
    assert_eq!(replaced.services, Some(vec!["S3".to_string()]));
    let parsed: EventFilter =
        serde_json::from_str(&serde_json::to_string(&replaced).expect("serializes"))
            .expect("valid");
    assert_eq!(parsed, replaced);
}

proptest! {
    #[test]
    fn event_roundtrip(seconds in 0..253402300799_i64, millis in 0..1000_u32) {
        let event = event(Instant::from_secs_and_nanos(seconds, millis * 1_000_000));
        let serialized = serde_json::to_string(&event).expect("serializes");
        let parsed: Event = serde_json::from_str(&serialized).expect("valid");
        prop_assert_eq!(parsed, event);
    }
}
