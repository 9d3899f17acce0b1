/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use iotevents::model::{
    Action, ClearTimerAction, DetectorModel, DetectorModelConfiguration, DetectorModelDefinition,
    DetectorModelVersionStatus, EvaluationMethod, Event, OnInputLifecycle, SetTimerAction, State,
    TransitionEvent,
};
use proptest::prelude::*;
use serde_json::json;
use smithy_types::Instant;

fn configuration(created: Instant) -> DetectorModelConfiguration {
    DetectorModelConfiguration::builder()
        .detector_model_name("motor")
        .detector_model_version("1")
        .detector_model_description("pressure monitoring")
        .detector_model_arn("arn:aws:iotevents:eu-west-1:123456789012:detectorModel/motor")
        .role_arn("arn:aws:iam::123456789012:role/IoTEventsRole")
        .creation_time(created)
        .last_update_time(created)
        .status(DetectorModelVersionStatus::Active)
        .key("motorid")
        .evaluation_method(EvaluationMethod::Batch)
        .build()
}

fn definition() -> DetectorModelDefinition {
    DetectorModelDefinition::builder()
        .states(
            State::builder()
                .state_name("Idle")
                .on_input(
                    OnInputLifecycle::builder()
                        .events(
                            Event::builder()
                                .event_name("arm")
                                .condition("$input.Motor.on")
                                .actions(
                                    Action::builder()
                                        .set_timer(
                                            SetTimerAction::builder()
                                                .timer_name("watchdog")
                                                .seconds(60)
                                                .build(),
                                        )
                                        .build(),
                                )
                                .build(),
                        )
                        .transition_events(
                            TransitionEvent::builder()
                                .event_name("expire")
                                .condition("timeout(\"watchdog\")")
                                .actions(
                                    Action::builder()
                                        .clear_timer(
                                            ClearTimerAction::builder().timer_name("watchdog").build(),
                                        )
                                        .build(),
                                )
                                .next_state("Alarm")
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .states(State::builder().state_name("Alarm").build())
        .initial_state_name("Idle")
        .build()
}

#[test]
fn detector_model_roundtrip() {
    let model = DetectorModel::builder()
        .detector_model_definition(definition())
        .detector_model_configuration(configuration(Instant::from_secs_and_nanos(
            1567799755, 484_000_000,
        )))
        .build();
    let serialized = serde_json::to_value(&model).expect("serializes");
    assert_eq!(
        serialized["detectorModelDefinition"]["states"][0]["onInput"]["events"][0]["actions"][0],
        json!({"setTimer": {"timerName": "watchdog", "seconds": 60}})
    );
    assert_eq!(
        serialized["detectorModelConfiguration"]["creationTime"],
        json!(1567799755.484)
    );
    let parsed: DetectorModel = serde_json::from_value(serialized).expect("valid");
    assert_eq!(parsed, model);
}

#[test]
fn any_single_field_change_is_unequal() {
    let base = configuration(Instant::from_epoch_seconds(1567799755));
    let changes: [fn(&mut DetectorModelConfiguration); 10] = [
        |c| c.detector_model_name = None,
        |c| c.detector_model_version = Some("2".to_string()),
        |c| c.detector_model_description = None,
        |c| c.detector_model_arn = None,
        |c| c.role_arn = Some("arn:aws:iam::123456789012:role/Other".to_string()),
        |c| c.creation_time = Some(Instant::from_secs_and_nanos(1567799755, 1_000_000)),
        |c| c.last_update_time = None,
        |c| c.status = Some(DetectorModelVersionStatus::Draft),
        |c| c.key = Some("deviceid".to_string()),
        |c| c.evaluation_method = Some(EvaluationMethod::Serial),
    ];
    for change in changes.iter() {
        let mut changed = base.clone();
        change(&mut changed);
        assert_ne!(changed, base);
    }
}

#[test]
fn unknown_status_round_trips() {
    let body = json!({"detectorModelName": "motor", "status": "ARCHIVED", "evaluationMethod": "STREAM"});
    let parsed: DetectorModelConfiguration = serde_json::from_value(body.clone()).expect("valid");
    assert_eq!(
        parsed.status,
        Some(DetectorModelVersionStatus::Unknown("ARCHIVED".to_string()))
    );
    assert_eq!(
        parsed.evaluation_method,
        Some(EvaluationMethod::Unknown("STREAM".to_string()))
    );
    assert_eq!(serde_json::to_value(&parsed).expect("serializes"), body);
}

#[test]
fn states_append_and_set_states_replaces() {
    let builder = DetectorModelDefinition::builder()
        .states(State::builder().state_name("Idle").build())
        .states(State::builder().state_name("Alarm").build());
    let names = |definition: DetectorModelDefinition| -> Vec<String> {
        definition
            .states
            .unwrap_or_default()
            .into_iter()
            .filter_map(|state| state.state_name)
            .collect()
    };
    assert_eq!(names(builder.clone().build()), vec!["Idle", "Alarm"]);
    assert_eq!(
        names(
            builder
                .set_states(Some(vec![State::builder().state_name("Only").build()]))
                .build()
        ),
        vec!["Only"]
    );
}

proptest! {
    #[test]
    fn configuration_roundtrip(seconds in 0..253402300799_i64, millis in 0..1000_u32) {
        let config = configuration(Instant::from_secs_and_nanos(seconds, millis * 1_000_000));
        let serialized = serde_json::to_string(&config).expect("serializes");
        let parsed: DetectorModelConfiguration = serde_json::from_str(&serialized).expect("valid");
        prop_assert_eq!(parsed, config);
    }
}
