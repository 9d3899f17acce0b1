/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use http::Uri;
use iotevents::error::{CreateInputErrorKind, DeleteInputErrorKind};
use iotevents::model::{
    Action, Attribute, DetectorDebugOption, DetectorModelDefinition, DetectorModelVersionStatus,
    EvaluationMethod, Event, InputDefinition, InputStatus, LoggingLevel, LoggingOptions,
    OnEnterLifecycle, OnInputLifecycle, SetVariableAction, SnsTopicPublishAction, State, Tag,
    TransitionEvent,
};
use iotevents::{Client, Config, Credentials, Region, SdkError};
use smithy_http::body::SdkBody;
use smithy_types::Instant;

fn client(conn: TestConnection<&'static str>) -> Client {
    let conf = Config::builder()
        .region(Region::new("eu-west-1"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build();
    Client::from_conf_conn(conf, Standard::new(conn))
}

fn request(method: &str, uri: &'static str, body: &'static str) -> http::Request<SdkBody> {
    let body = if body.is_empty() {
        SdkBody::empty()
    } else {
        SdkBody::from(body)
    };
    http::Request::builder()
        .method(method)
        .uri(Uri::from_static(uri))
        .body(body)
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

#[tokio::test]
async fn create_input() {
    let conn = TestConnection::new(vec![(
        request(
            "POST",
            "https://iotevents.eu-west-1.amazonaws.com/inputs",
            r#"{"inputName":"pressure","inputDefinition":{"attributes":[{"jsonPath":"sensorData.pressure"},{"jsonPath":"motorid"}]},"tags":[{"key":"site","value":"plant-7"}]}"#,
        ),
        response(
            200,
            r#"{"inputConfiguration":{"inputName":"pressure","inputArn":"arn:aws:iotevents:eu-west-1:123456789012:input/pressure","creationTime":1.6141E9,"lastUpdateTime":1.6141E9,"status":"CREATING"}}"#,
        ),
    )]);
    let client = client(conn.clone());
    let config = client
        .create_input()
        .input_name("pressure")
        .input_definition(
            InputDefinition::builder()
                .attributes(Attribute::builder().json_path("sensorData.pressure").build())
                .attributes(Attribute::builder().json_path("motorid").build())
                .build(),
        )
        .tags(Tag::builder().key("site").value("plant-7").build())
        .send()
        .await
        .expect("create input should succeed")
        .input_configuration
        .expect("input configuration");
    assert_eq!(config.status, Some(InputStatus::Creating));
    assert_eq!(
        config.creation_time.map(|t| t.epoch_seconds()),
        Some(1_614_100_000)
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn create_input_already_exists() {
    let conn = TestConnection::new(vec![(
        request(
            "POST",
            "https://iotevents.eu-west-1.amazonaws.com/inputs",
            r#"{"inputName":"pressure"}"#,
        ),
        http::Response::builder()
            .status(409)
            .header("x-amzn-errortype", "ResourceAlreadyExistsException")
            .body(r#"{"message":"Input pressure already exists","resourceId":"pressure","resourceArn":"arn:aws:iotevents:eu-west-1:123456789012:input/pressure"}"#)
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let err = client
        .create_input()
        .input_name("pressure")
        .send()
        .await
        .expect_err("input exists");
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    match err.kind {
        CreateInputErrorKind::ResourceAlreadyExistsException(inner) => {
            assert_eq!(inner.resource_id.as_deref(), Some("pressure"));
            assert_eq!(
                inner.resource_arn.as_deref(),
                Some("arn:aws:iotevents:eu-west-1:123456789012:input/pressure")
            );
        }
        other => panic!("incorrect error: {:?}", other),
    }
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn describe_and_delete_input() {
    let conn = TestConnection::new(vec![
        (
            request(
                "GET",
                "https://iotevents.eu-west-1.amazonaws.com/inputs/pressure",
                "",
            ),
            response(
                200,
                r#"{"input":{"inputConfiguration":{"inputName":"pressure","status":"ACTIVE"},"inputDefinition":{"attributes":[{"jsonPath":"motorid"}]}}}"#,
            ),
        ),
        (
            request(
                "DELETE",
                "https://iotevents.eu-west-1.amazonaws.com/inputs/pressure",
                "",
            ),
            http::Response::builder()
                .status(409)
                .header("x-amzn-errortype", "ResourceInUseException")
                .body(r#"{"message":"Input pressure is referenced by detector model motor"}"#)
                .unwrap(),
        ),
    ]);
    let client = client(conn.clone());
    let input = client
        .describe_input()
        .input_name("pressure")
        .send()
        .await
        .expect("describe input should succeed")
        .input
        .expect("input");
    assert_eq!(
        input
            .input_configuration
            .and_then(|c| c.status),
        Some(InputStatus::Active)
    );
    assert_eq!(
        input.input_definition,
        Some(
            InputDefinition::builder()
                .attributes(Attribute::builder().json_path("motorid").build())
                .build()
        )
    );

    let err = client
        .delete_input()
        .input_name("pressure")
        .send()
        .await
        .expect_err("input is in use");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(err.is_resource_in_use_exception());
            assert!(matches!(
                err.kind,
                DeleteInputErrorKind::ResourceInUseException(_)
            ));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn list_detector_model_versions() {
    let conn = TestConnection::new(vec![(
        request(
            "GET",
            "https://iotevents.eu-west-1.amazonaws.com/detector-models/motor/versions?nextToken=abc%2F123&maxResults=2",
            "",
        ),
        response(
            200,
            r#"{"detectorModelVersionSummaries":[{"detectorModelName":"motor","detectorModelVersion":"1","status":"DEPRECATED","evaluationMethod":"BATCH"},{"detectorModelName":"motor","detectorModelVersion":"2","status":"ACTIVE","evaluationMethod":"SERIAL"}]}"#,
        ),
    )]);
    let client = client(conn.clone());
    let versions = client
        .list_detector_model_versions()
        .detector_model_name("motor")
        .next_token("abc/123")
        .max_results(2)
        .send()
        .await
        .expect("list versions should succeed")
        .detector_model_version_summaries
        .expect("summaries");
    assert_eq!(
        versions[0].status,
        Some(DetectorModelVersionStatus::Deprecated)
    );
    assert_eq!(versions[1].evaluation_method, Some(EvaluationMethod::Serial));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn logging_options_round_trip() {
    let conn = TestConnection::new(vec![
        (
            request(
                "PUT",
                "https://iotevents.eu-west-1.amazonaws.com/logging",
                r#"{"loggingOptions":{"roleArn":"arn:aws:iam::123456789012:role/logs","level":"DEBUG","enabled":true,"detectorDebugOptions":[{"detectorModelName":"motor","keyValue":"m-1"}]}}"#,
            ),
            response(200, ""),
        ),
        (
            request("GET", "https://iotevents.eu-west-1.amazonaws.com/logging", ""),
            response(
                200,
                r#"{"loggingOptions":{"roleArn":"arn:aws:iam::123456789012:role/logs","level":"DEBUG","enabled":true,"detectorDebugOptions":[{"detectorModelName":"motor","keyValue":"m-1"}]}}"#,
            ),
        ),
    ]);
    let client = client(conn.clone());
    let options = LoggingOptions::builder()
        .role_arn("arn:aws:iam::123456789012:role/logs")
        .level(LoggingLevel::Debug)
        .enabled(true)
        .detector_debug_options(
            DetectorDebugOption::builder()
                .detector_model_name("motor")
                .key_value("m-1")
                .build(),
        )
        .build();
    client
        .put_logging_options()
        .logging_options(options.clone())
        .send()
        .await
        .expect("put logging options should succeed");
    let described = client
        .describe_logging_options()
        .send()
        .await
        .expect("describe logging options should succeed");
    assert_eq!(described.logging_options, Some(options));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn tags_use_a_query_param() {
    let conn = TestConnection::new(vec![
        (
            request(
                "POST",
                "https://iotevents.eu-west-1.amazonaws.com/tags?resourceArn=arn%3Aaws%3Aiotevents%3Aeu-west-1%3A123456789012%3Ainput%2Fpressure",
                r#"{"tags":[{"key":"site","value":"plant-7"}]}"#,
            ),
            response(200, ""),
        ),
        (
            request(
                "DELETE",
                "https://iotevents.eu-west-1.amazonaws.com/tags?resourceArn=arn%3Aaws%3Aiotevents%3Aeu-west-1%3A123456789012%3Ainput%2Fpressure&tagKeys=site",
                "",
            ),
            response(200, ""),
        ),
    ]);
    let client = client(conn.clone());
    let arn = "arn:aws:iotevents:eu-west-1:123456789012:input/pressure";
    client
        .tag_resource()
        .resource_arn(arn)
        .tags(Tag::builder().key("site").value("plant-7").build())
        .send()
        .await
        .expect("tag should succeed");
    client
        .untag_resource()
        .resource_arn(arn)
        .tag_keys("site")
        .send()
        .await
        .expect("untag should succeed");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn service_unavailable_is_retried() {
    let conn = TestConnection::new(vec![
        (
            request("GET", "https://iotevents.eu-west-1.amazonaws.com/inputs", ""),
            http::Response::builder()
                .status(503)
                .header("x-amzn-errortype", "ServiceUnavailableException")
                .body(r#"{"message":"try again"}"#)
                .unwrap(),
        ),
        (
            request("GET", "https://iotevents.eu-west-1.amazonaws.com/inputs", ""),
            response(200, r#"{"inputSummaries":[{"inputName":"pressure","status":"ACTIVE"}]}"#),
        ),
    ]);
    let conf = Config::builder()
        .region(Region::new("eu-west-1"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build();
    let client = Client::from_parts(
        aws_hyper::Client::new(Standard::new(conn.clone()))
            .with_retry_config(aws_hyper::RetryConfig::new().with_static_base(|| 0_f64)),
        conf,
    );
    let inputs = client
        .list_inputs()
        .send()
        .await
        .expect("second attempt succeeds")
        .input_summaries
        .expect("summaries");
    assert_eq!(inputs[0].input_name.as_deref(), Some("pressure"));
    assert_eq!(conn.requests().len(), 2);
}

#[test]
fn update_input_request_serialization() {
    use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
    let conf = Config::builder()
        .region(Region::new("eu-west-1"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build();
    let input = iotevents::input::UpdateInputInput::builder()
        .input_name("pressure")
        .input_description("motor pressure readings")
        .input_definition(
            InputDefinition::builder()
                .attributes(Attribute::builder().json_path("motorid").build())
                .build(),
        )
        .build()
        .expect("valid input");
    let op = input.make_operation(&conf).expect("valid operation");
    let request = op.request().http();
    pretty_assertions::assert_eq!(request.method(), "PUT");
    pretty_assertions::assert_eq!(request.uri().path(), "/inputs/pressure");
    assert_ok(validate_headers(request, &[("content-type", "application/json")]));
    assert_ok(validate_body(
        request.body().bytes().expect("body is in memory"),
        r#"{"inputDescription":"motor pressure readings","inputDefinition":{"attributes":[{"jsonPath":"motorid"}]}}"#,
        MediaType::Json,
    ));
}

fn json_request(method: &str, uri: &'static str, body: impl Into<SdkBody>) -> http::Request<SdkBody> {
    http::Request::builder()
        .method(method)
        .uri(Uri::from_static(uri))
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn single_state() -> DetectorModelDefinition {
    DetectorModelDefinition::builder()
        .states(State::builder().state_name("Normal").build())
        .initial_state_name("Normal")
        .build()
}

fn motor_definition() -> DetectorModelDefinition {
    let set_variable = |value: &str| {
        Action::builder()
            .set_variable(
                SetVariableAction::builder()
                    .variable_name("pressureThresholdBreached")
                    .value(value)
                    .build(),
            )
            .build()
    };
    DetectorModelDefinition::builder()
        .states(
            State::builder()
                .state_name("Normal")
                .on_enter(
                    OnEnterLifecycle::builder()
                        .events(
                            Event::builder()
                                .event_name("init")
                                .condition("true")
                                .actions(set_variable("0"))
                                .build(),
                        )
                        .build(),
                )
                .on_input(
                    OnInputLifecycle::builder()
                        .transition_events(
                            TransitionEvent::builder()
                                .event_name("Overpressurized")
                                .condition("$input.PressureInput.sensorData.pressure > 70")
                                .actions(set_variable("$variable.pressureThresholdBreached + 3"))
                                .next_state("Dangerous")
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .states(
            State::builder()
                .state_name("Dangerous")
                .on_enter(
                    OnEnterLifecycle::builder()
                        .events(
                            Event::builder()
                                .event_name("Pressure Threshold Breached")
                                .condition("$variable.pressureThresholdBreached > 1")
                                .actions(
                                    Action::builder()
                                        .sns(
                                            SnsTopicPublishAction::builder()
                                                .target_arn("arn:aws:sns:eu-west-1:123456789012:underPressureAction")
                                                .build(),
                                        )
                                        .build(),
                                )
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .initial_state_name("Normal")
        .build()
}

const MOTOR_DEFINITION: &str = r#"{
    "states":[
        {
            "stateName":"Normal",
            "onInput":{"transitionEvents":[{"eventName":"Overpressurized","condition":"$input.PressureInput.sensorData.pressure > 70","actions":[{"setVariable":{"variableName":"pressureThresholdBreached","value":"$variable.pressureThresholdBreached + 3"}}],"nextState":"Dangerous"}]},
            "onEnter":{"events":[{"eventName":"init","condition":"true","actions":[{"setVariable":{"variableName":"pressureThresholdBreached","value":"0"}}]}]}
        },
        {
            "stateName":"Dangerous",
            "onEnter":{"events":[{"eventName":"Pressure Threshold Breached","condition":"$variable.pressureThresholdBreached > 1","actions":[{"sns":{"targetArn":"arn:aws:sns:eu-west-1:123456789012:underPressureAction"}}]}]}
        }
    ],
    "initialStateName":"Normal"
}"#;

#[tokio::test]
async fn detector_model_lifecycle() {
    let create_body = format!(
        r#"{{"detectorModelName":"motor","detectorModelDefinition":{},"key":"motorid","roleArn":"arn:aws:iam::123456789012:role/IoTEventsRole","evaluationMethod":"BATCH"}}"#,
        MOTOR_DEFINITION
    );
    let conn = TestConnection::new(vec![
        (
            json_request(
                "POST",
                "https://iotevents.eu-west-1.amazonaws.com/detector-models",
                create_body,
            ),
            response(
                200,
                r#"{"detectorModelConfiguration":{"detectorModelName":"motor","detectorModelVersion":"1","detectorModelArn":"arn:aws:iotevents:eu-west-1:123456789012:detectorModel/motor","roleArn":"arn:aws:iam::123456789012:role/IoTEventsRole","creationTime":1567799755.484,"lastUpdateTime":1567799755.484,"status":"ACTIVATING","key":"motorid","evaluationMethod":"BATCH"}}"#,
            ),
        ),
        (
            request(
                "GET",
                "https://iotevents.eu-west-1.amazonaws.com/detector-models/motor?version=1",
                "",
            ),
            response(
                200,
                r#"{"detectorModel":{"detectorModelDefinition":{"states":[{"stateName":"Normal"}],"initialStateName":"Normal"},"detectorModelConfiguration":{"detectorModelName":"motor","detectorModelVersion":"1","status":"ACTIVE","key":"motorid","evaluationMethod":"BATCH"}}}"#,
            ),
        ),
        (
            json_request(
                "POST",
                "https://iotevents.eu-west-1.amazonaws.com/detector-models/motor",
                r#"{"detectorModelDefinition":{"states":[{"stateName":"Normal"}],"initialStateName":"Normal"},"detectorModelDescription":"single state","evaluationMethod":"SERIAL"}"#,
            ),
            response(
                200,
                r#"{"detectorModelConfiguration":{"detectorModelName":"motor","detectorModelVersion":"2","status":"ACTIVATING","evaluationMethod":"SERIAL"}}"#,
            ),
        ),
    ]);
    let client = client(conn.clone());

    let created = client
        .create_detector_model()
        .detector_model_name("motor")
        .detector_model_definition(motor_definition())
        .key("motorid")
        .role_arn("arn:aws:iam::123456789012:role/IoTEventsRole")
        .evaluation_method(EvaluationMethod::Batch)
        .send()
        .await
        .expect("create detector model should succeed")
        .detector_model_configuration
        .expect("configuration");
    assert_eq!(created.status, Some(DetectorModelVersionStatus::Activating));
    assert_eq!(
        created.creation_time,
        Some(Instant::from_secs_and_nanos(1567799755, 484_000_000))
    );

    let described = client
        .describe_detector_model()
        .detector_model_name("motor")
        .detector_model_version("1")
        .send()
        .await
        .expect("describe detector model should succeed")
        .detector_model
        .expect("detector model");
    assert_eq!(described.detector_model_definition, Some(single_state()));
    assert_eq!(
        described
            .detector_model_configuration
            .and_then(|config| config.status),
        Some(DetectorModelVersionStatus::Active)
    );

    let updated = client
        .update_detector_model()
        .detector_model_name("motor")
        .detector_model_definition(single_state())
        .detector_model_description("single state")
        .evaluation_method(EvaluationMethod::Serial)
        .send()
        .await
        .expect("update detector model should succeed")
        .detector_model_configuration
        .expect("configuration");
    assert_eq!(updated.detector_model_version.as_deref(), Some("2"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn describe_detector_model_requires_a_name() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let client = client(conn.clone());
    let err = client
        .describe_detector_model()
        .detector_model_name("")
        .send()
        .await
        .expect_err("an empty label is rejected");
    match err {
        SdkError::ConstructionFailure(err) => assert_eq!(
            err.to_string(),
            "detector_model_name was missing or invalid: cannot be empty or unset"
        ),
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert!(conn.requests().is_empty());
}
