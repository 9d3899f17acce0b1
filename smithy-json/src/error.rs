/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error envelope shared by the AWS JSON protocols

use bytes::Bytes;
use serde::Deserialize;
use smithy_types::Error as GenericError;

#[derive(Deserialize, Default)]
struct ErrorBody {
    code: Option<String>,
    #[serde(rename = "__type")]
    type_: Option<String>,
    message: Option<String>,
    #[serde(rename = "Message")]
    message_upper: Option<String>,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

/// Trim the namespace and any trailing URL from an error code
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/` becomes `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header<'a>(response: &'a http::Response<Bytes>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Extract the error code, message and request id from an error response
///
/// The code comes from the `x-amzn-errortype` header when present, otherwise from the `code` or
/// `__type` body members. A body that is not a JSON object still yields header derived fields.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> GenericError {
    let body: ErrorBody = crate::from_body(response.body()).unwrap_or_default();
    let code = header(response, "x-amzn-errortype")
        .map(str::to_string)
        .or(body.code)
        .or(body.type_)
        .map(|code| sanitize_error_code(&code).to_string());
    GenericError {
        code,
        message: body.message.or(body.message_upper).or(body.error_message),
        request_id: header(response, "x-amzn-requestid").map(str::to_string),
    }
}

#[cfg(test)]
mod test {
    use crate::error::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use smithy_types::Error;

    #[test]
    fn error_codes_are_sanitized() {
        assert_eq!(sanitize_error_code("FooError"), "FooError");
        assert_eq!(sanitize_error_code("FooError:http://internal.amazon.com/"), "FooError");
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code(""), "");
    }

    #[test]
    fn type_field_and_request_id() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{"__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException", "message": "Requested resource not found"}"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response),
            Error {
                code: Some("ResourceNotFoundException".to_string()),
                message: Some("Requested resource not found".to_string()),
                request_id: Some("1234".to_string())
            }
        );
    }

    #[test]
    fn header_code_wins() {
        let response = http::Response::builder()
            .status(404)
            .header(
                "x-amzn-errortype",
                "ResourceNotFoundException:http://internal.amazon.com/",
            )
            .body(Bytes::from_static(
                br#"{"code": "SomethingElse", "Message": "no analyzer"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("no analyzer"));
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn alternate_message_fields() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"code": "ServiceQuotaExceededException", "errorMessage": "too many"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ServiceQuotaExceededException"));
        assert_eq!(err.message(), Some("too many"));
    }

    #[test]
    fn repeated_message_fields() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"__type":"ResourceNotFoundException","message":"a","Message":"b","errorMessage":"c"}"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response),
            Error {
                code: Some("ResourceNotFoundException".to_string()),
                message: Some("a".to_string()),
                request_id: None
            }
        );

        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"code":"ThrottlingException","Message":"slow down","errorMessage":"ignored"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("slow down"));
    }

    #[test]
    fn unparseable_bodies() {
        let response = http::Response::builder()
            .status(503)
            .body(Bytes::from_static(b"<html>Service Unavailable</html>"))
            .unwrap();
        assert_eq!(parse_generic_error(&response), Error::default());
    }
}
