/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn endpoint_resolver() -> impl ::aws_endpoint::ResolveAwsEndpoint {
    ::aws_endpoint::metadata::Metadata {
        uri_template: "honeycode.{region}.amazonaws.com",
        protocol: ::aws_endpoint::metadata::Protocol::Https,
        credential_scope: ::aws_endpoint::CredentialScope::default(),
        signature_versions: ::aws_endpoint::metadata::SignatureVersion::V4,
    }
}
