/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Support for the awsJson 1.0 and 1.1 protocols.
//!
//! Every awsJson operation is a `POST /` whose target is named by the `x-amz-target` header.
//! Inputs and outputs are plain JSON documents. Errors are signalled by a non-2xx status and a
//! JSON body naming the error type (see [`error`]).

pub mod error;
pub mod instant_epoch;
mod macros;

pub use crate::error::{parse_generic_error, sanitize_error_code};

use aws_http::response_metadata::ResponseMetadata;
use bytes::Bytes;
use http::header::{HeaderName, CONTENT_LENGTH, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use std::error::Error;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use smithy_types;
}

const X_AMZ_TARGET: &str = "x-amz-target";

/// The awsJson protocol versions. They differ only in their content type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JsonProtocol {
    V1_0,
    V1_1,
}

impl JsonProtocol {
    pub fn content_type(&self) -> &'static str {
        match self {
            JsonProtocol::V1_0 => "application/x-amz-json-1.0",
            JsonProtocol::V1_1 => "application/x-amz-json-1.1",
        }
    }
}

/// Serialize `input` into an awsJson request for `{target_prefix}.{operation}`.
///
/// The request has no endpoint yet: the URI is the relative path `/`, to be completed by the
/// endpoint middleware. Input members that are `None` must be skipped by the input's `Serialize`
/// implementation. Required members are never validated here.
pub fn serialize_operation<T: Serialize>(
    protocol: JsonProtocol,
    target_prefix: &str,
    operation: &str,
    input: &T,
) -> Result<http::Request<SdkBody>, BuildError> {
    let body = serde_json::to_vec(input)
        .map_err(|err| BuildError::SerializationError(Box::new(err)))?;
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, protocol.content_type())
        .header(
            HeaderName::from_static(X_AMZ_TARGET),
            format!("{}.{}", target_prefix, operation),
        )
        .header(CONTENT_LENGTH, body.len())
        .body(SdkBody::from(body))?;
    Ok(request)
}

/// An output shape of an awsJson operation.
///
/// Outputs carry the [`ResponseMetadata`] of the response they were read from. It is not part of
/// the JSON document, so it is set after deserializing.
pub trait JsonOutput: DeserializeOwned {
    fn set_response_metadata(&mut self, metadata: ResponseMetadata);
}

/// An operation error that can be built from an awsJson error response.
///
/// Implementations are normally generated with [`operation_error!`](crate::operation_error).
pub trait ParseJsonError: Sized {
    /// Dispatch on the code of `generic` to a modeled error, reading its members from `body`.
    fn from_generic(generic: smithy_types::Error, body: &[u8]) -> Self;

    /// An error that could not be matched to any modeled error.
    fn unhandled(err: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self;
}

/// Read a JSON document, treating an empty body as `{}`.
pub fn deserialize_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// Parse a fully loaded awsJson response into either `O` or `E`.
///
/// Responses with a status below 300 are parsed as output. A body that does not match the output
/// shape becomes an unhandled error.
pub fn parse_response<O, E>(response: &http::Response<Bytes>) -> Result<O, E>
where
    O: JsonOutput,
    E: ParseJsonError,
{
    if response.status().as_u16() >= 300 {
        let generic = parse_generic_error(response);
        tracing::debug!(code = ?generic.code(), status = %response.status(), "service returned an error");
        return Err(E::from_generic(generic, response.body()));
    }
    let mut output: O = deserialize_body(response.body()).map_err(E::unhandled)?;
    output.set_response_metadata(ResponseMetadata::from_response(response));
    Ok(output)
}

#[cfg(test)]
mod test {
    use crate::{
        deserialize_body, parse_response, serialize_operation, JsonOutput, JsonProtocol,
        ParseJsonError,
    };
    use aws_http::response_metadata::ResponseMetadata;
    use bytes::Bytes;
    use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
    use serde::{Deserialize, Serialize};
    use smithy_types::ErrorFault;
    use std::collections::HashMap;
    use std::error::Error;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct GetIdInput {
        #[serde(skip_serializing_if = "Option::is_none")]
        account_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        identity_pool_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        logins: Option<HashMap<String, String>>,
    }

    #[derive(Deserialize, Debug, Default, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct GetIdOutput {
        identity_id: Option<String>,
        #[serde(skip)]
        response_metadata: ResponseMetadata,
    }

    impl JsonOutput for GetIdOutput {
        fn set_response_metadata(&mut self, metadata: ResponseMetadata) {
            self.response_metadata = metadata;
        }
    }

    #[derive(Debug)]
    enum TestError {
        Modeled(smithy_types::Error),
        Unhandled(Box<dyn Error + Send + Sync>),
    }

    impl ParseJsonError for TestError {
        fn from_generic(generic: smithy_types::Error, _body: &[u8]) -> Self {
            TestError::Modeled(generic)
        }

        fn unhandled(err: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
            TestError::Unhandled(err.into())
        }
    }

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .header("x-amzn-requestid", "5d1b2f1a")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn serialize_request() {
        let input = GetIdInput {
            identity_pool_id: Some("us-east-1:pool".to_string()),
            ..Default::default()
        };
        let request = serialize_operation(
            JsonProtocol::V1_1,
            "AWSCognitoIdentityService",
            "GetId",
            &input,
        )
        .expect("valid input");
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/");
        assert_ok(validate_headers(
            &request,
            &[
                ("content-type", "application/x-amz-json-1.1"),
                ("x-amz-target", "AWSCognitoIdentityService.GetId"),
                ("content-length", "35"),
            ],
        ));
        assert_ok(validate_body(
            request.body().bytes().unwrap(),
            r#"{"IdentityPoolId":"us-east-1:pool"}"#,
            MediaType::Json,
        ));
    }

    #[test]
    fn empty_input_serializes_to_empty_object() {
        let request = serialize_operation(
            JsonProtocol::V1_0,
            "Service",
            "Op",
            &GetIdInput::default(),
        )
        .expect("valid input");
        assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/x-amz-json-1.0"
        );
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        let output: GetIdOutput = deserialize_body(b"").expect("empty body is valid");
        assert_eq!(output, GetIdOutput::default());
        let output: GetIdOutput = deserialize_body(b" \n").expect("whitespace is valid");
        assert_eq!(output, GetIdOutput::default());
    }

    #[test]
    fn success_attaches_metadata() {
        let output: GetIdOutput = parse_response::<_, TestError>(&response(
            200,
            r#"{"IdentityId":"us-east-1:abc","Unknown":5}"#,
        ))
        .expect("valid response");
        assert_eq!(output.identity_id.as_deref(), Some("us-east-1:abc"));
        assert_eq!(output.response_metadata.http_status_code, 200);
        assert_eq!(
            output.response_metadata.request_id.as_deref(),
            Some("5d1b2f1a")
        );
    }

    #[test]
    fn malformed_success_is_unhandled() {
        let result =
            parse_response::<GetIdOutput, TestError>(&response(200, r#"{"IdentityId": 5"#));
        match result {
            Err(TestError::Unhandled(_)) => {}
            other => panic!("expected unhandled error, got {:?}", other),
        }
    }

    #[test]
    fn error_status_is_dispatched() {
        let result = parse_response::<GetIdOutput, TestError>(&response(
            503,
            r#"{"__type":"com.amazonaws.cognito#InternalErrorException","message":"oops"}"#,
        ));
        match result {
            Err(TestError::Modeled(generic)) => {
                assert_eq!(generic.code(), Some("InternalErrorException"));
                assert_eq!(generic.message(), Some("oops"));
                assert_eq!(generic.request_id(), Some("5d1b2f1a"));
                assert_eq!(generic.fault(), Some(ErrorFault::Server));
            }
            other => panic!("expected a modeled error, got {:?}", other),
        }
    }
}
