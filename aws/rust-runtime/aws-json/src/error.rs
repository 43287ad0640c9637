/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! awsJson error responses.
//!
//! The error code is read, in order of priority, from the `x-amzn-errortype` header, the `code`
//! member of the body and the `__type` member of the body. Services send it either as a short
//! name (`ResourceNotFoundException`) or fully qualified
//! (`com.amazonaws.sagemaker#ResourceNotFoundException`), optionally followed by a `:` and a
//! URL. [`sanitize_error_code`] reduces all of these to the short name.

use aws_http::response_metadata::extract_request_id;
use bytes::Bytes;
use serde_json::{Map, Value};
use smithy_types::ErrorFault;

const X_AMZN_ERROR_TYPE: &str = "x-amzn-errortype";

/// Reduce an error code to its short name.
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn error_body(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(members)) => members,
        _ => Map::new(),
    }
}

fn str_member<'a>(body: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| body.get(*key))
        .find_map(Value::as_str)
}

/// Read the generic error out of an awsJson error response.
///
/// Every field is optional: a body that is not a JSON object yields an error with only a request
/// id and a fault. The fault of an error read this way always comes from the status code.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> smithy_types::Error {
    let body = error_body(response.body());
    let code = response
        .headers()
        .get(X_AMZN_ERROR_TYPE)
        .and_then(|header| header.to_str().ok())
        .or_else(|| str_member(&body, &["code", "__type"]));

    let mut builder = smithy_types::Error::builder();
    builder.fault(ErrorFault::from_status(response.status().as_u16()));
    if let Some(code) = code {
        builder.code(sanitize_error_code(code));
    }
    if let Some(message) = str_member(&body, &["message", "Message", "errorMessage"]) {
        builder.message(message);
    }
    if let Some(request_id) = extract_request_id(response.headers()) {
        builder.request_id(request_id);
    }
    builder.build()
}
