/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// Parses a fully loaded HTTP response into the result of an operation.
///
/// awsJson responses are always read to the end before parsing, so parsers stay synchronous and
/// can be tested against plain `http::Response<Bytes>` values.
///
/// For request/response style operations, `Output` is typically
/// `Result<GetIdOutput, GetIdError>`.
pub trait ParseStrictResponse {
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}
