/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Identifiers AWS attaches to every response.

use http::{HeaderMap, HeaderValue};
use smithy_http::result::SdkError;

const REQUEST_ID_HEADERS: &[&str] = &["x-amzn-requestid", "x-amz-request-id"];
const EXTENDED_REQUEST_ID_HEADER: &str = "x-amz-id-2";
const CF_ID_HEADER: &str = "x-amz-cf-id";

/// Metadata describing the HTTP response an output was parsed from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct ResponseMetadata {
    pub http_status_code: u16,
    pub request_id: Option<String>,
    pub extended_request_id: Option<String>,
    pub cf_id: Option<String>,
}

impl ResponseMetadata {
    pub fn from_response<B>(response: &http::Response<B>) -> Self {
        let headers = response.headers();
        ResponseMetadata {
            http_status_code: response.status().as_u16(),
            request_id: extract_request_id(headers).map(str::to_string),
            extended_request_id: header_str(headers, EXTENDED_REQUEST_ID_HEADER)
                .map(str::to_string),
            cf_id: header_str(headers, CF_ID_HEADER).map(str::to_string),
        }
    }
}

/// Implementers return the AWS request ID of the response they were built from
pub trait RequestId {
    /// Returns the request ID if it's available.
    fn request_id(&self) -> Option<&str>;
}

impl RequestId for ResponseMetadata {
    fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl<E> RequestId for SdkError<E> {
    fn request_id(&self) -> Option<&str> {
        self.raw_response()
            .and_then(|raw| extract_request_id(raw.headers()))
    }
}

impl<B> RequestId for http::Response<B> {
    fn request_id(&self) -> Option<&str> {
        extract_request_id(self.headers())
    }
}

fn header_str<'a>(headers: &'a HeaderMap<HeaderValue>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

/// Extracts a request ID from HTTP response headers
pub fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    REQUEST_ID_HEADERS
        .iter()
        .find_map(|name| header_str(headers, name))
}
