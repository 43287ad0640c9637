/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::Request;
use pretty_assertions::Comparison;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("header `{forbidden}` was present but should not have been")]
    ForbiddenHeader { forbidden: String },
    #[error("body did not match. hint:\n{hint}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

/// How a body should be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// Bodies are compared structurally: key order and whitespace don't matter.
    Json,
    /// Bodies are compared byte for byte.
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        let inp = inp.as_ref();
        if inp.contains("json") {
            MediaType::Json
        } else {
            MediaType::Other(inp.to_string())
        }
    }
}

fn header_value<B>(request: &Request<B>, key: &str) -> Option<String> {
    if !request.headers().contains_key(key) {
        return None;
    }
    // Header lists are compared as comma-delimited strings
    Some(
        request
            .headers()
            .get_all(key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        let actual_value = header_value(request, key).ok_or_else(|| {
            ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            }
        })?;
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Compare `actual_body` against `expected_body` according to `media_type`.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual = std::str::from_utf8(actual_body.as_ref()).map_err(|e| {
        ProtocolTestFailure::InvalidBodyFormat {
            expected: "UTF-8 encoded text".to_string(),
            found: e.to_string(),
        }
    })?;
    match media_type {
        MediaType::Json => try_json_eq(actual, expected_body),
        MediaType::Other(_) => {
            if actual == expected_body {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    expected: expected_body.to_string(),
                    found: actual.to_string(),
                    hint: format!("{}", Comparison::new(&expected_body, &actual)),
                })
            }
        }
    }
}

fn try_json_eq(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let parse = |body: &str| {
        serde_json::from_str::<serde_json::Value>(body).map_err(|e| {
            ProtocolTestFailure::InvalidBodyFormat {
                expected: "json".to_string(),
                found: format!("{} ({})", e, body),
            }
        })
    };
    // an empty body is equivalent to an empty object
    let parse_or_empty = |body: &str| {
        if body.is_empty() {
            Ok(serde_json::Value::Object(Default::default()))
        } else {
            parse(body)
        }
    };
    let actual_json = parse_or_empty(actual)?;
    let expected_json = parse_or_empty(expected)?;
    assert_json_eq_no_panic(&actual_json, &expected_json).map_err(|hint| {
        ProtocolTestFailure::BodyDidNotMatch {
            expected: expected.to_string(),
            found: actual.to_string(),
            hint,
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, validate_body, validate_headers, MediaType, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_forbid_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Amz-Target", "SageMaker.ListEndpoints")
            .body(())
            .unwrap();
        forbid_headers(&request, &["authorization"]).expect("header not present");
        forbid_headers(&request, &["x-amz-target"]).expect_err("header is present");
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"IdentityPoolId": "us-east-1:pool", "Logins": {"a": "b"}}"#;
        let actual = r#"{"Logins":{"a":"b"},"IdentityPoolId":"us-east-1:pool"}"#;
        validate_body(actual, expected, MediaType::Json).expect("key order doesn't matter");
        validate_body(actual, r#"{"IdentityPoolId": "other"}"#, MediaType::Json)
            .expect_err("values differ");
        validate_body("", "{}", MediaType::Json).expect("empty body is an empty object");
    }

    #[test]
    fn test_invalid_json_body() {
        let err = validate_body("{not json", "{}", MediaType::Json).expect_err("invalid json");
        assert!(matches!(err, ProtocolTestFailure::InvalidBodyFormat { .. }));
    }

    #[test]
    fn test_validate_other_body() {
        validate_body("abc", "abc", MediaType::from("text/plain")).expect("identical");
        validate_body("abc", "abd", MediaType::from("text/plain")).expect_err("different");
    }

    #[test]
    fn media_type_from_content_type() {
        assert_eq!(
            MediaType::from("application/x-amz-json-1.1"),
            MediaType::Json
        );
    }
}
