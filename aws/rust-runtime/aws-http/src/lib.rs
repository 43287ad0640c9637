/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod response_metadata;
pub mod user_agent;

use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// A retry policy that models AWS error codes as outlined in the SEP
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
///
/// Responses that could not be received or read are transient. Requests that could not be
/// constructed are never retried.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AwsErrorRetryPolicy;

const TRANSIENT_ERROR_STATUS_CODES: &[u16] = &[500, 502, 503, 504];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }

    fn classify_service_error<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind,
    {
        if let Some(retry_after_delay) = response
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
        }
        if let Some(kind) = err.retryable_error_kind() {
            return RetryKind::Error(kind);
        };
        if let Some(code) = err.code() {
            if THROTTLING_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::ThrottlingError);
            }
            if TRANSIENT_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::TransientError);
            }
        };
        if TRANSIENT_ERROR_STATUS_CODES.contains(&response.status().as_u16()) {
            return RetryKind::Error(ErrorKind::TransientError);
        };
        RetryKind::NotRetryable
    }
}

impl Default for AwsErrorRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> ClassifyResponse<SdkSuccess<T>, SdkError<E>> for AwsErrorRetryPolicy
where
    E: ProvideErrorKind,
{
    fn classify(&self, err: Result<&SdkSuccess<T>, &SdkError<E>>) -> RetryKind {
        let (err, response) = match err {
            Ok(_) => return RetryKind::Unnecessary,
            Err(SdkError::ServiceError { err, raw }) => (err, raw),
            Err(SdkError::DispatchFailure(_)) | Err(SdkError::ResponseError { .. }) => {
                return RetryKind::Error(ErrorKind::TransientError)
            }
            Err(_) => return RetryKind::NotRetryable,
        };
        self.classify_service_error(err, response)
    }
}

#[cfg(test)]
mod test {
    use crate::AwsErrorRetryPolicy;
    use smithy_http::body::SdkBody;
    use smithy_http::result::{SdkError, SdkSuccess};
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::fmt;
    use std::time::Duration;

    #[derive(Debug)]
    struct UnmodeledError;

    #[derive(Debug)]
    struct CodedError {
        code: &'static str,
    }

    impl fmt::Display for UnmodeledError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "UnmodeledError")
        }
    }

    impl std::error::Error for UnmodeledError {}

    impl ProvideErrorKind for UnmodeledError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    impl ProvideErrorKind for CodedError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            Some(self.code)
        }
    }

    fn make_err<E>(err: E, raw: http::Response<&'static str>) -> Result<SdkSuccess<()>, SdkError<E>> {
        Err(SdkError::ServiceError {
            err,
            raw: raw.map(SdkBody::from),
        })
    }

    fn classify<E: ProvideErrorKind>(result: Result<SdkSuccess<()>, SdkError<E>>) -> RetryKind {
        AwsErrorRetryPolicy::new().classify(result.as_ref())
    }

    #[test]
    fn not_an_error() {
        let test_response = http::Response::new("OK").map(SdkBody::from);
        assert_eq!(
            classify::<UnmodeledError>(Ok(SdkSuccess {
                raw: test_response,
                parsed: ()
            })),
            RetryKind::Unnecessary
        );
    }

    #[test]
    fn classify_by_response_status() {
        let test_resp = http::Response::builder()
            .status(503)
            .body("error!")
            .unwrap();
        assert_eq!(
            classify(make_err(UnmodeledError, test_resp)),
            RetryKind::Error(ErrorKind::TransientError)
        );
        let test_resp = http::Response::builder()
            .status(400)
            .body("error!")
            .unwrap();
        assert_eq!(
            classify(make_err(UnmodeledError, test_resp)),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn classify_by_error_code() {
        let test_response = http::Response::new("OK");

        assert_eq!(
            classify(make_err(CodedError { code: "Throttling" }, test_response)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );

        let test_response = http::Response::new("OK");
        assert_eq!(
            classify(make_err(
                CodedError {
                    code: "RequestTimeout"
                },
                test_response,
            )),
            RetryKind::Error(ErrorKind::TransientError)
        )
    }

    #[test]
    fn classify_generic() {
        let err = smithy_types::Error::builder().code("SlowDown").build();
        let test_response = http::Response::new("OK");
        assert_eq!(
            classify(make_err(err, test_response)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn classify_by_error_kind() {
        #[derive(Debug)]
        struct ModeledRetries;
        let test_response = http::Response::new("OK");
        impl ProvideErrorKind for ModeledRetries {
            fn retryable_error_kind(&self) -> Option<ErrorKind> {
                Some(ErrorKind::ClientError)
            }

            fn code(&self) -> Option<&str> {
                // code should not be called when `error_kind` is provided
                unimplemented!()
            }
        }

        assert_eq!(
            classify(make_err(ModeledRetries, test_response)),
            RetryKind::Error(ErrorKind::ClientError)
        );
    }

    #[test]
    fn test_retry_after_header() {
        let test_response = http::Response::builder()
            .header("x-amz-retry-after", "5000")
            .body("retry later")
            .unwrap();

        assert_eq!(
            classify(make_err(UnmodeledError, test_response)),
            RetryKind::Explicit(Duration::from_millis(5000))
        );
    }

    #[test]
    fn classify_failures_without_a_response() {
        assert_eq!(
            classify::<UnmodeledError>(Err(SdkError::DispatchFailure("connection reset".into()))),
            RetryKind::Error(ErrorKind::TransientError)
        );
        assert_eq!(
            classify::<UnmodeledError>(Err(SdkError::ConstructionFailure("bad input".into()))),
            RetryKind::NotRetryable
        );
    }
}
