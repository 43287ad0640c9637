/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response parsers, one per operation.

use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

macro_rules! json_operation {
    ($($operation:ident => ($output:ident, $error:ident)),* $(,)?) => {
        $(
            #[derive(Clone, Default, Debug)]
            pub struct $operation {
                _private: (),
            }

            impl $operation {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $operation {
                type Output = Result<crate::output::$output, crate::error::$error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    aws_json::parse_response(response)
                }
            }
        )*
    };
}

json_operation! {
    GetId => (GetIdOutput, GetIdError),
    GetCredentialsForIdentity => (GetCredentialsForIdentityOutput, GetCredentialsForIdentityError),
    GetOpenIdToken => (GetOpenIdTokenOutput, GetOpenIdTokenError),
    DescribeIdentityPool => (DescribeIdentityPoolOutput, DescribeIdentityPoolError),
    ListIdentityPools => (ListIdentityPoolsOutput, ListIdentityPoolsError),
    ListIdentities => (ListIdentitiesOutput, ListIdentitiesError),
    DeleteIdentityPool => (DeleteIdentityPoolOutput, DeleteIdentityPoolError),
}

#[cfg(test)]
mod test {
    use crate::error::{
        DeleteIdentityPoolErrorKind, DescribeIdentityPoolErrorKind,
        GetCredentialsForIdentityErrorKind, GetIdErrorKind, GetOpenIdTokenErrorKind,
        ListIdentitiesErrorKind, ListIdentityPoolsErrorKind,
    };
    use crate::operation::{
        DeleteIdentityPool, DescribeIdentityPool, GetCredentialsForIdentity, GetId,
        GetOpenIdToken, ListIdentities, ListIdentityPools,
    };
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;
    use smithy_types::ErrorFault;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .header("x-amzn-requestid", "req-1")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn parse_success() {
        let output = GetId::new()
            .parse(&response(200, r#"{"IdentityId":"us-east-1:abc"}"#))
            .expect("success");
        assert_eq!(output.identity_id.as_deref(), Some("us-east-1:abc"));
        assert_eq!(output.response_metadata.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn short_and_qualified_codes_match() {
        for code in &[
            "ResourceConflictException",
            "com.amazonaws.cognitoidentity#ResourceConflictException",
            "ResourceConflictException:http://internal.amazon.com/coral/com.amazon.coral.validate/",
        ] {
            let body = format!(r#"{{"__type":"{}","message":"linked"}}"#, code);
            let response = http::Response::builder()
                .status(400)
                .body(Bytes::from(body))
                .unwrap();
            let err = GetId::new().parse(&response).expect_err("error status");
            assert!(err.is_resource_conflict_exception(), "{} did not match", code);
            assert_eq!(err.code(), Some("ResourceConflictException"));
            assert_eq!(err.message(), Some("linked"));
        }
    }

    fn declared(code: &str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", code)
            .body(Bytes::from_static(b"{}"))
            .unwrap()
    }

    macro_rules! assert_declared_codes {
        ($operation:ident, $kind:ident, [$($code:literal => $fault:ident),* $(,)?]) => {
            $(
                let err = $operation::new()
                    .parse(&declared($code))
                    .expect_err("error status");
                assert!(
                    !matches!(err.kind, $kind::Unhandled(_)),
                    "{} was not dispatched for {}",
                    $code,
                    stringify!($operation)
                );
                assert_eq!(err.code(), Some($code));
                assert_eq!(
                    err.fault(),
                    ErrorFault::$fault,
                    "wrong fault for {} on {}",
                    $code,
                    stringify!($operation)
                );
            )*
        };
    }

    #[test]
    fn every_declared_code_has_its_fault() {
        assert_declared_codes!(GetId, GetIdErrorKind, [
            "ExternalServiceException" => Client,
            "InternalErrorException" => Server,
            "InvalidParameterException" => Client,
            "LimitExceededException" => Client,
            "NotAuthorizedException" => Client,
            "ResourceConflictException" => Client,
            "ResourceNotFoundException" => Client,
            "TooManyRequestsException" => Client,
        ]);
        assert_declared_codes!(GetCredentialsForIdentity, GetCredentialsForIdentityErrorKind, [
            "ExternalServiceException" => Client,
            "InternalErrorException" => Server,
            "InvalidIdentityPoolConfigurationException" => Client,
            "InvalidParameterException" => Client,
            "NotAuthorizedException" => Client,
            "ResourceConflictException" => Client,
            "ResourceNotFoundException" => Client,
            "TooManyRequestsException" => Client,
        ]);
        assert_declared_codes!(GetOpenIdToken, GetOpenIdTokenErrorKind, [
            "ExternalServiceException" => Client,
            "InternalErrorException" => Server,
            "InvalidParameterException" => Client,
            "NotAuthorizedException" => Client,
            "ResourceConflictException" => Client,
            "ResourceNotFoundException" => Client,
            "TooManyRequestsException" => Client,
        ]);
        assert_declared_codes!(DescribeIdentityPool, DescribeIdentityPoolErrorKind, [
            "InternalErrorException" => Server,
            "InvalidParameterException" => Client,
            "NotAuthorizedException" => Client,
            "ResourceNotFoundException" => Client,
            "TooManyRequestsException" => Client,
        ]);
        assert_declared_codes!(ListIdentityPools, ListIdentityPoolsErrorKind, [
            "InternalErrorException" => Server,
            "InvalidParameterException" => Client,
            "NotAuthorizedException" => Client,
            "ResourceNotFoundException" => Client,
            "TooManyRequestsException" => Client,
        ]);
        assert_declared_codes!(ListIdentities, ListIdentitiesErrorKind, [
            "InternalErrorException" => Server,
            "InvalidParameterException" => Client,
            "NotAuthorizedException" => Client,
            "ResourceNotFoundException" => Client,
            "TooManyRequestsException" => Client,
        ]);
        assert_declared_codes!(DeleteIdentityPool, DeleteIdentityPoolErrorKind, [
            "InternalErrorException" => Server,
            "InvalidParameterException" => Client,
            "NotAuthorizedException" => Client,
            "ResourceNotFoundException" => Client,
            "TooManyRequestsException" => Client,
        ]);
    }

    #[test]
    fn invalid_pool_configuration_is_only_declared_for_credentials() {
        let err = GetCredentialsForIdentity::new()
            .parse(&declared("InvalidIdentityPoolConfigurationException"))
            .expect_err("error status");
        assert!(err.is_invalid_identity_pool_configuration_exception());

        let err = GetId::new()
            .parse(&declared("InvalidIdentityPoolConfigurationException"))
            .expect_err("error status");
        assert!(matches!(err.kind, GetIdErrorKind::Unhandled(_)));
    }

    #[test]
    fn unknown_code_is_unhandled() {
        let err = GetId::new()
            .parse(&response(
                502,
                r#"{"__type":"BrandNewException","message":"surprise"}"#,
            ))
            .expect_err("error status");
        assert!(matches!(err.kind, GetIdErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("BrandNewException"));
        assert_eq!(err.message(), Some("surprise"));
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(err.fault(), ErrorFault::Server);
    }

    #[test]
    fn missing_code_is_unhandled() {
        let err = GetId::new()
            .parse(&response(404, "not json"))
            .expect_err("error status");
        assert!(matches!(err.kind, GetIdErrorKind::Unhandled(_)));
        assert_eq!(err.code(), None);
        assert_eq!(err.fault(), ErrorFault::Client);
    }
}
