/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::*;
use smithy_client::SdkError;
use std::fmt;

/// All possible error types for this service.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    ExternalServiceException(ExternalServiceException),
    InternalErrorException(InternalErrorException),
    InvalidIdentityPoolConfigurationException(InvalidIdentityPoolConfigurationException),
    InvalidParameterException(InvalidParameterException),
    LimitExceededException(LimitExceededException),
    NotAuthorizedException(NotAuthorizedException),
    ResourceConflictException(ResourceConflictException),
    ResourceNotFoundException(ResourceNotFoundException),
    TooManyRequestsException(TooManyRequestsException),
    /// An unhandled error occurred.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ExternalServiceException(inner) => fmt::Display::fmt(inner, f),
            Error::InternalErrorException(inner) => fmt::Display::fmt(inner, f),
            Error::InvalidIdentityPoolConfigurationException(inner) => fmt::Display::fmt(inner, f),
            Error::InvalidParameterException(inner) => fmt::Display::fmt(inner, f),
            Error::LimitExceededException(inner) => fmt::Display::fmt(inner, f),
            Error::NotAuthorizedException(inner) => fmt::Display::fmt(inner, f),
            Error::ResourceConflictException(inner) => fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => fmt::Display::fmt(inner, f),
            Error::TooManyRequestsException(inner) => fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl std::error::Error for Error {}

macro_rules! from_operation_error {
    ($error:ident, $kind:ident { $($variant:ident),* $(,)? }) => {
        impl From<SdkError<$error>> for Error {
            fn from(err: SdkError<$error>) -> Self {
                match err {
                    SdkError::ServiceError { err, .. } => match err.kind {
                        $( $kind::$variant(inner) => Error::$variant(inner), )*
                        $kind::Unhandled(inner) => Error::Unhandled(inner),
                    },
                    _ => Error::Unhandled(err.into()),
                }
            }
        }
    };
}

from_operation_error!(GetIdError, GetIdErrorKind {
    ExternalServiceException,
    InternalErrorException,
    InvalidParameterException,
    LimitExceededException,
    NotAuthorizedException,
    ResourceConflictException,
    ResourceNotFoundException,
    TooManyRequestsException,
});

from_operation_error!(GetCredentialsForIdentityError, GetCredentialsForIdentityErrorKind {
    ExternalServiceException,
    InternalErrorException,
    InvalidIdentityPoolConfigurationException,
    InvalidParameterException,
    NotAuthorizedException,
    ResourceConflictException,
    ResourceNotFoundException,
    TooManyRequestsException,
});

from_operation_error!(GetOpenIdTokenError, GetOpenIdTokenErrorKind {
    ExternalServiceException,
    InternalErrorException,
    InvalidParameterException,
    NotAuthorizedException,
    ResourceConflictException,
    ResourceNotFoundException,
    TooManyRequestsException,
});

from_operation_error!(DescribeIdentityPoolError, DescribeIdentityPoolErrorKind {
    InternalErrorException,
    InvalidParameterException,
    NotAuthorizedException,
    ResourceNotFoundException,
    TooManyRequestsException,
});

from_operation_error!(ListIdentityPoolsError, ListIdentityPoolsErrorKind {
    InternalErrorException,
    InvalidParameterException,
    NotAuthorizedException,
    ResourceNotFoundException,
    TooManyRequestsException,
});

from_operation_error!(ListIdentitiesError, ListIdentitiesErrorKind {
    InternalErrorException,
    InvalidParameterException,
    NotAuthorizedException,
    ResourceNotFoundException,
    TooManyRequestsException,
});

from_operation_error!(DeleteIdentityPoolError, DeleteIdentityPoolErrorKind {
    InternalErrorException,
    InvalidParameterException,
    NotAuthorizedException,
    ResourceNotFoundException,
    TooManyRequestsException,
});
