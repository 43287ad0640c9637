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
    ResourceNotFound(ResourceNotFound),
    /// An unhandled error occurred.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ResourceNotFound(inner) => fmt::Display::fmt(inner, f),
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

from_operation_error!(DescribeTrainingJobError, DescribeTrainingJobErrorKind { ResourceNotFound });
from_operation_error!(ListTrainingJobsError, ListTrainingJobsErrorKind {});
from_operation_error!(StopTrainingJobError, StopTrainingJobErrorKind { ResourceNotFound });
from_operation_error!(DescribeEndpointError, DescribeEndpointErrorKind {});
from_operation_error!(ListEndpointsError, ListEndpointsErrorKind {});
