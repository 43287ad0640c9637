/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors
//!
//! Most SageMaker operations model no errors: invalid requests, including requests naming an
//! endpoint that does not exist, are reported with a `ValidationException` code and land in the
//! `Unhandled` kind. Use `code()` to tell them apart.

aws_json::exception! {
    /// Resource being access is not found.
    ResourceNotFound, Client
}

aws_json::operation_error! {
    /// Error type for the `DescribeTrainingJob` operation.
    DescribeTrainingJobError, DescribeTrainingJobErrorKind {
        ResourceNotFound("ResourceNotFound") => is_resource_not_found,
    }
}

aws_json::operation_error! {
    /// Error type for the `ListTrainingJobs` operation.
    ListTrainingJobsError, ListTrainingJobsErrorKind {}
}

aws_json::operation_error! {
    /// Error type for the `StopTrainingJob` operation.
    StopTrainingJobError, StopTrainingJobErrorKind {
        ResourceNotFound("ResourceNotFound") => is_resource_not_found,
    }
}

aws_json::operation_error! {
    /// Error type for the `DescribeEndpoint` operation.
    DescribeEndpointError, DescribeEndpointErrorKind {}
}

aws_json::operation_error! {
    /// Error type for the `ListEndpoints` operation.
    ListEndpointsError, ListEndpointsErrorKind {}
}
