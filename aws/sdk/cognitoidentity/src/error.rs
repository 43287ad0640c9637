/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled exceptions and the error type of each operation.

aws_json::exception! {
    /// An exception thrown when a dependent service such as Facebook or Twitter is not
    /// responding.
    ExternalServiceException, Client
}

aws_json::exception! {
    /// Thrown when the service encounters an error during processing the request.
    InternalErrorException, Server
}

aws_json::exception! {
    /// Thrown if the identity pool has no role associated for the given auth type
    /// (auth/unauth) or if the AssumeRole fails.
    InvalidIdentityPoolConfigurationException, Client
}

aws_json::exception! {
    /// Thrown for missing or bad input parameter(s).
    InvalidParameterException, Client
}

aws_json::exception! {
    /// Thrown when the total number of user pools has exceeded a preset limit.
    LimitExceededException, Client
}

aws_json::exception! {
    /// Thrown when a user is not authorized to access the requested resource.
    NotAuthorizedException, Client
}

aws_json::exception! {
    /// Thrown when a user tries to use a login which is already linked to another account.
    ResourceConflictException, Client
}

aws_json::exception! {
    /// Thrown when the requested resource (for example, a dataset or record) does not exist.
    ResourceNotFoundException, Client
}

aws_json::exception! {
    /// Thrown when a request is throttled.
    TooManyRequestsException, Client
}

aws_json::operation_error! {
    /// Error type for the `GetId` operation.
    GetIdError, GetIdErrorKind {
        ExternalServiceException("ExternalServiceException") => is_external_service_exception,
        InternalErrorException("InternalErrorException") => is_internal_error_exception,
        InvalidParameterException("InvalidParameterException") => is_invalid_parameter_exception,
        LimitExceededException("LimitExceededException") => is_limit_exceeded_exception,
        NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
        ResourceConflictException("ResourceConflictException") => is_resource_conflict_exception,
        ResourceNotFoundException("ResourceNotFoundException") => is_resource_not_found_exception,
        TooManyRequestsException("TooManyRequestsException") => is_too_many_requests_exception,
    }
}

aws_json::operation_error! {
    /// Error type for the `GetCredentialsForIdentity` operation.
    GetCredentialsForIdentityError, GetCredentialsForIdentityErrorKind {
        ExternalServiceException("ExternalServiceException") => is_external_service_exception,
        InternalErrorException("InternalErrorException") => is_internal_error_exception,
        InvalidIdentityPoolConfigurationException("InvalidIdentityPoolConfigurationException") => is_invalid_identity_pool_configuration_exception,
        InvalidParameterException("InvalidParameterException") => is_invalid_parameter_exception,
        NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
        ResourceConflictException("ResourceConflictException") => is_resource_conflict_exception,
        ResourceNotFoundException("ResourceNotFoundException") => is_resource_not_found_exception,
        TooManyRequestsException("TooManyRequestsException") => is_too_many_requests_exception,
    }
}

aws_json::operation_error! {
    /// Error type for the `GetOpenIdToken` operation.
    GetOpenIdTokenError, GetOpenIdTokenErrorKind {
        ExternalServiceException("ExternalServiceException") => is_external_service_exception,
        InternalErrorException("InternalErrorException") => is_internal_error_exception,
        InvalidParameterException("InvalidParameterException") => is_invalid_parameter_exception,
        NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
        ResourceConflictException("ResourceConflictException") => is_resource_conflict_exception,
        ResourceNotFoundException("ResourceNotFoundException") => is_resource_not_found_exception,
        TooManyRequestsException("TooManyRequestsException") => is_too_many_requests_exception,
    }
}

aws_json::operation_error! {
    /// Error type for the `DescribeIdentityPool` operation.
    DescribeIdentityPoolError, DescribeIdentityPoolErrorKind {
        InternalErrorException("InternalErrorException") => is_internal_error_exception,
        InvalidParameterException("InvalidParameterException") => is_invalid_parameter_exception,
        NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
        ResourceNotFoundException("ResourceNotFoundException") => is_resource_not_found_exception,
        TooManyRequestsException("TooManyRequestsException") => is_too_many_requests_exception,
    }
}

aws_json::operation_error! {
    /// Error type for the `ListIdentityPools` operation.
    ListIdentityPoolsError, ListIdentityPoolsErrorKind {
        InternalErrorException("InternalErrorException") => is_internal_error_exception,
        InvalidParameterException("InvalidParameterException") => is_invalid_parameter_exception,
        NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
        ResourceNotFoundException("ResourceNotFoundException") => is_resource_not_found_exception,
        TooManyRequestsException("TooManyRequestsException") => is_too_many_requests_exception,
    }
}

aws_json::operation_error! {
    /// Error type for the `ListIdentities` operation.
    ListIdentitiesError, ListIdentitiesErrorKind {
        InternalErrorException("InternalErrorException") => is_internal_error_exception,
        InvalidParameterException("InvalidParameterException") => is_invalid_parameter_exception,
        NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
        ResourceNotFoundException("ResourceNotFoundException") => is_resource_not_found_exception,
        TooManyRequestsException("TooManyRequestsException") => is_too_many_requests_exception,
    }
}

aws_json::operation_error! {
    /// Error type for the `DeleteIdentityPool` operation.
    DeleteIdentityPoolError, DeleteIdentityPoolErrorKind {
        InternalErrorException("InternalErrorException") => is_internal_error_exception,
        InvalidParameterException("InvalidParameterException") => is_invalid_parameter_exception,
        NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
        ResourceNotFoundException("ResourceNotFoundException") => is_resource_not_found_exception,
        TooManyRequestsException("TooManyRequestsException") => is_too_many_requests_exception,
    }
}
