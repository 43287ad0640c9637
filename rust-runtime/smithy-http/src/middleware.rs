/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This modules defines the core, framework agnostic, HTTP middleware interface
//! used by the SDK
//!
//! smithy-http-tower provides Tower-specific middleware utilities

use crate::body::SdkBody;
use crate::operation;
use crate::response::ParseStrictResponse;
use crate::result::{SdkError, SdkSuccess};
use std::error::Error;
use tracing::trace;

type BoxError = Box<dyn Error + Send + Sync>;

/// [`MapRequest`] defines a synchronous middleware that transforms an [`operation::Request`].
///
/// Typically, these middleware will read configuration from the `PropertyBag` and use it to
/// augment the request. Most fundamental middleware is expressed as `MapRequest`, including
/// endpoint resolution and user agent construction.
///
/// ```rust
/// # use smithy_http::middleware::MapRequest;
/// # use std::convert::Infallible;
/// # use smithy_http::operation;
/// use http::header::{HeaderName, HeaderValue};
/// struct AddHeader(HeaderName, HeaderValue);
/// /// Signaling struct added to the request property bag if a header should be added
/// struct NeedsHeader;
/// impl MapRequest for AddHeader {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
///         request.augment(|mut request, properties| {
///             if properties.get::<NeedsHeader>().is_some() {
///                 request.headers_mut().append(
///                     self.0.clone(),
///                     self.1.clone(),
///                 );
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// The Error type returned by this operation.
    ///
    /// If this middleware never fails use [std::convert::Infallible] or similar.
    type Error: Into<BoxError>;

    /// Apply this middleware to a request.
    ///
    /// Typically, implementations will use [`request.augment`](crate::operation::Request::augment)
    /// to be able to transform an owned `http::Request`.
    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Read the body of `response` to the end and parse it with `handler`.
///
/// A body that fails to load becomes [`SdkError::ResponseError`]. Otherwise the parsed result
/// is returned together with the raw response, whose body stays readable.
pub async fn load_response<T, E, O>(
    response: http::Response<SdkBody>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    O: ParseStrictResponse<Output = Result<T, E>>,
{
    let (parts, body) = response.into_parts();
    let body = match hyper::body::to_bytes(body).await {
        Ok(body) => body,
        Err(err) => {
            return Err(SdkError::ResponseError {
                raw: http::Response::from_parts(parts, SdkBody::taken()),
                err,
            });
        }
    };

    let response = http::Response::from_parts(parts, body);
    trace!(response = ?response, "read HTTP response body");
    let parsed = handler.parse(&response);
    sdk_result(parsed, response.map(SdkBody::from))
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<SdkBody>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}
