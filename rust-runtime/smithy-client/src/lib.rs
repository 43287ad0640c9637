/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! A generic service client for operations built on `smithy-http`.
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod bounds;
pub mod erase;
pub mod paginator;
pub mod retry;
pub mod waiter;

#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;

#[cfg(feature = "hyper")]
mod hyper_impls;
#[cfg(feature = "hyper")]
pub use hyper_impls::HyperAdapter;

mod builder;
pub use builder::Builder;


use smithy_http::operation::Operation;
pub use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use std::error::Error;
use tower::{Service, ServiceBuilder, ServiceExt};

pub(crate) type BoxError = Box<dyn Error + Send + Sync>;

/// Service client.
///
/// The service client is customizeable in a number of ways (see [`Builder`]). It takes a
/// connector, which turns `http::Request`s into `http::Response`s, and a middleware, which
/// fills out the [`http::Request`] for each higher-level operation so that it can ultimately be
/// sent to the remote host. The middleware is responsible for filling in any request parameters
/// that aren't specified by the protocol itself, such as the endpoint and user agent.
///
/// The middleware takes the form of a [`tower::Layer`] that wraps the actual connection for each
/// request. The [`tower::Service`] that the middleware produces must accept requests of the type
/// [`smithy_http::operation::Request`] and return responses of the type
/// [`http::Response<SdkBody>`](smithy_http::body::SdkBody), most likely by modifying the
/// provided request in place, passing it to the inner service, and then ultimately returning the
/// inner service's response.
#[derive(Debug)]
pub struct Client<Connector, Middleware, RetryPolicy = retry::Standard> {
    connector: Connector,
    middleware: Middleware,
    retry_policy: RetryPolicy,
}

impl<C, M> Client<C, M> {
    /// Set the standard retry policy's configuration.
    pub fn set_retry_config(&mut self, config: retry::Config) {
        self.retry_policy.with_config(config);
    }

    /// Adjust a standard retry client with the given policy configuration.
    pub fn with_retry_config(mut self, config: retry::Config) -> Self {
        self.set_retry_config(config);
        self
    }
}

impl<C, M, R> Client<C, M, R>
where
    C: bounds::SmithyConnector,
    M: bounds::SmithyMiddleware<C>,
    R: retry::NewRequestPolicy,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        R::Policy: bounds::SmithyRetryPolicy<O, T, E, Retry>,
        bounds::Parsed<<M as bounds::SmithyMiddleware<C>>::Service, O, Retry>:
            Service<Operation<O, Retry>, Response = SdkSuccess<T>, Error = SdkError<E>> + Clone,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E, Retry>(
        &self,
        input: Operation<O, Retry>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        R::Policy: bounds::SmithyRetryPolicy<O, T, E, Retry>,
        // holds whenever the bounds on C, M and R hold, but can't be inferred from them
        bounds::Parsed<<M as bounds::SmithyMiddleware<C>>::Service, O, Retry>:
            Service<Operation<O, Retry>, Response = SdkSuccess<T>, Error = SdkError<E>> + Clone,
    {
        let connector = self.connector.clone();
        let mut svc = ServiceBuilder::new()
            // Create a new request-scoped policy
            .retry(self.retry_policy.new_request_policy())
            .layer(ParseResponseLayer::<O, Retry>::new())
            // middleware first, then the connector
            .layer(&self.middleware)
            .layer(DispatchLayer::new())
            .service(connector);
        svc.ready().await?.call(input).await
    }

    /// Statically check the validity of a `Client` without a request to send.
    ///
    /// This will make sure that all the bounds hold that would be required by `call` and
    /// `call_raw` (modulo those that relate to the specific `Operation` type). Comes in handy to
    /// ensure (statically) that all the various constructors actually produce "useful" types.
    #[doc(hidden)]
    pub fn check(&self)
    where
        R::Policy: tower::retry::Policy<
                static_tests::ValidTestOperation,
                SdkSuccess<()>,
                SdkError<static_tests::TestOperationError>,
            > + Clone,
    {
        let _ = |o: static_tests::ValidTestOperation| {
            let _ = self.call_raw(o);
        };
    }
}
