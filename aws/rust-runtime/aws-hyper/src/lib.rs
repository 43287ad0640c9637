/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The middleware stack shared by AWS service clients.
//!
//! [`AwsMiddleware`] resolves the endpoint of every request and sets its user agent. Combined
//! with a connector and the standard retry policy of `smithy-client`, it forms a [`Client`].

use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use smithy_async::rt::sleep::AsyncSleep;
use smithy_client::erase::DynConnector;
use smithy_http_tower::map_request::MapRequestLayer;
use std::sync::Arc;
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;

/// A service client using the AWS middleware stack.
pub type Client<C = DynConnector> = smithy_client::Client<C, AwsMiddleware>;

type MiddlewareStack = Stack<
    MapRequestLayer<UserAgentStage>,
    Stack<MapRequestLayer<AwsEndpointStage>, Identity>,
>;

/// AWS middleware stack
///
/// Requests pass through endpoint resolution first and then receive their user agent headers.
/// Both stages read their configuration from the property bag of the request.
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct AwsMiddleware;

impl AwsMiddleware {
    pub fn new() -> Self {
        AwsMiddleware
    }
}

impl<S> tower::Layer<S> for AwsMiddleware {
    type Service = <MiddlewareStack as tower::Layer<S>>::Service;

    fn layer(&self, inner: S) -> Self::Service {
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        ServiceBuilder::new()
            .layer(endpoint_resolver)
            .layer(user_agent)
            .service(inner)
    }
}

/// Build a [`Client`] sending requests over `conn` with the given retry settings.
pub fn build_client(
    conn: DynConnector,
    retry_config: smithy_client::retry::Config,
    sleep_impl: Option<Arc<dyn AsyncSleep>>,
) -> Client {
    let mut builder = smithy_client::Builder::new()
        .connector(conn)
        .middleware(AwsMiddleware::new())
        .retry_config(retry_config);
    if let Some(sleep_impl) = sleep_impl {
        builder = builder.sleep_impl(sleep_impl);
    }
    builder.build()
}

/// An HTTPS connector using rustls and the platform's root certificates.
#[cfg(feature = "rustls")]
pub fn https() -> DynConnector {
    let https = hyper_rustls::HttpsConnector::with_native_roots();
    let client = hyper::Client::builder().build::<_, smithy_http::body::SdkBody>(https);
    DynConnector::new(smithy_client::HyperAdapter::from(client))
}
