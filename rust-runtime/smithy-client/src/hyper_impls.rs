/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::BoxError;
use smithy_http::body::SdkBody;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

/// Adapter from a [`hyper::Client`] to a connector usable by a [`Client`](crate::Client).
#[derive(Clone, Debug)]
pub struct HyperAdapter<C>(hyper::Client<C, SdkBody>);

impl<C> From<hyper::Client<C, SdkBody>> for HyperAdapter<C> {
    fn from(hc: hyper::Client<C, SdkBody>) -> Self {
        HyperAdapter(hc)
    }
}

impl<C> Service<http::Request<SdkBody>> for HyperAdapter<C>
where
    C: hyper::client::connect::Connect + Clone + Send + Sync + 'static,
{
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.0.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        let fut = self.0.call(req);
        Box::pin(async move { Ok(fut.await?.map(SdkBody::from)) })
    }
}

#[cfg(feature = "rustls")]
pub(crate) fn https() -> hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>, SdkBody>
{
    let https = hyper_rustls::HttpsConnector::with_native_roots();
    hyper::Client::builder().build::<_, SdkBody>(https)
}
