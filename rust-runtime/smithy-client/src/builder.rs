/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{retry, BoxError, Client};
use smithy_async::rt::sleep::AsyncSleep;
use smithy_http::body::SdkBody;
use std::sync::Arc;

/// A builder that provides more customization options when constructing a [`Client`].
///
/// To start, call [`Builder::new`]. Then, chain the method calls to configure the `Builder`.
/// When configured to your liking, call [`Builder::build`]. The individual methods have additional
/// documentation.
#[derive(Clone, Debug)]
pub struct Builder<C, M, R = retry::Standard> {
    connector: C,
    middleware: M,
    retry_policy: R,
}

impl Default for Builder<(), ()> {
    fn default() -> Self {
        Builder {
            connector: (),
            middleware: (),
            retry_policy: retry::Standard::default(),
        }
    }
}

impl Builder<(), ()> {
    /// Construct a new, unconfigured builder.
    ///
    /// This builder cannot yet be used, as it does not specify a [connector](Builder::connector)
    /// or [middleware](Builder::middleware). It uses the [standard retry
    /// mechanism](retry::Standard).
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, M, R> Builder<C, M, R> {
    /// Specify the connector for the eventual client to use.
    ///
    /// The connector dictates how requests are turned into responses. Normally, this would entail
    /// sending the request to some kind of remote server, but in certain settings it's useful to
    /// be able to use a custom connector instead, such as to mock the network for tests.
    ///
    /// If you just want to specify a function from request to response instead, use
    /// [`Builder::map_connector`].
    pub fn connector<C2>(self, connector: C2) -> Builder<C2, M, R> {
        Builder {
            connector,
            retry_policy: self.retry_policy,
            middleware: self.middleware,
        }
    }

    /// Specify the middleware for the eventual client to use.
    ///
    /// The middleware adjusts requests before they are dispatched to the connector. It is
    /// responsible for filling in any request parameters that aren't specified by the protocol,
    /// such as those used for routing (like the URL).
    ///
    /// If your requests are already ready to be sent and need no adjustment, you can use
    /// [`tower::layer::util::Identity`] as your middleware.
    pub fn middleware<M2>(self, middleware: M2) -> Builder<C, M2, R> {
        Builder {
            connector: self.connector,
            retry_policy: self.retry_policy,
            middleware,
        }
    }

    /// Specify the retry policy for the eventual client to use.
    ///
    /// By default, the client uses a standard retry policy that works well in most
    /// settings. You can use this method to override that policy with a custom one. A new policy
    /// instance will be instantiated for each request using [`retry::NewRequestPolicy`]. Each
    /// policy instance must implement [`tower::retry::Policy`].
    ///
    /// If you just want to modify the policy _configuration_ for the standard retry policy, use
    /// [`Builder::set_retry_config`].
    pub fn retry_policy<R2>(self, retry_policy: R2) -> Builder<C, M, R2> {
        Builder {
            connector: self.connector,
            retry_policy,
            middleware: self.middleware,
        }
    }
}

impl<C, M> Builder<C, M> {
    /// Set the standard retry policy's configuration.
    pub fn set_retry_config(&mut self, config: retry::Config) {
        self.retry_policy.with_config(config);
    }

    /// Set the standard retry policy's configuration.
    pub fn retry_config(mut self, config: retry::Config) -> Self {
        self.set_retry_config(config);
        self
    }

    /// Set the sleep implementation used to wait between retry attempts.
    pub fn sleep_impl(mut self, sleep_impl: Arc<dyn AsyncSleep>) -> Self {
        self.retry_policy.with_sleep_impl(sleep_impl);
        self
    }
}

impl<C, M, R> Builder<C, M, R> {
    /// Use a connector that directly maps each request to a response.
    ///
    /// ```rust
    /// use smithy_client::Builder;
    /// use smithy_http::body::SdkBody;
    /// let client = Builder::new()
    /// # /*
    ///   .middleware(..)
    /// # */
    /// # .middleware(tower::layer::util::Identity::new())
    ///   .map_connector(|req: http::Request<SdkBody>| {
    ///     async move {
    ///       Ok(http::Response::new(SdkBody::empty()))
    ///     }
    ///   })
    ///   .build();
    /// # client.check();
    /// ```
    pub fn map_connector<F, FF>(self, map: F) -> Builder<tower::util::ServiceFn<F>, M, R>
    where
        F: Fn(http::Request<SdkBody>) -> FF + Send,
        FF: std::future::Future<Output = Result<http::Response<SdkBody>, BoxError>>,
    {
        self.connector(tower::service_fn(map))
    }

    /// Build a [`Client`].
    pub fn build(self) -> Client<C, M, R> {
        Client {
            connector: self.connector,
            retry_policy: self.retry_policy,
            middleware: self.middleware,
        }
    }
}

#[cfg(feature = "hyper")]
impl<M, R> Builder<(), M, R> {
    /// Connect to the service using the provided `hyper` client.
    pub fn hyper<HC>(
        self,
        connector: hyper::Client<HC, SdkBody>,
    ) -> Builder<crate::HyperAdapter<HC>, M, R>
    where
        HC: hyper::client::connect::Connect + Clone + Send + Sync + 'static,
    {
        self.connector(crate::HyperAdapter::from(connector))
    }
}

#[cfg(feature = "rustls")]
impl<M, R> Builder<(), M, R> {
    /// Connect to the service over HTTPS using rustls and the platform's native root certificates.
    pub fn rustls(
        self,
    ) -> Builder<crate::HyperAdapter<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>, M, R>
    {
        self.hyper(crate::hyper_impls::https())
    }
}
