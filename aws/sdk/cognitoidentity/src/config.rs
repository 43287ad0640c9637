/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service configuration
//!
//! A [`Config`] is usually built once and shared by a [`Client`](crate::Client). Every operation
//! resolves its endpoint from the region, FIPS, dual-stack and custom endpoint settings held
//! here.

use aws_endpoint::{DefaultAwsEndpointResolver, Params, ResolveAwsEndpoint};
use aws_types::env_config::EnvConfig;
use aws_types::region::{ProvideRegion, Region};
use smithy_async::rt::sleep::{default_async_sleep, AsyncSleep};
use std::fmt;
use std::sync::Arc;

const ENDPOINT_RESOLVER: DefaultAwsEndpointResolver =
    DefaultAwsEndpointResolver::new("cognito-identity", "cognito-identity-fips");

#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) use_fips: bool,
    pub(crate) use_dual_stack: bool,
    pub(crate) endpoint_url: Option<String>,
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    pub(crate) retry_config: smithy_client::retry::Config,
    pub(crate) sleep_impl: Option<Arc<dyn AsyncSleep>>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("use_fips", &self.use_fips)
            .field("use_dual_stack", &self.use_dual_stack)
            .field("endpoint_url", &self.endpoint_url)
            .field("endpoint_resolver", &self.endpoint_resolver)
            .field("retry_config", &self.retry_config)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Load the configuration from the environment of the process.
    ///
    /// Reads `AWS_REGION` (or `AWS_DEFAULT_REGION`), `AWS_USE_FIPS_ENDPOINT`,
    /// `AWS_USE_DUALSTACK_ENDPOINT` and `AWS_ENDPOINT_URL`.
    pub fn from_env() -> Self {
        Self::from_env_config(&EnvConfig::new())
    }

    pub fn from_env_config(env: &EnvConfig) -> Self {
        Builder::from_env_config(env).build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn use_fips(&self) -> bool {
        self.use_fips
    }

    pub fn use_dual_stack(&self) -> bool {
        self.use_dual_stack
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// The parameters the endpoint resolver receives for every request.
    pub fn endpoint_params(&self) -> Params {
        Params::new(self.region.clone())
            .with_use_fips(self.use_fips)
            .with_use_dual_stack(self.use_dual_stack)
            .with_endpoint(self.endpoint_url.clone())
    }

    pub(crate) fn sleep_impl(&self) -> Option<Arc<dyn AsyncSleep>> {
        self.sleep_impl.clone().or_else(default_async_sleep)
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    use_fips: Option<bool>,
    use_dual_stack: Option<bool>,
    endpoint_url: Option<String>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    retry_config: Option<smithy_client::retry::Config>,
    sleep_impl: Option<Arc<dyn AsyncSleep>>,
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("region", &self.region)
            .field("use_fips", &self.use_fips)
            .field("use_dual_stack", &self.use_dual_stack)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the settings found in `env`.
    pub fn from_env_config(env: &EnvConfig) -> Self {
        Builder {
            region: env.region(),
            use_fips: Some(env.use_fips_or_default()),
            use_dual_stack: Some(env.use_dual_stack_or_default()),
            endpoint_url: env.endpoint_url(),
            ..Default::default()
        }
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn use_fips(mut self, use_fips: bool) -> Self {
        self.use_fips = Some(use_fips);
        self
    }

    pub fn use_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.use_dual_stack = Some(use_dual_stack);
        self
    }

    /// Send every request to `endpoint_url` instead of the regional endpoint.
    ///
    /// A custom endpoint can't be combined with FIPS or dual-stack: requests made with such a
    /// configuration fail before they are sent.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn retry_config(mut self, retry_config: smithy_client::retry::Config) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    pub fn sleep_impl(mut self, sleep_impl: Arc<dyn AsyncSleep>) -> Self {
        self.sleep_impl = Some(sleep_impl);
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            use_fips: self.use_fips.unwrap_or_default(),
            use_dual_stack: self.use_dual_stack.unwrap_or_default(),
            endpoint_url: self.endpoint_url,
            endpoint_resolver: self
                .endpoint_resolver
                .unwrap_or_else(|| Arc::new(ENDPOINT_RESOLVER)),
            retry_config: self.retry_config.unwrap_or_default(),
            sleep_impl: self.sleep_impl,
        }
    }
}
