/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod partition;

use crate::partition::{Partition, Protocol};
use aws_types::region::Region;
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Inputs to endpoint resolution, loaded from the client config for every request.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params {
    region: Option<Region>,
    use_fips: bool,
    use_dual_stack: bool,
    endpoint: Option<String>,
}

impl Params {
    pub fn new(region: Option<Region>) -> Self {
        Params {
            region,
            ..Default::default()
        }
    }

    pub fn with_use_fips(mut self, use_fips: bool) -> Self {
        self.use_fips = use_fips;
        self
    }

    pub fn with_use_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.use_dual_stack = use_dual_stack;
        self
    }

    /// Use a custom endpoint, such as `http://localhost:8000`, instead of a generated one.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
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

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

/// Resolve the endpoint a request should be sent to.
pub trait ResolveAwsEndpoint: Send + Sync + Debug {
    fn resolve_endpoint(&self, params: &Params) -> Result<Endpoint, BoxError>;
}

/// A fixed endpoint ignores the region and variant settings.
impl ResolveAwsEndpoint for Endpoint {
    fn resolve_endpoint(&self, _params: &Params) -> Result<Endpoint, BoxError> {
        Ok(self.clone())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveEndpointError {
    #[error("a region must be set to resolve an endpoint")]
    MissingRegion,
    #[error("`{0}` is not a valid region")]
    InvalidRegion(String),
    #[error("a custom endpoint cannot be combined with FIPS")]
    CustomEndpointWithFips,
    #[error("a custom endpoint cannot be combined with dual-stack")]
    CustomEndpointWithDualStack,
    #[error("invalid endpoint")]
    InvalidEndpoint(#[from] InvalidEndpoint),
}

/// The standard resolver for a regional AWS service.
///
/// Hosts are built as `{prefix}.{region}.{dns suffix}`, where the prefix switches to the FIPS
/// prefix when FIPS is enabled and the DNS suffix depends on the region's partition and on
/// dual-stack.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DefaultAwsEndpointResolver {
    endpoint_prefix: &'static str,
    fips_prefix: &'static str,
    protocol: Protocol,
}

impl DefaultAwsEndpointResolver {
    pub const fn new(endpoint_prefix: &'static str, fips_prefix: &'static str) -> Self {
        DefaultAwsEndpointResolver {
            endpoint_prefix,
            fips_prefix,
            protocol: Protocol::Https,
        }
    }

    pub fn resolve(&self, params: &Params) -> Result<Endpoint, ResolveEndpointError> {
        if let Some(endpoint) = params.endpoint() {
            if params.use_fips() {
                return Err(ResolveEndpointError::CustomEndpointWithFips);
            }
            if params.use_dual_stack() {
                return Err(ResolveEndpointError::CustomEndpointWithDualStack);
            }
            return Ok(Endpoint::from_str(endpoint)?);
        }
        let region = params.region().ok_or(ResolveEndpointError::MissingRegion)?;
        if !is_valid_host_label(region.as_ref()) {
            return Err(ResolveEndpointError::InvalidRegion(region.to_string()));
        }
        let partition = Partition::for_region(region);
        let prefix = if params.use_fips() {
            self.fips_prefix
        } else {
            self.endpoint_prefix
        };
        let uri = format!(
            "{}://{}.{}.{}",
            self.protocol.as_str(),
            prefix,
            region,
            partition.dns_suffix(params.use_dual_stack())
        );
        Ok(Endpoint::from_str(&uri)?)
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn resolve_endpoint(&self, params: &Params) -> Result<Endpoint, BoxError> {
        self.resolve(params).map_err(|err| err.into())
    }
}

fn is_valid_host_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint resolver from the property bag.
/// 2. Resolve an endpoint given the [`Params`](Params) in the property bag.
/// 3. Apply the endpoint to the URI in the request
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug, Error)]
pub enum AwsEndpointStageError {
    #[error("no endpoint resolver was set on the request")]
    NoEndpointResolver,
    #[error("no endpoint parameters were set on the request")]
    NoEndpointParams,
    #[error("failed to resolve endpoint")]
    EndpointResolutionError(#[source] BoxError),
    #[error("resolved endpoint could not be applied to the request")]
    InvalidEndpoint(#[from] InvalidEndpoint),
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider =
                get_endpoint_resolver(props).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let params = props
                .get::<Params>()
                .ok_or(AwsEndpointStageError::NoEndpointParams)?;
            let endpoint = provider
                .resolve_endpoint(params)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, params = ?params, "resolved endpoint");
            endpoint.set_endpoint(http_req.uri_mut())?;
            Ok(http_req)
        })
    }
}
