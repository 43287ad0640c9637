/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, PathAndQuery, Scheme, Uri};
use std::borrow::Cow;
use std::str::FromStr;

/// API Endpoint
///
/// The scheme and authority of this URI replace those of the request. A path on the endpoint
/// is prepended to the request path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    uri: Uri,
}

#[derive(Debug, Eq, PartialEq, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidEndpoint {
    #[error("endpoint must contain a valid authority (eg. `service.us-east-1.amazonaws.com`)")]
    EndpointMustHaveAuthority,
    #[error("endpoint must contain a scheme (eg. `https://`)")]
    EndpointMustHaveScheme,
    #[error("`{0}` is not a valid URI")]
    InvalidUri(String),
}

impl Endpoint {
    /// Create a new endpoint from a URI. The URI must be absolute.
    pub fn new(uri: Uri) -> Result<Self, InvalidEndpoint> {
        if uri.scheme().is_none() {
            return Err(InvalidEndpoint::EndpointMustHaveScheme);
        }
        if uri.authority().is_none() {
            return Err(InvalidEndpoint::EndpointMustHaveAuthority);
        }
        Ok(Endpoint { uri })
    }

    /// Parse an endpoint from a string such as `https://localhost:8000`
    pub fn from_str(uri: &str) -> Result<Self, InvalidEndpoint> {
        let uri = Uri::from_str(uri).map_err(|_| InvalidEndpoint::InvalidUri(uri.to_string()))?;
        Self::new(uri)
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sets the endpoint on `uri`
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        let authority: Authority = self
            .uri
            .authority()
            .cloned()
            .ok_or(InvalidEndpoint::EndpointMustHaveAuthority)?;
        let scheme: Scheme = self
            .uri
            .scheme()
            .cloned()
            .ok_or(InvalidEndpoint::EndpointMustHaveScheme)?;
        let path_and_query = PathAndQuery::from_str(&Self::merge_paths(&self.uri, uri))
            .map_err(|_| InvalidEndpoint::InvalidUri(self.uri.to_string()))?;
        *uri = Uri::builder()
            .authority(authority)
            .scheme(scheme)
            .path_and_query(path_and_query)
            .build()
            .map_err(|_| InvalidEndpoint::InvalidUri(self.uri.to_string()))?;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, InvalidEndpoint};
    use http::Uri;

    #[test]
    fn endpoint_replaces_scheme_and_authority() {
        let ep = Endpoint::from_str("https://cognito-identity.us-east-1.amazonaws.com").unwrap();
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(
            uri,
            Uri::from_static("https://cognito-identity.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn endpoint_custom_port() {
        let ep = Endpoint::from_str("http://localhost:8000").unwrap();
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(uri, Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn endpoint_with_path() {
        for ep in &[
            // check that trailing slashes are properly normalized
            "https://proxy.example.com/private",
            "https://proxy.example.com/private/",
        ] {
            let ep = Endpoint::from_str(ep).unwrap();
            let mut uri = Uri::from_static("/");
            ep.set_endpoint(&mut uri).expect("valid endpoint");
            assert_eq!(uri, Uri::from_static("https://proxy.example.com/private/"));
        }
    }

    #[test]
    fn relative_endpoints_are_rejected() {
        assert_eq!(
            Endpoint::from_str("/just/a/path"),
            Err(InvalidEndpoint::EndpointMustHaveScheme)
        );
        assert_eq!(
            Endpoint::new(Uri::from_static("localhost:8000")),
            Err(InvalidEndpoint::EndpointMustHaveScheme)
        );
    }
}
