/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Type-erased connectors.
//!
//! Service clients store a [`DynConnector`] so that their type does not depend on which
//! transport they were constructed with.

use crate::BoxError;
use smithy_http::body::SdkBody;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Service, ServiceExt};

type BoxFuture = Pin<Box<dyn Future<Output = Result<http::Response<SdkBody>, BoxError>> + Send>>;

/// A connector with its concrete type erased.
///
/// Unlike `tower::util::BoxCloneService`, a `DynConnector` is `Sync`, so clients holding one can
/// be shared between tasks.
#[derive(Clone)]
pub struct DynConnector(Arc<dyn Fn(http::Request<SdkBody>) -> BoxFuture + Send + Sync>);

impl DynConnector {
    /// Erase the type of `connector`.
    pub fn new<C>(connector: C) -> Self
    where
        C: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Clone
            + Send
            + Sync
            + 'static,
        C::Error: Into<BoxError> + Send + Sync + 'static,
        C::Future: Send + 'static,
    {
        DynConnector(Arc::new(move |req| {
            Box::pin(dispatch(connector.clone(), req)) as BoxFuture
        }))
    }
}

async fn dispatch<C>(
    mut connector: C,
    req: http::Request<SdkBody>,
) -> Result<http::Response<SdkBody>, BoxError>
where
    C: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>,
    C::Error: Into<BoxError>,
{
    let connector = match connector.ready().await {
        Ok(connector) => connector,
        Err(err) => return Err(err.into()),
    };
    connector.call(req).await.map_err(|err| err.into())
}

impl fmt::Debug for DynConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynConnector").finish()
    }
}

impl Service<http::Request<SdkBody>> for DynConnector {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = BoxFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        (self.0)(req)
    }
}

#[cfg(test)]
mod test {
    use super::DynConnector;
    use smithy_http::body::SdkBody;
    use tower::{Service, ServiceExt};

    fn is_send_sync<T: Send + Sync>(_: &T) {}

    #[tokio::test]
    async fn erased_connector_forwards_requests() {
        let mut conn = DynConnector::new(tower::service_fn(
            |req: http::Request<SdkBody>| async move {
                Ok::<_, std::convert::Infallible>(http::Response::new(SdkBody::from(
                    req.uri().path().to_string(),
                )))
            },
        ));
        is_send_sync(&conn);
        let resp = conn
            .ready()
            .await
            .unwrap()
            .call(
                http::Request::builder()
                    .uri("https://example.com/path")
                    .body(SdkBody::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.body().bytes(), Some(&b"/path"[..]));
    }
}
