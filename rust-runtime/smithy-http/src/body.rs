/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Responses are converted into
/// an `SdkBody` as soon as they leave the connector so that the raw response can be handed
/// back to callers alongside parsed output.
#[pin_project::pin_project]
pub struct SdkBody {
    #[pin]
    inner: Inner,
}

#[pin_project::pin_project(project = InnerProj)]
enum Inner {
    Once(Option<Bytes>),
    Streaming(#[pin] hyper::Body),
    Taken,
}

impl Debug for Inner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self {
            Inner::Once(once) => f.debug_tuple("Once").field(once).finish(),
            Inner::Streaming(streaming) => f.debug_tuple("Streaming").field(streaming).finish(),
            Inner::Taken => f.debug_tuple("Taken").finish(),
        }
    }
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkBody").field("inner", &self.inner).finish()
    }
}

impl SdkBody {
    /// Construct an SdkBody from a Boxed implementation of http::Body
    pub fn from_streaming(body: hyper::Body) -> Self {
        Self {
            inner: Inner::Streaming(body),
        }
    }

    /// A body that has had its contents moved out, eg. after it was loaded into memory.
    pub fn taken() -> Self {
        Self { inner: Inner::Taken }
    }

    pub fn empty() -> Self {
        Self {
            inner: Inner::Once(None),
        }
    }

    fn poll_inner(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Bytes, BoxError>>> {
        match self.project().inner.project() {
            InnerProj::Once(opt) => {
                let data = opt.take();
                match data {
                    Some(bytes) if bytes.is_empty() => Poll::Ready(None),
                    Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                    None => Poll::Ready(None),
                }
            }
            InnerProj::Streaming(body) => {
                http_body::Body::poll_data(body, cx).map(|opt| opt.map(|res| res.map_err(|e| e.into())))
            }
            InnerProj::Taken => {
                Poll::Ready(Some(Err("A `Taken` body should never be polled".into())))
            }
        }
    }

    /// If possible, return a reference to this body as `&[u8]`
    ///
    /// If this SdkBody is NOT streaming, this will return the byte slab
    /// If this SdkBody is streaming, this will return `None`
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            Inner::Once(Some(b)) => Some(b),
            Inner::Once(None) => Some(&[]),
            _ => None,
        }
    }

    /// Streaming bodies cannot be cloned, so retries are only possible for in-memory bodies.
    pub fn try_clone(&self) -> Option<Self> {
        match &self.inner {
            Inner::Once(bytes) => Some(SdkBody {
                inner: Inner::Once(bytes.clone()),
            }),
            _ => None,
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        http_body::Body::size_hint(self).exact()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(s.as_bytes())
    }
}

impl From<&[u8]> for SdkBody {
    fn from(data: &[u8]) -> Self {
        SdkBody::from(Bytes::copy_from_slice(data))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody {
            inner: Inner::Once(Some(bytes)),
        }
    }
}

impl From<hyper::Body> for SdkBody {
    fn from(body: hyper::Body) -> Self {
        SdkBody::from_streaming(body)
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> Self {
        Self::from(Bytes::from(data))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_data(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner(cx)
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match &self.inner {
            Inner::Once(None) => true,
            Inner::Once(Some(bytes)) => bytes.is_empty(),
            Inner::Streaming(hyper_body) => hyper_body.is_end_stream(),
            Inner::Taken => true,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match &self.inner {
            Inner::Once(None) => http_body::SizeHint::with_exact(0),
            Inner::Once(Some(bytes)) => http_body::SizeHint::with_exact(bytes.len() as u64),
            Inner::Streaming(hyper_body) => hyper_body.size_hint(),
            Inner::Taken => http_body::SizeHint::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;
    use std::pin::Pin;

    #[test]
    fn valid_size_hint() {
        assert_eq!(SdkBody::from("hello").size_hint().exact(), Some(5));
        assert_eq!(SdkBody::from("").size_hint().exact(), Some(0));
        assert_eq!(SdkBody::empty().content_length(), Some(0));
    }

    #[test]
    fn streaming_bodies_cannot_be_cloned() {
        let once = SdkBody::from("abc");
        assert_eq!(once.try_clone().and_then(|b| b.bytes().map(|b| b.to_vec())), Some(b"abc".to_vec()));
        assert!(SdkBody::from(hyper::Body::from("abc")).try_clone().is_none());
    }

    #[tokio::test]
    async fn once_body_yields_its_data_then_ends() {
        let mut body = SdkBody::from("hello");
        let mut body = Pin::new(&mut body);
        let data = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(data.as_ref(), b"hello");
        assert!(body.data().await.is_none());
    }

    #[tokio::test]
    async fn taken_body_errors() {
        let mut body = SdkBody::taken();
        let res = Pin::new(&mut body).data().await.expect("yields an error");
        assert!(res.is_err());
    }
}
