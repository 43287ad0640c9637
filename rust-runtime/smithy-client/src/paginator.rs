/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Drivers for operations that return a continuation token.
//!
//! A paginator repeatedly calls one operation, feeding the token from each page into the next
//! request. Pages are fetched lazily, one at a time, as the returned stream is polled.

use std::future::Future;
use std::pin::Pin;
use tokio_stream::{Stream, StreamExt};

/// A boxed stream of pages or items.
///
/// The stream is boxed so that callers don't have to pin it before calling `next()`.
pub type PaginationStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// Stream the pages of a paginated operation.
///
/// `call` is invoked with `first_token` for the first page and with the token extracted by
/// `next_token` for each following page. The stream ends after:
/// - a page without a token, or with an empty token
/// - a page that returns the same token that was sent to request it
/// - the first error, which is yielded
pub fn paginate<P, E, F, Fut>(
    first_token: Option<String>,
    mut call: F,
    next_token: fn(&P) -> Option<&String>,
) -> PaginationStream<Result<P, E>>
where
    F: FnMut(Option<String>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<P, E>> + Send + 'static,
    P: Send + 'static,
    E: Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut token = first_token;
        let mut page_number: usize = 0;
        loop {
            page_number += 1;
            match call(token.clone()).await {
                Ok(page) => {
                    let next = next_token(&page).filter(|t| !t.is_empty()).cloned();
                    yield Ok(page);
                    match next {
                        None => {
                            tracing::debug!(pages = page_number, "pagination complete");
                            break;
                        }
                        Some(next) if token.as_ref() == Some(&next) => {
                            tracing::debug!(
                                token = %next,
                                "service returned the token it was sent; stopping pagination"
                            );
                            break;
                        }
                        Some(next) => {
                            tracing::debug!(page = page_number, "advancing to next page");
                            token = Some(next);
                        }
                    }
                }
                Err(err) => {
                    yield Err(err);
                    break;
                }
            }
        }
    })
}

/// Flatten a stream of pages into a stream of the items contained in each page.
///
/// An error page is yielded once and ends the stream.
pub fn flatten_items<P, I, E>(
    pages: PaginationStream<Result<P, E>>,
    items: fn(P) -> Vec<I>,
) -> PaginationStream<Result<I, E>>
where
    P: Send + 'static,
    I: Send + 'static,
    E: Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut pages = pages;
        while let Some(page) = pages.next().await {
            match page {
                Ok(page) => {
                    for item in items(page) {
                        yield Ok(item);
                    }
                }
                Err(err) => {
                    yield Err(err);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod test {
    use super::{flatten_items, paginate};
    use std::sync::{Arc, Mutex};
    use tokio_stream::StreamExt;

    #[derive(Debug, Clone, PartialEq)]
    struct Page {
        items: Vec<u32>,
        next_token: Option<String>,
    }

    fn next_token(page: &Page) -> Option<&String> {
        page.next_token.as_ref()
    }

    fn page(items: &[u32], next_token: Option<&str>) -> Page {
        Page {
            items: items.to_vec(),
            next_token: next_token.map(|t| t.to_string()),
        }
    }

    /// Replays `pages` in order, recording each token it was called with.
    fn service(
        pages: Vec<Result<Page, &'static str>>,
    ) -> (
        impl FnMut(Option<String>) -> std::future::Ready<Result<Page, &'static str>> + Send,
        Arc<Mutex<Vec<Option<String>>>>,
    ) {
        let tokens = Arc::new(Mutex::new(vec![]));
        let recorded = tokens.clone();
        let mut pages = pages.into_iter();
        let call = move |token: Option<String>| {
            recorded.lock().unwrap().push(token);
            std::future::ready(pages.next().unwrap_or(Err("no more pages")))
        };
        (call, tokens)
    }

    #[tokio::test]
    async fn follows_tokens_until_absent() {
        let (call, tokens) = service(vec![
            Ok(page(&[1, 2], Some("a"))),
            Ok(page(&[3], Some("b"))),
            Ok(page(&[4], None)),
        ]);
        let pages: Vec<_> = paginate(None, call, next_token).collect().await;
        assert_eq!(pages.len(), 3);
        assert_eq!(
            *tokens.lock().unwrap(),
            vec![None, Some("a".to_string()), Some("b".to_string())]
        );
    }

    #[tokio::test]
    async fn stops_after_first_page_without_token() {
        let (call, tokens) = service(vec![Ok(page(&[1], None)), Ok(page(&[2], None))]);
        let pages: Vec<_> = paginate(None, call, next_token).collect().await;
        assert_eq!(pages, vec![Ok(page(&[1], None))]);
        assert_eq!(tokens.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_token_ends_pagination() {
        let (call, _) = service(vec![Ok(page(&[1], Some(""))), Ok(page(&[2], None))]);
        let pages: Vec<_> = paginate(None, call, next_token).collect().await;
        assert_eq!(pages.len(), 1);
    }

    #[tokio::test]
    async fn repeated_token_ends_pagination() {
        let (call, tokens) = service(vec![
            Ok(page(&[1], Some("a"))),
            Ok(page(&[2], Some("a"))),
            Ok(page(&[3], None)),
        ]);
        let pages: Vec<_> = paginate(None, call, next_token).collect().await;
        assert_eq!(pages.len(), 2);
        assert_eq!(tokens.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn starts_from_provided_token() {
        let (call, tokens) = service(vec![Ok(page(&[9], None))]);
        let _: Vec<_> = paginate(Some("start".to_string()), call, next_token)
            .collect()
            .await;
        assert_eq!(*tokens.lock().unwrap(), vec![Some("start".to_string())]);
    }

    #[tokio::test]
    async fn errors_end_the_stream() {
        let (call, tokens) = service(vec![
            Ok(page(&[1], Some("a"))),
            Err("boom"),
            Ok(page(&[2], None)),
        ]);
        let mut pages = paginate(None, call, next_token);
        assert!(pages.try_next().await.unwrap().is_some());
        assert_eq!(pages.try_next().await, Err("boom"));
        assert!(pages.next().await.is_none());
        assert_eq!(tokens.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn items_are_flattened_across_pages() {
        let (call, _) = service(vec![
            Ok(page(&[1, 2], Some("a"))),
            Ok(page(&[], Some("b"))),
            Ok(page(&[3], None)),
        ]);
        let items: Result<Vec<u32>, _> =
            flatten_items(paginate(None, call, next_token), |p: Page| p.items)
                .collect()
                .await;
        assert_eq!(items, Ok(vec![1, 2, 3]));
    }
}
