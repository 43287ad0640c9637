/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Polling an operation until the resource it describes reaches a desired state.
//!
//! A waiter is a static, ordered table of [`Acceptor`]s plus a [`WaiterConfig`]. After each
//! poll, the acceptors are evaluated in order and the first match decides whether waiting
//! succeeds, fails, or continues.

use crate::SdkError;
use smithy_async::rt::sleep::AsyncSleep;
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// The state a waiter transitions to when an acceptor matches.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AcceptorState {
    /// The resource reached the desired state.
    Success,
    /// The resource reached a state from which the desired state can't be reached.
    Failure,
    /// Keep polling.
    Retry,
}

/// A single entry of a waiter's acceptor table.
pub struct Acceptor<O, E> {
    pub state: AcceptorState,
    pub matcher: fn(Result<&O, &E>) -> bool,
}

impl<O, E> fmt::Debug for Acceptor<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Acceptor")
            .field("state", &self.state)
            .finish()
    }
}

/// Timing for a waiter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WaiterConfig {
    pub poll_interval: Duration,
    pub max_wait: Duration,
}

impl WaiterConfig {
    pub const fn new(poll_interval: Duration, max_wait: Duration) -> Self {
        WaiterConfig {
            poll_interval,
            max_wait,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }
}

/// The result of the last poll made by a waiter.
#[derive(Debug)]
pub struct FinalPoll<O, E> {
    result: Result<O, SdkError<E>>,
}

impl<O, E> FinalPoll<O, E> {
    pub fn new(result: Result<O, SdkError<E>>) -> Self {
        FinalPoll { result }
    }

    pub fn as_result(&self) -> Result<&O, &SdkError<E>> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Result<O, SdkError<E>> {
        self.result
    }
}

/// Reasons a waiter stopped without reaching the desired state.
#[derive(Debug)]
pub enum WaiterError<O, E> {
    /// An acceptor transitioned the waiter to [`AcceptorState::Failure`].
    FailureState { final_poll: FinalPoll<O, E> },
    /// Polling again would exceed the configured maximum wait.
    ExceededMaxWait {
        max_wait: Duration,
        elapsed: Duration,
        poll_count: u32,
    },
    /// The polled operation failed in a way no acceptor handles.
    OperationFailed(SdkError<E>),
}

impl<O, E> fmt::Display for WaiterError<O, E>
where
    E: Error,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaiterError::FailureState { .. } => {
                write!(f, "waiter entered a failure state")
            }
            WaiterError::ExceededMaxWait {
                max_wait,
                elapsed,
                poll_count,
            } => write!(
                f,
                "waiter exceeded max wait time of {:?} after {} polls ({:?} elapsed)",
                max_wait, poll_count, elapsed
            ),
            WaiterError::OperationFailed(err) => write!(f, "waiter operation failed: {}", err),
        }
    }
}

impl<O, E> Error for WaiterError<O, E>
where
    O: fmt::Debug,
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WaiterError::OperationFailed(err) => Some(err),
            _ => None,
        }
    }
}

fn evaluate<O, E>(
    acceptors: &[Acceptor<O, E>],
    result: &Result<O, SdkError<E>>,
) -> Option<AcceptorState> {
    let input = match result {
        Ok(output) => Ok(output),
        Err(SdkError::ServiceError { err, .. }) => Err(err),
        // failures without a modeled error are never matched
        Err(_) => return None,
    };
    acceptors
        .iter()
        .find(|acceptor| (acceptor.matcher)(input))
        .map(|acceptor| acceptor.state)
}

/// Poll `operation` until an acceptor reaches a terminal state or `config.max_wait` elapses.
///
/// The first poll is made immediately. A poll whose result no acceptor matches is retried if it
/// succeeded; failed polls that no acceptor matches end the wait with
/// [`WaiterError::OperationFailed`].
pub async fn wait<O, E, F, Fut>(
    config: WaiterConfig,
    acceptors: &[Acceptor<O, E>],
    sleep_impl: Option<Arc<dyn AsyncSleep>>,
    mut operation: F,
) -> Result<FinalPoll<O, E>, WaiterError<O, E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<O, SdkError<E>>>,
{
    let sleep_impl = match sleep_impl {
        Some(sleep) => sleep,
        None => {
            return Err(WaiterError::OperationFailed(SdkError::ConstructionFailure(
                "a sleep implementation is required to wait".into(),
            )))
        }
    };
    let start = Instant::now();
    let mut poll_count = 0;
    loop {
        poll_count += 1;
        let result = operation().await;
        match evaluate(acceptors, &result) {
            Some(AcceptorState::Success) => {
                tracing::debug!(poll_count, "waiter succeeded");
                return Ok(FinalPoll::new(result));
            }
            Some(AcceptorState::Failure) => {
                tracing::debug!(poll_count, "waiter reached a failure state");
                return Err(WaiterError::FailureState {
                    final_poll: FinalPoll::new(result),
                });
            }
            Some(AcceptorState::Retry) => {}
            None => {
                if let Err(err) = result {
                    return Err(WaiterError::OperationFailed(err));
                }
            }
        }
        let elapsed = start.elapsed();
        if elapsed + config.poll_interval > config.max_wait {
            tracing::debug!(poll_count, ?elapsed, "waiter exceeded max wait");
            return Err(WaiterError::ExceededMaxWait {
                max_wait: config.max_wait,
                elapsed,
                poll_count,
            });
        }
        tracing::trace!(poll_count, delay = ?config.poll_interval, "waiter polling again");
        sleep_impl.sleep(config.poll_interval).await;
    }
}

#[cfg(test)]
mod test {
    use super::{wait, Acceptor, AcceptorState, WaiterConfig, WaiterError};
    use crate::SdkError;
    use smithy_async::rt::sleep::{default_async_sleep, TokioSleep};
    use smithy_http::body::SdkBody;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    enum Status {
        Creating,
        Ready,
        Broken,
    }

    #[derive(Debug)]
    struct NotFound;

    impl std::fmt::Display for NotFound {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "not found")
        }
    }

    impl std::error::Error for NotFound {}

    const ACCEPTORS: &[Acceptor<Status, NotFound>] = &[
        Acceptor {
            state: AcceptorState::Success,
            matcher: |r| matches!(r, Ok(Status::Ready)),
        },
        Acceptor {
            state: AcceptorState::Failure,
            matcher: |r| matches!(r, Ok(Status::Broken)),
        },
        Acceptor {
            state: AcceptorState::Retry,
            matcher: |r| matches!(r, Err(NotFound)),
        },
    ];

    const CONFIG: WaiterConfig =
        WaiterConfig::new(Duration::from_secs(10), Duration::from_secs(55));

    fn assert_elapsed(start: tokio::time::Instant, secs: u64) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_secs(secs) && elapsed < Duration::from_secs(secs + 1),
            "unexpected elapsed time: {:?}",
            elapsed
        );
    }

    fn service_error(err: NotFound) -> SdkError<NotFound> {
        SdkError::ServiceError {
            raw: http::Response::builder()
                .status(400)
                .body(SdkBody::empty())
                .unwrap(),
            err,
        }
    }

    fn replay(
        mut results: Vec<Result<Status, SdkError<NotFound>>>,
    ) -> impl FnMut() -> std::future::Ready<Result<Status, SdkError<NotFound>>> {
        results.reverse();
        move || std::future::ready(results.pop().unwrap_or(Ok(Status::Creating)))
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_when_acceptor_matches() {
        let start = tokio::time::Instant::now();
        let result = wait(
            CONFIG,
            ACCEPTORS,
            default_async_sleep(),
            replay(vec![
                Ok(Status::Creating),
                Err(service_error(NotFound)),
                Ok(Status::Ready),
            ]),
        )
        .await
        .expect("success");
        assert_eq!(result.as_result().ok(), Some(&Status::Ready));
        assert_elapsed(start, 20);
    }

    #[tokio::test(start_paused = true)]
    async fn first_poll_is_immediate() {
        let start = tokio::time::Instant::now();
        wait(
            CONFIG,
            ACCEPTORS,
            Some(Arc::new(TokioSleep::new())),
            replay(vec![Ok(Status::Ready)]),
        )
        .await
        .expect("success");
        assert_elapsed(start, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_acceptor_stops_waiting() {
        let err = wait(
            CONFIG,
            ACCEPTORS,
            default_async_sleep(),
            replay(vec![Ok(Status::Creating), Ok(Status::Broken)]),
        )
        .await
        .expect_err("failure state");
        match err {
            WaiterError::FailureState { final_poll } => {
                assert_eq!(final_poll.into_result().ok(), Some(Status::Broken))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_after_max_wait() {
        let start = tokio::time::Instant::now();
        let err = wait(CONFIG, ACCEPTORS, default_async_sleep(), replay(vec![]))
            .await
            .expect_err("timeout");
        match err {
            WaiterError::ExceededMaxWait { poll_count, .. } => assert_eq!(poll_count, 6),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_elapsed(start, 50);
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_failures_are_propagated() {
        let err = wait(
            CONFIG,
            ACCEPTORS,
            default_async_sleep(),
            replay(vec![Err(SdkError::DispatchFailure("connection reset".into()))]),
        )
        .await
        .expect_err("operation failed");
        assert!(matches!(
            err,
            WaiterError::OperationFailed(SdkError::DispatchFailure(_))
        ));
    }

    #[tokio::test]
    async fn unmatched_service_errors_are_propagated() {
        const SUCCESS_ONLY: &[Acceptor<Status, NotFound>] = &[Acceptor {
            state: AcceptorState::Success,
            matcher: |r| matches!(r, Ok(Status::Ready)),
        }];
        let err = wait(
            CONFIG,
            SUCCESS_ONLY,
            default_async_sleep(),
            replay(vec![Err(service_error(NotFound))]),
        )
        .await
        .expect_err("operation failed");
        assert!(matches!(
            err,
            WaiterError::OperationFailed(SdkError::ServiceError { .. })
        ));
    }

    #[tokio::test]
    async fn missing_sleep_impl_is_a_construction_failure() {
        let err = wait(CONFIG, ACCEPTORS, None, replay(vec![]))
            .await
            .expect_err("no sleep");
        assert!(matches!(
            err,
            WaiterError::OperationFailed(SdkError::ConstructionFailure(_))
        ));
    }
}
