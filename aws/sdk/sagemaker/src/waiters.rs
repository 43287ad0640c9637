/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Waiters poll a describe operation until the resource reaches a terminal state.
//!
//! ```no_run
//! # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
//! use std::time::Duration;
//! let client = sagemaker::Client::from_env();
//! let final_poll = client
//!     .wait_until_endpoint_in_service()
//!     .endpoint_name("my-endpoint")
//!     .max_wait(Duration::from_secs(600))
//!     .wait()
//!     .await?;
//! println!("{:?}", final_poll.as_result().ok().and_then(|out| out.endpoint_arn.as_ref()));
//! # Ok(())
//! # }
//! ```

use crate::client::fluent_builders;
use crate::client::Handle;
use crate::error::{DescribeEndpointError, DescribeTrainingJobError};
use crate::input::{DescribeEndpointInput, DescribeTrainingJobInput};
use crate::model::{EndpointStatus, TrainingJobStatus};
use crate::output::{DescribeEndpointOutput, DescribeTrainingJobOutput};
use smithy_client::waiter::{wait, Acceptor, AcceptorState, FinalPoll, WaiterConfig, WaiterError};
use std::sync::Arc;
use std::time::Duration;

const VALIDATION_EXCEPTION: &str = "ValidationException";

fn training_job_status(
    result: Result<&DescribeTrainingJobOutput, &DescribeTrainingJobError>,
    expected: TrainingJobStatus,
) -> bool {
    matches!(result, Ok(output) if output.training_job_status.as_ref() == Some(&expected))
}

fn endpoint_status(
    result: Result<&DescribeEndpointOutput, &DescribeEndpointError>,
    expected: EndpointStatus,
) -> bool {
    matches!(result, Ok(output) if output.endpoint_status.as_ref() == Some(&expected))
}

const TRAINING_JOB_COMPLETED_OR_STOPPED: &[Acceptor<
    DescribeTrainingJobOutput,
    DescribeTrainingJobError,
>] = &[
    Acceptor {
        state: AcceptorState::Success,
        matcher: |r| training_job_status(r, TrainingJobStatus::Completed),
    },
    Acceptor {
        state: AcceptorState::Success,
        matcher: |r| training_job_status(r, TrainingJobStatus::Stopped),
    },
    Acceptor {
        state: AcceptorState::Failure,
        matcher: |r| training_job_status(r, TrainingJobStatus::Failed),
    },
    Acceptor {
        state: AcceptorState::Failure,
        matcher: |r| matches!(r, Err(err) if err.code() == Some(VALIDATION_EXCEPTION)),
    },
];

const ENDPOINT_IN_SERVICE: &[Acceptor<DescribeEndpointOutput, DescribeEndpointError>] = &[
    Acceptor {
        state: AcceptorState::Success,
        matcher: |r| endpoint_status(r, EndpointStatus::InService),
    },
    Acceptor {
        state: AcceptorState::Failure,
        matcher: |r| endpoint_status(r, EndpointStatus::Failed),
    },
    Acceptor {
        state: AcceptorState::Failure,
        matcher: |r| matches!(r, Err(err) if err.code() == Some(VALIDATION_EXCEPTION)),
    },
];

const ENDPOINT_DELETED: &[Acceptor<DescribeEndpointOutput, DescribeEndpointError>] = &[
    Acceptor {
        state: AcceptorState::Success,
        matcher: |r| matches!(r, Err(err) if err.code() == Some(VALIDATION_EXCEPTION)),
    },
    Acceptor {
        state: AcceptorState::Failure,
        matcher: |r| endpoint_status(r, EndpointStatus::Failed),
    },
];

macro_rules! waiter {
    (
        $(#[$doc:meta])*
        $waiter:ident {
            operation: $operation:ident($input:ident) -> Result<$output:ident, $error:ident>,
            acceptors: $acceptors:ident,
            defaults: ($interval:expr, $max_wait:expr),
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $waiter {
            handle: Arc<Handle>,
            inner: $input,
            config: WaiterConfig,
        }

        impl $waiter {
            pub(crate) fn new(handle: Arc<Handle>) -> Self {
                Self {
                    handle,
                    inner: Default::default(),
                    config: WaiterConfig::new(
                        Duration::from_secs($interval),
                        Duration::from_secs($max_wait),
                    ),
                }
            }

            /// Time between polls.
            pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
                self.config = self.config.with_poll_interval(poll_interval);
                self
            }

            /// Give up once polling again would exceed this duration.
            pub fn max_wait(mut self, max_wait: Duration) -> Self {
                self.config = self.config.with_max_wait(max_wait);
                self
            }

            pub async fn wait(
                self,
            ) -> Result<FinalPoll<$output, $error>, WaiterError<$output, $error>> {
                let Self { handle, inner, config } = self;
                tracing::debug!(waiter = stringify!($waiter), ?config, "starting waiter");
                wait(config, $acceptors, handle.conf.sleep_impl(), || {
                    fluent_builders::$operation::with_input(handle.clone(), inner.clone()).send()
                })
                .await
            }
        }
    };
}

waiter! {
    /// Waits for `DescribeTrainingJob` to report `Completed` or `Stopped`.
    TrainingJobCompletedOrStopped {
        operation: DescribeTrainingJob(DescribeTrainingJobInput)
            -> Result<DescribeTrainingJobOutput, DescribeTrainingJobError>,
        acceptors: TRAINING_JOB_COMPLETED_OR_STOPPED,
        defaults: (120, 6 * 60 * 60),
    }
}

waiter! {
    /// Waits for `DescribeEndpoint` to report `InService`.
    EndpointInService {
        operation: DescribeEndpoint(DescribeEndpointInput)
            -> Result<DescribeEndpointOutput, DescribeEndpointError>,
        acceptors: ENDPOINT_IN_SERVICE,
        defaults: (30, 60 * 60),
    }
}

waiter! {
    /// Waits until `DescribeEndpoint` rejects the endpoint name because it no longer exists.
    EndpointDeleted {
        operation: DescribeEndpoint(DescribeEndpointInput)
            -> Result<DescribeEndpointOutput, DescribeEndpointError>,
        acceptors: ENDPOINT_DELETED,
        defaults: (30, 30 * 60),
    }
}

impl TrainingJobCompletedOrStopped {
    pub fn training_job_name(mut self, input: impl Into<String>) -> Self {
        self.inner.training_job_name = Some(input.into());
        self
    }

    pub fn set_training_job_name(mut self, input: Option<String>) -> Self {
        self.inner.training_job_name = input;
        self
    }
}

impl EndpointInService {
    pub fn endpoint_name(mut self, input: impl Into<String>) -> Self {
        self.inner.endpoint_name = Some(input.into());
        self
    }

    pub fn set_endpoint_name(mut self, input: Option<String>) -> Self {
        self.inner.endpoint_name = input;
        self
    }
}

impl EndpointDeleted {
    pub fn endpoint_name(mut self, input: impl Into<String>) -> Self {
        self.inner.endpoint_name = Some(input.into());
        self
    }

    pub fn set_endpoint_name(mut self, input: Option<String>) -> Self {
        self.inner.endpoint_name = input;
        self
    }
}
