/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::waiters;
use smithy_client::bounds::SmithyConnector;
use smithy_client::erase::DynConnector;
use std::fmt;
use std::sync::Arc;

pub(crate) struct Handle {
    pub(crate) client: aws_hyper::Client,
    pub(crate) conf: Config,
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("conf", &self.conf).finish()
    }
}

/// Client for Amazon SageMaker Service
#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    #[cfg(feature = "rustls")]
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }

    #[cfg(feature = "rustls")]
    pub fn from_conf(conf: Config) -> Self {
        Self::from_dyn_conn(conf, aws_hyper::https())
    }

    pub fn from_conf_conn<C>(conf: Config, conn: C) -> Self
    where
        C: SmithyConnector + Sync,
    {
        Self::from_dyn_conn(conf, DynConnector::new(conn))
    }

    fn from_dyn_conn(conf: Config, conn: DynConnector) -> Self {
        let client = aws_hyper::build_client(conn, conf.retry_config.clone(), conf.sleep_impl());
        Client {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    pub fn describe_training_job(&self) -> fluent_builders::DescribeTrainingJob {
        fluent_builders::DescribeTrainingJob::new(self.handle.clone())
    }

    pub fn list_training_jobs(&self) -> fluent_builders::ListTrainingJobs {
        fluent_builders::ListTrainingJobs::new(self.handle.clone())
    }

    pub fn stop_training_job(&self) -> fluent_builders::StopTrainingJob {
        fluent_builders::StopTrainingJob::new(self.handle.clone())
    }

    pub fn describe_endpoint(&self) -> fluent_builders::DescribeEndpoint {
        fluent_builders::DescribeEndpoint::new(self.handle.clone())
    }

    pub fn list_endpoints(&self) -> fluent_builders::ListEndpoints {
        fluent_builders::ListEndpoints::new(self.handle.clone())
    }

    /// Wait until a training job completes or is stopped.
    pub fn wait_until_training_job_completed_or_stopped(
        &self,
    ) -> waiters::TrainingJobCompletedOrStopped {
        waiters::TrainingJobCompletedOrStopped::new(self.handle.clone())
    }

    /// Wait until an endpoint is in service.
    pub fn wait_until_endpoint_in_service(&self) -> waiters::EndpointInService {
        waiters::EndpointInService::new(self.handle.clone())
    }

    /// Wait until an endpoint no longer exists.
    pub fn wait_until_endpoint_deleted(&self) -> waiters::EndpointDeleted {
        waiters::EndpointDeleted::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::Handle;
    use crate::error::*;
    use crate::input::*;
    use crate::model::{EndpointSortKey, EndpointStatus, SortBy, SortOrder, TrainingJobStatus};
    use crate::output::*;
    use crate::paginator;
    use smithy_client::SdkError;
    use smithy_http::operation::BuildError;
    use smithy_types::Instant;
    use std::sync::Arc;

    fn construction_failure<E>(err: BuildError) -> SdkError<E> {
        SdkError::ConstructionFailure(err.into())
    }

    /// Returns information about a training job.
    #[derive(Debug)]
    pub struct DescribeTrainingJob {
        handle: Arc<Handle>,
        inner: DescribeTrainingJobInput,
    }

    impl DescribeTrainingJob {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self::with_input(handle, Default::default())
        }

        pub(crate) fn with_input(handle: Arc<Handle>, inner: DescribeTrainingJobInput) -> Self {
            Self { handle, inner }
        }

        pub async fn send(
            self,
        ) -> Result<DescribeTrainingJobOutput, SdkError<DescribeTrainingJobError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn training_job_name(mut self, input: impl Into<String>) -> Self {
            self.inner.training_job_name = Some(input.into());
            self
        }

        pub fn set_training_job_name(mut self, input: Option<String>) -> Self {
            self.inner.training_job_name = input;
            self
        }
    }

    /// Lists training jobs.
    #[derive(Debug)]
    pub struct ListTrainingJobs {
        handle: Arc<Handle>,
        inner: ListTrainingJobsInput,
    }

    impl ListTrainingJobs {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self::with_input(handle, Default::default())
        }

        pub(crate) fn with_input(handle: Arc<Handle>, inner: ListTrainingJobsInput) -> Self {
            Self { handle, inner }
        }

        pub async fn send(self) -> Result<ListTrainingJobsOutput, SdkError<ListTrainingJobsError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn into_paginator(self) -> paginator::ListTrainingJobsPaginator {
            paginator::ListTrainingJobsPaginator::new(self.handle, self.inner)
        }

        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.inner.next_token = Some(input.into());
            self
        }

        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.inner.next_token = input;
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner.max_results = Some(input);
            self
        }

        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.inner.max_results = input;
            self
        }

        /// Only jobs created after this time.
        pub fn creation_time_after(mut self, input: Instant) -> Self {
            self.inner.creation_time_after = Some(input);
            self
        }

        pub fn set_creation_time_after(mut self, input: Option<Instant>) -> Self {
            self.inner.creation_time_after = input;
            self
        }

        /// Only jobs created before this time.
        pub fn creation_time_before(mut self, input: Instant) -> Self {
            self.inner.creation_time_before = Some(input);
            self
        }

        pub fn set_creation_time_before(mut self, input: Option<Instant>) -> Self {
            self.inner.creation_time_before = input;
            self
        }

        pub fn last_modified_time_after(mut self, input: Instant) -> Self {
            self.inner.last_modified_time_after = Some(input);
            self
        }

        pub fn set_last_modified_time_after(mut self, input: Option<Instant>) -> Self {
            self.inner.last_modified_time_after = input;
            self
        }

        pub fn last_modified_time_before(mut self, input: Instant) -> Self {
            self.inner.last_modified_time_before = Some(input);
            self
        }

        pub fn set_last_modified_time_before(mut self, input: Option<Instant>) -> Self {
            self.inner.last_modified_time_before = input;
            self
        }

        pub fn name_contains(mut self, input: impl Into<String>) -> Self {
            self.inner.name_contains = Some(input.into());
            self
        }

        pub fn set_name_contains(mut self, input: Option<String>) -> Self {
            self.inner.name_contains = input;
            self
        }

        pub fn status_equals(mut self, input: TrainingJobStatus) -> Self {
            self.inner.status_equals = Some(input);
            self
        }

        pub fn set_status_equals(mut self, input: Option<TrainingJobStatus>) -> Self {
            self.inner.status_equals = input;
            self
        }

        pub fn sort_by(mut self, input: SortBy) -> Self {
            self.inner.sort_by = Some(input);
            self
        }

        pub fn set_sort_by(mut self, input: Option<SortBy>) -> Self {
            self.inner.sort_by = input;
            self
        }

        pub fn sort_order(mut self, input: SortOrder) -> Self {
            self.inner.sort_order = Some(input);
            self
        }

        pub fn set_sort_order(mut self, input: Option<SortOrder>) -> Self {
            self.inner.sort_order = input;
            self
        }
    }

    /// Stops a training job. The job's status moves to `Stopping`, then `Stopped`.
    #[derive(Debug)]
    pub struct StopTrainingJob {
        handle: Arc<Handle>,
        inner: StopTrainingJobInput,
    }

    impl StopTrainingJob {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<StopTrainingJobOutput, SdkError<StopTrainingJobError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn training_job_name(mut self, input: impl Into<String>) -> Self {
            self.inner.training_job_name = Some(input.into());
            self
        }

        pub fn set_training_job_name(mut self, input: Option<String>) -> Self {
            self.inner.training_job_name = input;
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeEndpoint {
        handle: Arc<Handle>,
        inner: DescribeEndpointInput,
    }

    impl DescribeEndpoint {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self::with_input(handle, Default::default())
        }

        pub(crate) fn with_input(handle: Arc<Handle>, inner: DescribeEndpointInput) -> Self {
            Self { handle, inner }
        }

        pub async fn send(
            self,
        ) -> Result<DescribeEndpointOutput, SdkError<DescribeEndpointError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn endpoint_name(mut self, input: impl Into<String>) -> Self {
            self.inner.endpoint_name = Some(input.into());
            self
        }

        pub fn set_endpoint_name(mut self, input: Option<String>) -> Self {
            self.inner.endpoint_name = input;
            self
        }
    }

    #[derive(Debug)]
    pub struct ListEndpoints {
        handle: Arc<Handle>,
        inner: ListEndpointsInput,
    }

    impl ListEndpoints {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self::with_input(handle, Default::default())
        }

        pub(crate) fn with_input(handle: Arc<Handle>, inner: ListEndpointsInput) -> Self {
            Self { handle, inner }
        }

        pub async fn send(self) -> Result<ListEndpointsOutput, SdkError<ListEndpointsError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn into_paginator(self) -> paginator::ListEndpointsPaginator {
            paginator::ListEndpointsPaginator::new(self.handle, self.inner)
        }

        pub fn sort_by(mut self, input: EndpointSortKey) -> Self {
            self.inner.sort_by = Some(input);
            self
        }

        pub fn set_sort_by(mut self, input: Option<EndpointSortKey>) -> Self {
            self.inner.sort_by = input;
            self
        }

        pub fn sort_order(mut self, input: SortOrder) -> Self {
            self.inner.sort_order = Some(input);
            self
        }

        pub fn set_sort_order(mut self, input: Option<SortOrder>) -> Self {
            self.inner.sort_order = input;
            self
        }

        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.inner.next_token = Some(input.into());
            self
        }

        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.inner.next_token = input;
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner.max_results = Some(input);
            self
        }

        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.inner.max_results = input;
            self
        }

        pub fn name_contains(mut self, input: impl Into<String>) -> Self {
            self.inner.name_contains = Some(input.into());
            self
        }

        pub fn set_name_contains(mut self, input: Option<String>) -> Self {
            self.inner.name_contains = input;
            self
        }

        pub fn creation_time_before(mut self, input: Instant) -> Self {
            self.inner.creation_time_before = Some(input);
            self
        }

        pub fn set_creation_time_before(mut self, input: Option<Instant>) -> Self {
            self.inner.creation_time_before = input;
            self
        }

        pub fn creation_time_after(mut self, input: Instant) -> Self {
            self.inner.creation_time_after = Some(input);
            self
        }

        pub fn set_creation_time_after(mut self, input: Option<Instant>) -> Self {
            self.inner.creation_time_after = input;
            self
        }

        pub fn last_modified_time_before(mut self, input: Instant) -> Self {
            self.inner.last_modified_time_before = Some(input);
            self
        }

        pub fn set_last_modified_time_before(mut self, input: Option<Instant>) -> Self {
            self.inner.last_modified_time_before = input;
            self
        }

        pub fn last_modified_time_after(mut self, input: Instant) -> Self {
            self.inner.last_modified_time_after = Some(input);
            self
        }

        pub fn set_last_modified_time_after(mut self, input: Option<Instant>) -> Self {
            self.inner.last_modified_time_after = input;
            self
        }

        pub fn status_equals(mut self, input: EndpointStatus) -> Self {
            self.inner.status_equals = Some(input);
            self
        }

        pub fn set_status_equals(mut self, input: Option<EndpointStatus>) -> Self {
            self.inner.status_equals = input;
            self
        }
    }
}
