/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::client::fluent_builders;
use crate::client::Handle;
use crate::error::{ListEndpointsError, ListTrainingJobsError};
use crate::input::{ListEndpointsInput, ListTrainingJobsInput};
use crate::model::{EndpointSummary, TrainingJobSummary};
use crate::output::{ListEndpointsOutput, ListTrainingJobsOutput};
use smithy_client::paginator::{flatten_items, paginate, PaginationStream};
use smithy_client::SdkError;
use std::sync::Arc;

fn training_jobs_token(page: &ListTrainingJobsOutput) -> Option<&String> {
    page.next_token.as_ref()
}

fn endpoints_token(page: &ListEndpointsOutput) -> Option<&String> {
    page.next_token.as_ref()
}

/// Paginator for `ListTrainingJobs`
#[derive(Debug)]
pub struct ListTrainingJobsPaginator {
    handle: Arc<Handle>,
    input: ListTrainingJobsInput,
}

impl ListTrainingJobsPaginator {
    pub(crate) fn new(handle: Arc<Handle>, input: ListTrainingJobsInput) -> Self {
        Self { handle, input }
    }

    pub fn page_size(mut self, page_size: i32) -> Self {
        self.input.max_results = Some(page_size);
        self
    }

    pub fn send(
        self,
    ) -> PaginationStream<Result<ListTrainingJobsOutput, SdkError<ListTrainingJobsError>>> {
        let Self { handle, input } = self;
        paginate(
            input.next_token.clone(),
            move |token| {
                let mut input = input.clone();
                input.next_token = token;
                fluent_builders::ListTrainingJobs::with_input(handle.clone(), input).send()
            },
            training_jobs_token,
        )
    }

    pub fn items(
        self,
    ) -> PaginationStream<Result<TrainingJobSummary, SdkError<ListTrainingJobsError>>> {
        flatten_items(self.send(), |page| {
            page.training_job_summaries.unwrap_or_default()
        })
    }
}

/// Paginator for `ListEndpoints`
#[derive(Debug)]
pub struct ListEndpointsPaginator {
    handle: Arc<Handle>,
    input: ListEndpointsInput,
}

impl ListEndpointsPaginator {
    pub(crate) fn new(handle: Arc<Handle>, input: ListEndpointsInput) -> Self {
        Self { handle, input }
    }

    pub fn page_size(mut self, page_size: i32) -> Self {
        self.input.max_results = Some(page_size);
        self
    }

    pub fn send(self) -> PaginationStream<Result<ListEndpointsOutput, SdkError<ListEndpointsError>>> {
        let Self { handle, input } = self;
        paginate(
            input.next_token.clone(),
            move |token| {
                let mut input = input.clone();
                input.next_token = token;
                fluent_builders::ListEndpoints::with_input(handle.clone(), input).send()
            },
            endpoints_token,
        )
    }

    pub fn items(self) -> PaginationStream<Result<EndpointSummary, SdkError<ListEndpointsError>>> {
        flatten_items(self.send(), |page| page.endpoints.unwrap_or_default())
    }
}
