/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Paginators for the list operations
//!
//! Pages are requested one at a time as the stream is polled. The stream ends after the first
//! page without a `NextToken`, or with the first error.

use crate::client::fluent_builders;
use crate::client::Handle;
use crate::error::{ListIdentitiesError, ListIdentityPoolsError};
use crate::input::{ListIdentitiesInput, ListIdentityPoolsInput};
use crate::model::{IdentityDescription, IdentityPoolShortDescription};
use crate::output::{ListIdentitiesOutput, ListIdentityPoolsOutput};
use smithy_client::paginator::{flatten_items, paginate, PaginationStream};
use smithy_client::SdkError;
use std::sync::Arc;

fn list_identity_pools_token(page: &ListIdentityPoolsOutput) -> Option<&String> {
    page.next_token.as_ref()
}

fn list_identities_token(page: &ListIdentitiesOutput) -> Option<&String> {
    page.next_token.as_ref()
}

#[derive(Debug)]
pub struct ListIdentityPoolsPaginator {
    handle: Arc<Handle>,
    input: ListIdentityPoolsInput,
}

impl ListIdentityPoolsPaginator {
    pub(crate) fn new(handle: Arc<Handle>, input: ListIdentityPoolsInput) -> Self {
        Self { handle, input }
    }

    /// Set the number of pools requested per page.
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.input.max_results = Some(page_size);
        self
    }

    pub fn send(
        self,
    ) -> PaginationStream<Result<ListIdentityPoolsOutput, SdkError<ListIdentityPoolsError>>> {
        let Self { handle, input } = self;
        let first_token = input.next_token.clone();
        paginate(
            first_token,
            move |token| {
                let mut input = input.clone();
                input.next_token = token;
                fluent_builders::ListIdentityPools::with_input(handle.clone(), input).send()
            },
            list_identity_pools_token,
        )
    }

    /// Stream the pools of every page.
    pub fn items(
        self,
    ) -> PaginationStream<Result<IdentityPoolShortDescription, SdkError<ListIdentityPoolsError>>>
    {
        flatten_items(self.send(), |page| page.identity_pools.unwrap_or_default())
    }
}

#[derive(Debug)]
pub struct ListIdentitiesPaginator {
    handle: Arc<Handle>,
    input: ListIdentitiesInput,
}

impl ListIdentitiesPaginator {
    pub(crate) fn new(handle: Arc<Handle>, input: ListIdentitiesInput) -> Self {
        Self { handle, input }
    }

    /// Set the number of identities requested per page.
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.input.max_results = Some(page_size);
        self
    }

    pub fn send(
        self,
    ) -> PaginationStream<Result<ListIdentitiesOutput, SdkError<ListIdentitiesError>>> {
        let Self { handle, input } = self;
        let first_token = input.next_token.clone();
        paginate(
            first_token,
            move |token| {
                let mut input = input.clone();
                input.next_token = token;
                fluent_builders::ListIdentities::with_input(handle.clone(), input).send()
            },
            list_identities_token,
        )
    }

    /// Stream the identities of every page.
    pub fn items(
        self,
    ) -> PaginationStream<Result<IdentityDescription, SdkError<ListIdentitiesError>>> {
        flatten_items(self.send(), |page| page.identities.unwrap_or_default())
    }
}
