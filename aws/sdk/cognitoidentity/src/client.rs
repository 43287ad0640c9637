/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Fluent client for Cognito Identity
//!
//! Each operation is started from a [`Client`] method returning a builder from
//! [`fluent_builders`]. Set the input members on the builder, then `send()` it. The list
//! operations can also be driven to completion with `into_paginator()`.

use crate::config::Config;
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

/// Client for Amazon Cognito Identity
///
/// Cloning a client is cheap: clones share their configuration, connection pool and retry
/// token bucket.
#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    /// Build a client with configuration and connection settings read from the environment.
    #[cfg(feature = "rustls")]
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }

    #[cfg(feature = "rustls")]
    pub fn from_conf(conf: Config) -> Self {
        Self::from_dyn_conn(conf, aws_hyper::https())
    }

    /// Build a client sending its requests through `conn`.
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

    pub fn get_id(&self) -> fluent_builders::GetId {
        fluent_builders::GetId::new(self.handle.clone())
    }

    pub fn get_credentials_for_identity(&self) -> fluent_builders::GetCredentialsForIdentity {
        fluent_builders::GetCredentialsForIdentity::new(self.handle.clone())
    }

    pub fn get_open_id_token(&self) -> fluent_builders::GetOpenIdToken {
        fluent_builders::GetOpenIdToken::new(self.handle.clone())
    }

    pub fn describe_identity_pool(&self) -> fluent_builders::DescribeIdentityPool {
        fluent_builders::DescribeIdentityPool::new(self.handle.clone())
    }

    pub fn list_identity_pools(&self) -> fluent_builders::ListIdentityPools {
        fluent_builders::ListIdentityPools::new(self.handle.clone())
    }

    pub fn list_identities(&self) -> fluent_builders::ListIdentities {
        fluent_builders::ListIdentities::new(self.handle.clone())
    }

    pub fn delete_identity_pool(&self) -> fluent_builders::DeleteIdentityPool {
        fluent_builders::DeleteIdentityPool::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::Handle;
    use crate::error::*;
    use crate::input::*;
    use crate::output::*;
    use crate::paginator;
    use smithy_client::SdkError;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn construction_failure<E>(err: BuildError) -> SdkError<E> {
        SdkError::ConstructionFailure(err.into())
    }

    /// Returns an identity ID, creating it if needed.
    #[derive(Debug)]
    pub struct GetId {
        handle: Arc<Handle>,
        inner: GetIdInput,
    }

    impl GetId {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<GetIdOutput, SdkError<GetIdError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.inner.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.inner.account_id = input;
            self
        }

        pub fn identity_pool_id(mut self, input: impl Into<String>) -> Self {
            self.inner.identity_pool_id = Some(input.into());
            self
        }

        pub fn set_identity_pool_id(mut self, input: Option<String>) -> Self {
            self.inner.identity_pool_id = input;
            self
        }

        /// Add a login provider token, keyed by the provider name.
        pub fn logins(mut self, provider: impl Into<String>, token: impl Into<String>) -> Self {
            self.inner
                .logins
                .get_or_insert_with(HashMap::new)
                .insert(provider.into(), token.into());
            self
        }

        pub fn set_logins(mut self, input: Option<HashMap<String, String>>) -> Self {
            self.inner.logins = input;
            self
        }
    }

    /// Returns credentials for the provided identity ID.
    #[derive(Debug)]
    pub struct GetCredentialsForIdentity {
        handle: Arc<Handle>,
        inner: GetCredentialsForIdentityInput,
    }

    impl GetCredentialsForIdentity {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<GetCredentialsForIdentityOutput, SdkError<GetCredentialsForIdentityError>>
        {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn identity_id(mut self, input: impl Into<String>) -> Self {
            self.inner.identity_id = Some(input.into());
            self
        }

        pub fn set_identity_id(mut self, input: Option<String>) -> Self {
            self.inner.identity_id = input;
            self
        }

        pub fn logins(mut self, provider: impl Into<String>, token: impl Into<String>) -> Self {
            self.inner
                .logins
                .get_or_insert_with(HashMap::new)
                .insert(provider.into(), token.into());
            self
        }

        pub fn set_logins(mut self, input: Option<HashMap<String, String>>) -> Self {
            self.inner.logins = input;
            self
        }

        /// The role to assume when there is more than one role for the identity.
        pub fn custom_role_arn(mut self, input: impl Into<String>) -> Self {
            self.inner.custom_role_arn = Some(input.into());
            self
        }

        pub fn set_custom_role_arn(mut self, input: Option<String>) -> Self {
            self.inner.custom_role_arn = input;
            self
        }
    }

    /// Gets an OpenID token for an identity.
    #[derive(Debug)]
    pub struct GetOpenIdToken {
        handle: Arc<Handle>,
        inner: GetOpenIdTokenInput,
    }

    impl GetOpenIdToken {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<GetOpenIdTokenOutput, SdkError<GetOpenIdTokenError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn identity_id(mut self, input: impl Into<String>) -> Self {
            self.inner.identity_id = Some(input.into());
            self
        }

        pub fn set_identity_id(mut self, input: Option<String>) -> Self {
            self.inner.identity_id = input;
            self
        }

        pub fn logins(mut self, provider: impl Into<String>, token: impl Into<String>) -> Self {
            self.inner
                .logins
                .get_or_insert_with(HashMap::new)
                .insert(provider.into(), token.into());
            self
        }

        pub fn set_logins(mut self, input: Option<HashMap<String, String>>) -> Self {
            self.inner.logins = input;
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeIdentityPool {
        handle: Arc<Handle>,
        inner: DescribeIdentityPoolInput,
    }

    impl DescribeIdentityPool {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<DescribeIdentityPoolOutput, SdkError<DescribeIdentityPoolError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn identity_pool_id(mut self, input: impl Into<String>) -> Self {
            self.inner.identity_pool_id = Some(input.into());
            self
        }

        pub fn set_identity_pool_id(mut self, input: Option<String>) -> Self {
            self.inner.identity_pool_id = input;
            self
        }
    }

    /// Lists all of the identity pools of the account.
    #[derive(Debug)]
    pub struct ListIdentityPools {
        handle: Arc<Handle>,
        inner: ListIdentityPoolsInput,
    }

    impl ListIdentityPools {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub(crate) fn with_input(handle: Arc<Handle>, inner: ListIdentityPoolsInput) -> Self {
            Self { handle, inner }
        }

        pub async fn send(
            self,
        ) -> Result<ListIdentityPoolsOutput, SdkError<ListIdentityPoolsError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        /// Fetch every page, starting from the token set on this builder.
        pub fn into_paginator(self) -> paginator::ListIdentityPoolsPaginator {
            paginator::ListIdentityPoolsPaginator::new(self.handle, self.inner)
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner.max_results = Some(input);
            self
        }

        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.inner.max_results = input;
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
    }

    /// Lists the identities in an identity pool.
    #[derive(Debug)]
    pub struct ListIdentities {
        handle: Arc<Handle>,
        inner: ListIdentitiesInput,
    }

    impl ListIdentities {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub(crate) fn with_input(handle: Arc<Handle>, inner: ListIdentitiesInput) -> Self {
            Self { handle, inner }
        }

        pub async fn send(self) -> Result<ListIdentitiesOutput, SdkError<ListIdentitiesError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        /// Fetch every page, starting from the token set on this builder.
        pub fn into_paginator(self) -> paginator::ListIdentitiesPaginator {
            paginator::ListIdentitiesPaginator::new(self.handle, self.inner)
        }

        pub fn identity_pool_id(mut self, input: impl Into<String>) -> Self {
            self.inner.identity_pool_id = Some(input.into());
            self
        }

        pub fn set_identity_pool_id(mut self, input: Option<String>) -> Self {
            self.inner.identity_pool_id = input;
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

        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.inner.next_token = Some(input.into());
            self
        }

        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.inner.next_token = input;
            self
        }

        pub fn hide_disabled(mut self, input: bool) -> Self {
            self.inner.hide_disabled = Some(input);
            self
        }

        pub fn set_hide_disabled(mut self, input: Option<bool>) -> Self {
            self.inner.hide_disabled = input;
            self
        }
    }

    /// Deletes an identity pool. Its identities can no longer be used.
    #[derive(Debug)]
    pub struct DeleteIdentityPool {
        handle: Arc<Handle>,
        inner: DeleteIdentityPoolInput,
    }

    impl DeleteIdentityPool {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<DeleteIdentityPoolOutput, SdkError<DeleteIdentityPoolError>> {
            let op = self
                .inner
                .make_operation(&self.handle.conf)
                .map_err(construction_failure)?;
            self.handle.client.call(op).await
        }

        pub fn identity_pool_id(mut self, input: impl Into<String>) -> Self {
            self.inner.identity_pool_id = Some(input.into());
            self
        }

        pub fn set_identity_pool_id(mut self, input: Option<String>) -> Self {
            self.inner.identity_pool_id = input;
            self
        }
    }
}
