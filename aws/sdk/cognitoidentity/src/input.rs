/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs
//!
//! Inputs are sent as they are: members left as `None` are omitted from the request, and
//! members the service requires are not checked before sending.

use crate::config::Config;
use crate::model::LoginsMap;
use aws_endpoint::set_endpoint_resolver;
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_json::JsonProtocol;
use aws_types::os_shim_internal::Env;
use serde::Serialize;
use smithy_http::operation::{self, BuildError, Operation};

const TARGET_PREFIX: &str = "AWSCognitoIdentityService";
const SERVICE_NAME: &str = "cognitoidentity";

fn build_operation<T: Serialize, H>(
    input: &T,
    operation_name: &'static str,
    handler: H,
    config: &Config,
) -> Result<Operation<H, AwsErrorRetryPolicy>, BuildError> {
    let request =
        aws_json::serialize_operation(JsonProtocol::V1_1, TARGET_PREFIX, operation_name, input)?;
    let mut request = operation::Request::new(request);
    {
        let mut properties = request.properties_mut();
        properties.insert(config.endpoint_params());
        set_endpoint_resolver(&mut properties, config.endpoint_resolver.clone());
        properties.insert(AwsUserAgent::new_from_environment(
            Env::real(),
            crate::API_METADATA,
        ));
    }
    Ok(Operation::new(request, handler)
        .with_metadata(operation::Metadata::new(operation_name, SERVICE_NAME))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

macro_rules! make_operation {
    ($input:ident => $operation:ident) => {
        impl $input {
            /// Serialize this input into an operation ready to be sent by a client.
            pub fn make_operation(
                &self,
                config: &Config,
            ) -> Result<Operation<crate::operation::$operation, AwsErrorRetryPolicy>, BuildError>
            {
                build_operation(
                    self,
                    stringify!($operation),
                    crate::operation::$operation::new(),
                    config,
                )
            }
        }
    };
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetIdInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<LoginsMap>,
}
make_operation!(GetIdInput => GetId);

#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCredentialsForIdentityInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<LoginsMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_arn: Option<String>,
}
make_operation!(GetCredentialsForIdentityInput => GetCredentialsForIdentity);

// login tokens are secrets
impl std::fmt::Debug for GetCredentialsForIdentityInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetCredentialsForIdentityInput")
            .field("identity_id", &self.identity_id)
            .field(
                "logins",
                &self.logins.as_ref().map(|logins| logins.keys().collect::<Vec<_>>()),
            )
            .field("custom_role_arn", &self.custom_role_arn)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOpenIdTokenInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<LoginsMap>,
}
make_operation!(GetOpenIdTokenInput => GetOpenIdToken);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIdentityPoolInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
}
make_operation!(DescribeIdentityPoolInput => DescribeIdentityPool);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIdentityPoolsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}
make_operation!(ListIdentityPoolsInput => ListIdentityPools);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIdentitiesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Leave out identities that have been disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_disabled: Option<bool>,
}
make_operation!(ListIdentitiesInput => ListIdentities);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIdentityPoolInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
}
make_operation!(DeleteIdentityPoolInput => DeleteIdentityPool);
