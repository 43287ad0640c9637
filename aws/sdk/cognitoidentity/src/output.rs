/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs
//!
//! Every output carries the [`ResponseMetadata`] of the response it was read from.

use crate::model::{
    CognitoIdentityProvider, Credentials, IdentityDescription, IdentityPoolShortDescription,
};
use aws_http::response_metadata::ResponseMetadata;
use serde::Deserialize;
use std::collections::HashMap;

macro_rules! json_output {
    ($($output:ident),*) => {
        $(
            impl aws_json::JsonOutput for $output {
                fn set_response_metadata(&mut self, metadata: ResponseMetadata) {
                    self.response_metadata = metadata;
                }
            }

            impl $output {
                pub fn response_metadata(&self) -> &ResponseMetadata {
                    &self.response_metadata
                }
            }
        )*
    };
}

json_output!(
    GetIdOutput,
    GetCredentialsForIdentityOutput,
    GetOpenIdTokenOutput,
    DescribeIdentityPoolOutput,
    ListIdentityPoolsOutput,
    ListIdentitiesOutput,
    DeleteIdentityPoolOutput
);

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetIdOutput {
    #[serde(default)]
    pub identity_id: Option<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCredentialsForIdentityOutput {
    #[serde(default)]
    pub identity_id: Option<String>,
    #[serde(default)]
    pub credentials: Option<Credentials>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOpenIdTokenOutput {
    #[serde(default)]
    pub identity_id: Option<String>,
    /// An OpenID token, valid for ten minutes.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

impl std::fmt::Debug for GetOpenIdTokenOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetOpenIdTokenOutput")
            .field("identity_id", &self.identity_id)
            .field("token", &self.token.as_ref().map(|_| "** redacted **"))
            .field("response_metadata", &self.response_metadata)
            .finish()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIdentityPoolOutput {
    #[serde(default)]
    pub identity_pool_id: Option<String>,
    #[serde(default)]
    pub identity_pool_name: Option<String>,
    #[serde(default)]
    pub allow_unauthenticated_identities: Option<bool>,
    #[serde(default)]
    pub allow_classic_flow: Option<bool>,
    #[serde(default)]
    pub supported_login_providers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub developer_provider_name: Option<String>,
    #[serde(default, rename = "OpenIdConnectProviderARNs")]
    pub open_id_connect_provider_arns: Option<Vec<String>>,
    #[serde(default)]
    pub cognito_identity_providers: Option<Vec<CognitoIdentityProvider>>,
    #[serde(default, rename = "SamlProviderARNs")]
    pub saml_provider_arns: Option<Vec<String>>,
    #[serde(default)]
    pub identity_pool_tags: Option<HashMap<String, String>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIdentityPoolsOutput {
    #[serde(default)]
    pub identity_pools: Option<Vec<IdentityPoolShortDescription>>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIdentitiesOutput {
    #[serde(default)]
    pub identity_pool_id: Option<String>,
    #[serde(default)]
    pub identities: Option<Vec<IdentityDescription>>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DeleteIdentityPoolOutput {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[cfg(test)]
mod test {
    use crate::output::{DescribeIdentityPoolOutput, GetCredentialsForIdentityOutput};
    use smithy_types::Instant;

    #[test]
    fn deserialize_describe_identity_pool() {
        let output: DescribeIdentityPoolOutput = aws_json::deserialize_body(
            br#"{
                "IdentityPoolId": "us-east-1:pool",
                "IdentityPoolName": "MyPool",
                "AllowUnauthenticatedIdentities": false,
                "OpenIdConnectProviderARNs": ["arn:aws:iam::123456789012:oidc-provider/example.com"],
                "SamlProviderARNs": [],
                "CognitoIdentityProviders": [
                    {"ProviderName": "cognito-idp.us-east-1.amazonaws.com/us-east-1_abc", "ClientId": "client", "ServerSideTokenCheck": true}
                ],
                "IdentityPoolTags": {"team": "identity"}
            }"#,
        )
        .expect("valid output");
        assert_eq!(output.identity_pool_name.as_deref(), Some("MyPool"));
        assert_eq!(output.allow_unauthenticated_identities, Some(false));
        assert_eq!(output.open_id_connect_provider_arns.map(|arns| arns.len()), Some(1));
        assert_eq!(output.saml_provider_arns, Some(vec![]));
        let providers = output.cognito_identity_providers.expect("providers");
        assert_eq!(providers[0].server_side_token_check, Some(true));
        assert_eq!(
            output
                .identity_pool_tags
                .expect("tags")
                .get("team")
                .map(String::as_str),
            Some("identity")
        );
    }

    #[test]
    fn fractional_expiration() {
        let output: GetCredentialsForIdentityOutput = aws_json::deserialize_body(
            br#"{"Credentials":{"AccessKeyId":"AKIA","Expiration":1700000000.25}}"#,
        )
        .expect("valid output");
        assert_eq!(
            output.credentials.and_then(|creds| creds.expiration),
            Some(Instant::from_secs_and_nanos(1700000000, 250_000_000))
        );
    }
}
