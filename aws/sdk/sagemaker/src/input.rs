/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::model::{EndpointSortKey, EndpointStatus, SortBy, SortOrder, TrainingJobStatus};
use aws_endpoint::set_endpoint_resolver;
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_json::JsonProtocol;
use aws_types::os_shim_internal::Env;
use serde::Serialize;
use smithy_http::operation::{self, BuildError, Operation};
use smithy_types::Instant;

const TARGET_PREFIX: &str = "SageMaker";

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
        .with_metadata(operation::Metadata::new(operation_name, "sagemaker"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

macro_rules! make_operation {
    ($input:ident => $operation:ident) => {
        impl $input {
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
pub struct DescribeTrainingJobInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
}
make_operation!(DescribeTrainingJobInput => DescribeTrainingJob);

/// Filters and ordering for `ListTrainingJobs`. Time filters are exclusive bounds.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(
        with = "aws_json::instant_epoch::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time_after: Option<Instant>,
    #[serde(
        with = "aws_json::instant_epoch::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time_before: Option<Instant>,
    #[serde(
        with = "aws_json::instant_epoch::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time_after: Option<Instant>,
    #[serde(
        with = "aws_json::instant_epoch::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time_before: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_equals: Option<TrainingJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}
make_operation!(ListTrainingJobsInput => ListTrainingJobs);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopTrainingJobInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
}
make_operation!(StopTrainingJobInput => StopTrainingJob);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEndpointInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,
}
make_operation!(DescribeEndpointInput => DescribeEndpoint);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEndpointsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<EndpointSortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(
        with = "aws_json::instant_epoch::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time_before: Option<Instant>,
    #[serde(
        with = "aws_json::instant_epoch::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time_after: Option<Instant>,
    #[serde(
        with = "aws_json::instant_epoch::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time_before: Option<Instant>,
    #[serde(
        with = "aws_json::instant_epoch::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time_after: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_equals: Option<EndpointStatus>,
}
make_operation!(ListEndpointsInput => ListEndpoints);

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{ListTrainingJobsInput, StopTrainingJobInput};
    use crate::model::{SortBy, SortOrder, TrainingJobStatus};
    use aws_types::region::Region;
    use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
    use smithy_types::Instant;

    fn config() -> Config {
        Config::builder().region(Region::new("eu-central-1")).build()
    }

    #[test]
    fn filters_are_serialized() {
        let op = ListTrainingJobsInput {
            creation_time_after: Some(Instant::from_epoch_seconds(1600000000)),
            last_modified_time_before: Some(Instant::from_secs_and_nanos(1700000000, 500_000_000)),
            status_equals: Some(TrainingJobStatus::InProgress),
            sort_by: Some(SortBy::CreationTime),
            sort_order: Some(SortOrder::Descending),
            ..Default::default()
        }
        .make_operation(&config())
        .expect("valid operation");
        assert_ok(validate_body(
            op.request().http().body().bytes().unwrap(),
            r#"{
                "CreationTimeAfter": 1600000000,
                "LastModifiedTimeBefore": 1700000000.5,
                "StatusEquals": "InProgress",
                "SortBy": "CreationTime",
                "SortOrder": "Descending"
            }"#,
            MediaType::Json,
        ));
    }

    #[test]
    fn unknown_enum_values_are_sent_as_is() {
        let op = ListTrainingJobsInput {
            status_equals: Some(TrainingJobStatus::from("Paused")),
            ..Default::default()
        }
        .make_operation(&config())
        .expect("valid operation");
        assert_ok(validate_body(
            op.request().http().body().bytes().unwrap(),
            r#"{"StatusEquals":"Paused"}"#,
            MediaType::Json,
        ));
    }

    #[test]
    fn required_members_are_not_checked() {
        let op = StopTrainingJobInput::default()
            .make_operation(&config())
            .expect("missing members are sent as is");
        let request = op.request().http();
        assert_ok(validate_headers(
            request,
            &[
                ("x-amz-target", "SageMaker.StopTrainingJob"),
                ("content-length", "2"),
            ],
        ));
        assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
    }
}
