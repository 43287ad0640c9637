/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{
    AlgorithmSpecification, EndpointStatus, EndpointSummary, ModelArtifacts,
    ProductionVariantSummary, ResourceConfig, SecondaryStatus, SecondaryStatusTransition,
    StoppingCondition, TrainingJobStatus, TrainingJobSummary,
};
use aws_http::response_metadata::ResponseMetadata;
use serde::Deserialize;
use smithy_types::Instant;
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
    DescribeTrainingJobOutput,
    ListTrainingJobsOutput,
    StopTrainingJobOutput,
    DescribeEndpointOutput,
    ListEndpointsOutput
);

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTrainingJobOutput {
    #[serde(default)]
    pub training_job_name: Option<String>,
    #[serde(default)]
    pub training_job_arn: Option<String>,
    #[serde(default)]
    pub tuning_job_arn: Option<String>,
    #[serde(default)]
    pub model_artifacts: Option<ModelArtifacts>,
    #[serde(default)]
    pub training_job_status: Option<TrainingJobStatus>,
    #[serde(default)]
    pub secondary_status: Option<SecondaryStatus>,
    /// Set when the job failed.
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub hyper_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub algorithm_specification: Option<AlgorithmSpecification>,
    #[serde(default)]
    pub role_arn: Option<String>,
    #[serde(default)]
    pub resource_config: Option<ResourceConfig>,
    #[serde(default)]
    pub stopping_condition: Option<StoppingCondition>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub creation_time: Option<Instant>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub training_start_time: Option<Instant>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub training_end_time: Option<Instant>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub last_modified_time: Option<Instant>,
    #[serde(default)]
    pub secondary_status_transitions: Option<Vec<SecondaryStatusTransition>>,
    #[serde(default)]
    pub training_time_in_seconds: Option<i32>,
    #[serde(default)]
    pub billable_time_in_seconds: Option<i32>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrainingJobsOutput {
    #[serde(default)]
    pub training_job_summaries: Option<Vec<TrainingJobSummary>>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StopTrainingJobOutput {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEndpointOutput {
    #[serde(default)]
    pub endpoint_name: Option<String>,
    #[serde(default)]
    pub endpoint_arn: Option<String>,
    #[serde(default)]
    pub endpoint_config_name: Option<String>,
    #[serde(default)]
    pub production_variants: Option<Vec<ProductionVariantSummary>>,
    #[serde(default)]
    pub endpoint_status: Option<EndpointStatus>,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub creation_time: Option<Instant>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub last_modified_time: Option<Instant>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEndpointsOutput {
    #[serde(default)]
    pub endpoints: Option<Vec<EndpointSummary>>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}
