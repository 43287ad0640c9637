/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::Deserialize;
use smithy_types::Instant;

aws_json::string_enum! {
    TrainingJobStatus {
        Completed = "Completed",
        Failed = "Failed",
        InProgress = "InProgress",
        Stopped = "Stopped",
        Stopping = "Stopping",
    }
}

aws_json::string_enum! {
    /// A finer grained status of a training job, see [`TrainingJobStatus`] for the primary one.
    SecondaryStatus {
        Completed = "Completed",
        Downloading = "Downloading",
        DownloadingTrainingImage = "DownloadingTrainingImage",
        Failed = "Failed",
        Interrupted = "Interrupted",
        LaunchingMlInstances = "LaunchingMLInstances",
        MaxRuntimeExceeded = "MaxRuntimeExceeded",
        MaxWaitTimeExceeded = "MaxWaitTimeExceeded",
        PreparingTrainingStack = "PreparingTrainingStack",
        Restarting = "Restarting",
        Starting = "Starting",
        Stopped = "Stopped",
        Stopping = "Stopping",
        Training = "Training",
        Updating = "Updating",
        Uploading = "Uploading",
    }
}

aws_json::string_enum! {
    EndpointStatus {
        Creating = "Creating",
        Deleting = "Deleting",
        Failed = "Failed",
        InService = "InService",
        OutOfService = "OutOfService",
        RollingBack = "RollingBack",
        SystemUpdating = "SystemUpdating",
        Updating = "Updating",
    }
}

aws_json::string_enum! {
    SortBy {
        CreationTime = "CreationTime",
        Name = "Name",
        Status = "Status",
    }
}

aws_json::string_enum! {
    SortOrder {
        Ascending = "Ascending",
        Descending = "Descending",
    }
}

aws_json::string_enum! {
    EndpointSortKey {
        CreationTime = "CreationTime",
        Name = "Name",
        Status = "Status",
    }
}

aws_json::string_enum! {
    TrainingInputMode {
        File = "File",
        Pipe = "Pipe",
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingJobSummary {
    #[serde(default)]
    pub training_job_name: Option<String>,
    #[serde(default)]
    pub training_job_arn: Option<String>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub creation_time: Option<Instant>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub training_end_time: Option<Instant>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub last_modified_time: Option<Instant>,
    #[serde(default)]
    pub training_job_status: Option<TrainingJobStatus>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecondaryStatusTransition {
    #[serde(default)]
    pub status: Option<SecondaryStatus>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub start_time: Option<Instant>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub end_time: Option<Instant>,
    #[serde(default)]
    pub status_message: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmSpecification {
    #[serde(default)]
    pub training_image: Option<String>,
    #[serde(default)]
    pub algorithm_name: Option<String>,
    #[serde(default)]
    pub training_input_mode: Option<TrainingInputMode>,
}

/// The compute resources of a training job.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceConfig {
    #[serde(default)]
    pub instance_type: Option<String>,
    #[serde(default)]
    pub instance_count: Option<i32>,
    #[serde(default, rename = "VolumeSizeInGB")]
    pub volume_size_in_gb: Option<i32>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoppingCondition {
    #[serde(default)]
    pub max_runtime_in_seconds: Option<i32>,
    #[serde(default)]
    pub max_wait_time_in_seconds: Option<i32>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelArtifacts {
    #[serde(default)]
    pub s3_model_artifacts: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointSummary {
    #[serde(default)]
    pub endpoint_name: Option<String>,
    #[serde(default)]
    pub endpoint_arn: Option<String>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub creation_time: Option<Instant>,
    #[serde(default, with = "aws_json::instant_epoch::option")]
    pub last_modified_time: Option<Instant>,
    #[serde(default)]
    pub endpoint_status: Option<EndpointStatus>,
}

/// The weights and capacity of one model served by an endpoint.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductionVariantSummary {
    #[serde(default)]
    pub variant_name: Option<String>,
    #[serde(default)]
    pub current_weight: Option<f32>,
    #[serde(default)]
    pub desired_weight: Option<f32>,
    #[serde(default)]
    pub current_instance_count: Option<i32>,
    #[serde(default)]
    pub desired_instance_count: Option<i32>,
}
