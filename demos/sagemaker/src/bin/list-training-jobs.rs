/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, Utc};
use sagemaker::model::{SortBy, SortOrder, TrainingJobStatus};
use sagemaker::Instant;
use structopt::StructOpt;
use tokio_stream::StreamExt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// Only list jobs with this status, eg. `Completed`.
    #[structopt(short, long)]
    status: Option<String>,

    /// Only list jobs whose name contains this string.
    #[structopt(short, long)]
    name_contains: Option<String>,
}

fn format_time(time: Option<Instant>) -> String {
    match time.and_then(|time| time.to_system_time()) {
        Some(time) => DateTime::<Utc>::from(time)
            .format("%Y-%m-%d@%H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<(), sagemaker::Error> {
    tracing_subscriber::fmt::init();
    let Opt {
        status,
        name_contains,
    } = Opt::from_args();

    let client = sagemaker::Client::from_env();
    let mut jobs = client
        .list_training_jobs()
        .set_status_equals(status.map(|status| TrainingJobStatus::from(status.as_str())))
        .set_name_contains(name_contains)
        .sort_by(SortBy::CreationTime)
        .sort_order(SortOrder::Descending)
        .into_paginator()
        .items();

    println!("Job Name\tCreation DateTime\tDuration\tStatus");
    while let Some(job) = jobs.next().await {
        let job = job?;
        let duration = match (job.creation_time, job.training_end_time) {
            (Some(start), Some(end)) => (end.epoch_seconds() - start.epoch_seconds()).to_string(),
            _ => "-".to_string(),
        };
        println!(
            "{}\t{}\t{}\t{:?}",
            job.training_job_name.as_deref().unwrap_or_default(),
            format_time(job.creation_time),
            duration,
            job.training_job_status
        );
    }

    Ok(())
}
