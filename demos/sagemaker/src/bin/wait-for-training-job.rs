/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_client::waiter::WaiterError;
use std::time::Duration;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The training job to wait for.
    #[structopt(short, long)]
    training_job_name: String,

    /// Seconds between two polls.
    #[structopt(short, long, default_value = "120")]
    poll_interval: u64,

    /// Give up after this many minutes.
    #[structopt(short, long, default_value = "360")]
    max_wait: u64,

    /// Stop the job before waiting for it.
    #[structopt(long)]
    stop: bool,
}

/// Waits for a training job to complete or stop, then prints its model artifacts.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let Opt {
        training_job_name,
        poll_interval,
        max_wait,
        stop,
    } = Opt::from_args();

    let client = sagemaker::Client::from_env();
    if stop {
        client
            .stop_training_job()
            .training_job_name(&training_job_name)
            .send()
            .await
            .map_err(sagemaker::Error::from)?;
        println!("Stopping {}", training_job_name);
    }

    let result = client
        .wait_until_training_job_completed_or_stopped()
        .training_job_name(&training_job_name)
        .poll_interval(Duration::from_secs(poll_interval))
        .max_wait(Duration::from_secs(max_wait * 60))
        .wait()
        .await;
    match result {
        Ok(final_poll) => {
            let job = final_poll.into_result()?;
            println!("{} is {:?}", training_job_name, job.training_job_status);
            if let Some(artifacts) = job.model_artifacts.and_then(|a| a.s3_model_artifacts) {
                println!("Model artifacts: {}", artifacts);
            }
        }
        Err(WaiterError::FailureState { final_poll }) => match final_poll.into_result() {
            Ok(job) => println!(
                "{} failed: {}",
                training_job_name,
                job.failure_reason.unwrap_or_default()
            ),
            Err(err) => println!("{} can't be described: {}", training_job_name, err),
        },
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
