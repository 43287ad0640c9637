/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon SageMaker
//!
//! This crate covers the lifecycle of training jobs and of hosted endpoints. Besides the plain
//! operations, the [`Client`] exposes waiters polling a job or an endpoint until it settles.
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use std::time::Duration;
//!
//! let client = sagemaker::Client::from_env();
//! let final_poll = client
//!     .wait_until_training_job_completed_or_stopped()
//!     .training_job_name("my-training-job")
//!     .max_wait(Duration::from_secs(3600))
//!     .wait()
//!     .await?;
//! let job = final_poll.into_result()?;
//! println!("{:?}", job.training_job_status);
//! # Ok(())
//! # }
//! ```
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod client;
pub mod config;
pub mod error;
mod error_meta;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
pub mod paginator;
pub mod waiters;

pub use aws_types::region::Region;
pub use client::Client;
pub use config::Config;
pub use error_meta::Error;
pub use smithy_client::SdkError;
pub use smithy_types::Instant;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("sagemaker", env!("CARGO_PKG_VERSION"));
