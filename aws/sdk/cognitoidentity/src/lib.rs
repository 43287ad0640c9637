/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Cognito Federated Identities
//!
//! Cognito Identity issues unique identities to end users and exchanges them, together with the
//! tokens of their login providers, for temporary AWS credentials.
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), cognitoidentity::Error> {
//! use cognitoidentity::{Client, Config, Region};
//!
//! let conf = Config::builder().region(Region::new("us-east-1")).build();
//! let client = Client::from_conf(conf);
//! let identity = client
//!     .get_id()
//!     .identity_pool_id("us-east-1:1a2b3c4d")
//!     .send()
//!     .await?;
//! println!("identity: {:?}", identity.identity_id);
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

pub use aws_types::region::Region;
pub use client::Client;
pub use config::Config;
pub use error_meta::Error;
pub use smithy_client::SdkError;
pub use smithy_types::Instant;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("cognitoidentity", env!("CARGO_PKG_VERSION"));
