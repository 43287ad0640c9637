/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::{self, ProvideRegion};
use chrono::{DateTime, Utc};
use cognitoidentity::{Client, Config, Error, Instant, Region, PKG_VERSION};
use structopt::StructOpt;
use tokio_stream::StreamExt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The AWS Region.
    #[structopt(short, long)]
    region: Option<String>,

    /// The ID of the identity pool to list.
    #[structopt(short, long)]
    identity_pool_id: String,

    /// Number of identities requested per page.
    #[structopt(short, long, default_value = "10")]
    page_size: i32,

    /// Whether to display additional information.
    #[structopt(short, long)]
    verbose: bool,
}

fn format_date(date: Option<Instant>) -> String {
    date.and_then(|date| date.to_system_time())
        .map(|date| {
            DateTime::<Utc>::from(date)
                .format("%Y-%m-%d %H:%M:%S%.3f")
                .to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Lists every identity of an Amazon Cognito identity pool, following pagination.
///
/// # Arguments
///
/// * `-i IDENTITY-POOL-ID` - The ID of the identity pool.
/// * `[-r REGION]` - The Region in which the client is created.
///   If not supplied, uses the value of the **AWS_REGION** environment variable.
///   If the environment variable is not set, defaults to **us-west-2**.
/// * `[-p PAGE-SIZE]` - The number of identities requested per page.
/// * `[-v]` - Whether to display additional information.
#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let Opt {
        identity_pool_id,
        region,
        page_size,
        verbose,
    } = Opt::from_args();

    let region_provider = region::ChainProvider::first_try(region.map(Region::new))
        .or_default_provider()
        .or_else(Region::new("us-west-2"));

    if verbose {
        println!("Cognito client version: {}", PKG_VERSION);
        if let Some(region) = region_provider.region() {
            println!("Region:                 {}", region.as_ref());
        }
        println!("Identity pool ID:       {}", identity_pool_id);
        println!();
    }

    let config = Config::builder().region(region_provider).build();
    let client = Client::from_conf(config);

    let mut identities = client
        .list_identities()
        .identity_pool_id(identity_pool_id)
        .into_paginator()
        .page_size(page_size)
        .items();

    while let Some(identity) = identities.next().await {
        let identity = identity?;
        println!("  ID:                 {}", identity.identity_id.unwrap_or_default());
        println!("  Creation date:      {}", format_date(identity.creation_date));
        println!("  Last modified date: {}", format_date(identity.last_modified_date));
        if let Some(logins) = identity.logins {
            println!("  Logins:");
            for login in logins {
                println!("    {}", login);
            }
        }
        println!();
    }

    Ok(())
}
