/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::{self, ProvideRegion};
use cognitoidentity::{Client, Config, Error, Region};
use smithy_types::instant::Format;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The AWS Region.
    #[structopt(short, long)]
    region: Option<String>,

    /// The identity pool to get an identity from.
    #[structopt(short, long)]
    identity_pool_id: String,

    /// Whether to display additional information.
    #[structopt(short, long)]
    verbose: bool,
}

/// Gets an unauthenticated identity from a pool and exchanges it for temporary credentials.
///
/// The identity pool must allow unauthenticated identities.
#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let Opt {
        region,
        identity_pool_id,
        verbose,
    } = Opt::from_args();

    let region_provider = region::ChainProvider::first_try(region.map(Region::new))
        .or_default_provider()
        .or_else(Region::new("us-west-2"));
    if verbose {
        if let Some(region) = region_provider.region() {
            println!("Region: {}", region.as_ref());
        }
    }

    let client = Client::from_conf(Config::builder().region(region_provider).build());

    let identity = client
        .get_id()
        .identity_pool_id(identity_pool_id)
        .send()
        .await?;
    if verbose {
        println!("Request ID: {:?}", identity.response_metadata().request_id);
    }
    let identity_id = identity.identity_id.unwrap_or_default();
    println!("Identity: {}", identity_id);

    let output = client
        .get_credentials_for_identity()
        .identity_id(identity_id)
        .send()
        .await?;
    match output.credentials {
        Some(credentials) => {
            println!(
                "Access key ID: {}",
                credentials.access_key_id.unwrap_or_default()
            );
            if let Some(expiration) = credentials.expiration {
                println!("Expires:       {}", expiration.fmt(Format::DateTime));
            }
        }
        None => println!("No credentials were returned"),
    }

    Ok(())
}
