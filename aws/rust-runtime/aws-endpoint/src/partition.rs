/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::Region;

/// A group of regions sharing a DNS suffix.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Partition {
    Aws,
    AwsCn,
}

impl Partition {
    /// Determine the partition of `region` from its prefix.
    ///
    /// Regions that belong to no known partition are resolved in the `aws` partition.
    pub fn for_region(region: &Region) -> Self {
        if region.as_ref().starts_with("cn-") {
            Partition::AwsCn
        } else {
            Partition::Aws
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Partition::Aws => "aws",
            Partition::AwsCn => "aws-cn",
        }
    }

    pub fn dns_suffix(&self, use_dual_stack: bool) -> &'static str {
        match (self, use_dual_stack) {
            (Partition::Aws, false) => "amazonaws.com",
            (Partition::Aws, true) => "api.aws",
            (Partition::AwsCn, false) => "amazonaws.com.cn",
            (Partition::AwsCn, true) => "api.amazonwebservices.com.cn",
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}
