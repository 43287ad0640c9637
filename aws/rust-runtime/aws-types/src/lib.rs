/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by every AWS service client: the [`Region`](region::Region) to send requests to
//! and providers that load client settings from the process environment.

pub mod env_config;
pub mod os_shim_internal;
pub mod region;

pub use region::Region;
