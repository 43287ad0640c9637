/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shared types for the awsJson client runtime: timestamps, retry classification and the
//! generic service error.

pub mod error;
pub mod instant;
pub mod retry;

pub use crate::error::{Error, ErrorFault, ProvideFault};
pub use crate::instant::Instant;
