/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

macro_rules! json_operation {
    ($($operation:ident => ($output:ident, $error:ident)),* $(,)?) => {
        $(
            #[derive(Clone, Default, Debug)]
            pub struct $operation {
                _private: (),
            }

            impl $operation {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $operation {
                type Output = Result<crate::output::$output, crate::error::$error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    aws_json::parse_response(response)
                }
            }
        )*
    };
}

json_operation! {
    DescribeTrainingJob => (DescribeTrainingJobOutput, DescribeTrainingJobError),
    ListTrainingJobs => (ListTrainingJobsOutput, ListTrainingJobsError),
    StopTrainingJob => (StopTrainingJobOutput, StopTrainingJobError),
    DescribeEndpoint => (DescribeEndpointOutput, DescribeEndpointError),
    ListEndpoints => (ListEndpointsOutput, ListEndpointsError),
}
