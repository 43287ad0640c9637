/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sagemaker::error::{DescribeEndpointErrorKind, StopTrainingJobErrorKind};
use sagemaker::model::{SortBy, SortOrder, TrainingJobStatus};
use sagemaker::{Client, Config, Instant, Region, SdkError};
use smithy_async::rt::sleep::TokioSleep;
use smithy_client::test_connection::{json_response, TestConnection};
use smithy_http::body::SdkBody;
use smithy_types::ErrorFault;
use std::sync::Arc;
use tokio_stream::StreamExt;

fn request(target: &str, body: &str) -> http::Request<SdkBody> {
    http::Request::builder()
        .uri("https://api.sagemaker.us-west-2.amazonaws.com/")
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", format!("SageMaker.{}", target))
        .body(SdkBody::from(body))
        .unwrap()
}

fn config() -> sagemaker::config::Builder {
    Config::builder()
        .region(Region::new("us-west-2"))
        .sleep_impl(Arc::new(TokioSleep::new()))
}

fn client(conn: TestConnection<SdkBody>) -> Client {
    Client::from_conf_conn(config().build(), conn)
}

#[tokio::test]
async fn list_training_jobs_with_filters() {
    let conn = TestConnection::new(vec![(
        request(
            "ListTrainingJobs",
            r#"{"MaxResults":10,"CreationTimeAfter":1625000000,"StatusEquals":"Completed","SortBy":"CreationTime","SortOrder":"Descending"}"#,
        ),
        json_response(
            200,
            r#"{"TrainingJobSummaries":[{
                "TrainingJobName":"xgboost",
                "TrainingJobArn":"arn:aws:sagemaker:us-west-2:123456789012:training-job/xgboost",
                "CreationTime":1625000100.25,
                "TrainingJobStatus":"Completed"
            }]}"#,
        ),
    )]);
    let output = client(conn.clone())
        .list_training_jobs()
        .max_results(10)
        .creation_time_after(Instant::from_epoch_seconds(1625000000))
        .status_equals(TrainingJobStatus::Completed)
        .sort_by(SortBy::CreationTime)
        .sort_order(SortOrder::Descending)
        .send()
        .await
        .expect("successful response");
    let summaries = output.training_job_summaries.expect("summaries");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].training_job_name.as_deref(), Some("xgboost"));
    assert_eq!(
        summaries[0].creation_time,
        Some(Instant::from_secs_and_nanos(1625000100, 250_000_000))
    );
    assert_eq!(output.next_token, None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn training_jobs_are_paginated() {
    let conn = TestConnection::new(vec![
        (
            request("ListTrainingJobs", r#"{"MaxResults":1}"#),
            json_response(
                200,
                r#"{"TrainingJobSummaries":[{"TrainingJobName":"a"}],"NextToken":"t1"}"#,
            ),
        ),
        (
            request("ListTrainingJobs", r#"{"MaxResults":1,"NextToken":"t1"}"#),
            json_response(
                200,
                r#"{"TrainingJobSummaries":[{"TrainingJobName":"b"}],"NextToken":"t2"}"#,
            ),
        ),
        (
            request("ListTrainingJobs", r#"{"MaxResults":1,"NextToken":"t2"}"#),
            json_response(200, r#"{"TrainingJobSummaries":[]}"#),
        ),
    ]);
    let names = client(conn.clone())
        .list_training_jobs()
        .into_paginator()
        .page_size(1)
        .items()
        .map(|job| job.map(|job| job.training_job_name.unwrap_or_default()))
        .collect::<Result<Vec<_>, _>>()
        .await
        .expect("all pages succeed");
    assert_eq!(names, vec!["a", "b"]);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn endpoints_are_paginated_from_a_starting_token() {
    let conn = TestConnection::new(vec![
        (
            request("ListEndpoints", r#"{"NextToken":"start"}"#),
            json_response(
                200,
                r#"{"Endpoints":[{"EndpointName":"one","EndpointStatus":"InService"}],"NextToken":"next"}"#,
            ),
        ),
        (
            request("ListEndpoints", r#"{"NextToken":"next"}"#),
            json_response(200, r#"{"Endpoints":[{"EndpointName":"two"}]}"#),
        ),
    ]);
    let pages = client(conn.clone())
        .list_endpoints()
        .next_token("start")
        .into_paginator()
        .send()
        .collect::<Vec<_>>()
        .await;
    assert_eq!(pages.len(), 2);
    for page in &pages {
        let page = page.as_ref().expect("successful page");
        assert_eq!(
            page.response_metadata().request_id.as_deref(),
            Some("test-request-id")
        );
    }
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn stop_missing_training_job() {
    let conn = TestConnection::new(vec![(
        request("StopTrainingJob", r#"{"TrainingJobName":"gone"}"#),
        json_response(
            400,
            r#"{"__type":"com.amazonaws.sagemaker#ResourceNotFound","Message":"Requested resource not found."}"#,
        ),
    )]);
    let err = client(conn)
        .stop_training_job()
        .training_job_name("gone")
        .send()
        .await
        .expect_err("service error");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert!(err.is_resource_not_found());
            assert!(matches!(err.kind, StopTrainingJobErrorKind::ResourceNotFound(_)));
            assert_eq!(err.fault(), ErrorFault::Client);
            assert_eq!(err.message(), Some("Requested resource not found."));
            assert_eq!(raw.status().as_u16(), 400);
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn stop_training_job_has_an_empty_output() {
    let conn = TestConnection::new(vec![(
        request("StopTrainingJob", r#"{"TrainingJobName":"job"}"#),
        json_response(200, ""),
    )]);
    let output = client(conn)
        .stop_training_job()
        .training_job_name("job")
        .send()
        .await
        .expect("successful response");
    assert_eq!(output.response_metadata().http_status_code, 200);
}

#[tokio::test]
async fn validation_errors_are_unhandled() {
    let conn = TestConnection::new(vec![(
        request("DescribeEndpoint", r#"{"EndpointName":"missing"}"#),
        json_response(
            400,
            r#"{"__type":"ValidationException","Message":"Could not find endpoint."}"#,
        ),
    )]);
    let err = client(conn)
        .describe_endpoint()
        .endpoint_name("missing")
        .send()
        .await
        .expect_err("service error");
    if let SdkError::ServiceError { err, .. } = &err {
        assert!(matches!(err.kind, DescribeEndpointErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("ValidationException"));
    } else {
        panic!("expected a service error, got {:?}", err);
    }
    let err: sagemaker::Error = err.into();
    assert!(matches!(err, sagemaker::Error::Unhandled(_)));
}

#[tokio::test]
async fn dual_stack_endpoint() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://api.sagemaker.us-west-2.api.aws/")
            .body(SdkBody::from(r#"{"EndpointName":"endpoint"}"#))
            .unwrap(),
        json_response(200, r#"{"EndpointName":"endpoint","EndpointStatus":"Updating"}"#),
    )]);
    let client = Client::from_conf_conn(config().use_dual_stack(true).build(), conn.clone());
    client
        .describe_endpoint()
        .endpoint_name("endpoint")
        .send()
        .await
        .expect("successful response");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn = TestConnection::<SdkBody>::new(vec![]);
    let conf = Config::builder()
        .sleep_impl(Arc::new(TokioSleep::new()))
        .build();
    let err = Client::from_conf_conn(conf, conn.clone())
        .list_endpoints()
        .send()
        .await
        .expect_err("no region");
    assert!(
        matches!(err, SdkError::ConstructionFailure(_)),
        "unexpected error {:?}",
        err
    );
    assert!(conn.requests().is_empty());
}
