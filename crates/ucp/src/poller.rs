/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, LOCATION, RETRY_AFTER};

use crate::UcpError;
use crate::models::OperationStatus;

const ASYNC_OPERATION: &str = "azure-asyncoperation";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const POLL_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// How a 201/202 response asks the caller to wait.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PollTarget {
    // GET returns an operation status body until terminal
    AsyncOperation(String),
    // GET returns 202 until done
    Location(String),
}

impl PollTarget {
    pub(crate) fn from_response(status: StatusCode, headers: &HeaderMap) -> Option<PollTarget> {
        if status != StatusCode::CREATED && status != StatusCode::ACCEPTED {
            return None;
        }
        if let Some(url) = header_str(headers, ASYNC_OPERATION) {
            return Some(PollTarget::AsyncOperation(url));
        }
        header_str(headers, LOCATION.as_str()).map(PollTarget::Location)
    }
}

pub(crate) fn retry_after(headers: &HeaderMap) -> Duration {
    header_str(headers, RETRY_AFTER.as_str())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_POLL_INTERVAL)
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Polls a long running operation until it reaches a terminal state.
pub(crate) async fn wait_for_completion(
    http_client: &reqwest::Client,
    target: PollTarget,
    initial_delay: Duration,
) -> Result<(), UcpError> {
    wait_within(http_client, target, initial_delay, POLL_TIMEOUT).await
}

/// Gives up with `OperationFailed` once the next poll would start after
/// `timeout` has elapsed.
async fn wait_within(
    http_client: &reqwest::Client,
    target: PollTarget,
    initial_delay: Duration,
    timeout: Duration,
) -> Result<(), UcpError> {
    let deadline = tokio::time::Instant::now() + timeout;
    let mut delay = initial_delay;
    loop {
        if tokio::time::Instant::now() + delay > deadline {
            return Err(UcpError::OperationFailed(format!(
                "timed out after {}s waiting for the operation to complete",
                timeout.as_secs()
            )));
        }
        tokio::time::sleep(delay).await;

        let url = match &target {
            PollTarget::AsyncOperation(url) | PollTarget::Location(url) => url,
        };
        tracing::debug!(url = %url, "polling long running operation");

        let response = http_client.get(url).send().await?;
        let status = response.status();
        delay = retry_after(response.headers());
        let text = response.text().await?;

        if !status.is_success() {
            return Err(crate::client::error_from_response(status, &text));
        }

        match &target {
            PollTarget::Location(_) => {
                if status != StatusCode::ACCEPTED {
                    return Ok(());
                }
            }
            PollTarget::AsyncOperation(_) => {
                let operation: OperationStatus = serde_json::from_str(&text).map_err(|e| {
                    UcpError::Serde(format!("Error reading operation status: {}", e))
                })?;
                match operation.status.to_ascii_lowercase().as_str() {
                    "succeeded" => return Ok(()),
                    "failed" | "canceled" | "cancelled" => {
                        let message = operation
                            .error
                            .map(|e| format!("{}: {}", e.code, e.message))
                            .unwrap_or(operation.status);
                        return Err(UcpError::OperationFailed(message));
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn async_operation_header_wins_over_location() {
        let mut headers = HeaderMap::new();
        headers.insert(ASYNC_OPERATION, HeaderValue::from_static("http://op"));
        headers.insert(LOCATION, HeaderValue::from_static("http://loc"));

        assert_eq!(
            PollTarget::from_response(StatusCode::ACCEPTED, &headers),
            Some(PollTarget::AsyncOperation("http://op".to_string()))
        );
        assert_eq!(PollTarget::from_response(StatusCode::OK, &headers), None);
    }

    #[test]
    fn retry_after_defaults_when_missing_or_garbled() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after(&headers), DEFAULT_POLL_INTERVAL);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));
        assert_eq!(retry_after(&headers), DEFAULT_POLL_INTERVAL);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("3"));
        assert_eq!(retry_after(&headers), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn operation_that_never_finishes_times_out() {
        let mut server = mockito::Server::new_async().await;
        let polls = server
            .mock("GET", "/operations/stuck")
            .with_status(202)
            .with_header("retry-after", "10")
            .expect_at_least(1)
            .create_async()
            .await;
        let target = PollTarget::Location(format!("{}/operations/stuck", server.url()));

        let err = wait_within(
            &reqwest::Client::new(),
            target,
            Duration::ZERO,
            Duration::from_secs(60),
        )
        .await
        .expect_err("polling should give up");

        assert_eq!(
            err,
            UcpError::OperationFailed(
                "timed out after 60s waiting for the operation to complete".to_string()
            )
        );
        polls.assert_async().await;
    }

    #[tokio::test(start_paused = true)]
    async fn location_poll_stops_once_accepted_ends() {
        let mut server = mockito::Server::new_async().await;
        let _done = server
            .mock("GET", "/operations/done")
            .with_status(200)
            .create_async()
            .await;
        let target = PollTarget::Location(format!("{}/operations/done", server.url()));

        let client = reqwest::Client::new();
        wait_within(&client, target, Duration::from_secs(5), Duration::from_secs(60))
            .await
            .expect("a 200 ends the operation");
    }
}
