// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! The HTTP capability the backend clients depend on, and its reqwest
//! implementation.

use crate::services::config::ClientConfig;
use crate::services::error::{ClientError, INVALID_RESPONSE_MESSAGE};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A request relative to the backend API root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Endpoint path such as `/search`
    pub path: String,
    /// JSON body, only sent with `Post`
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post_json(path: impl Into<String>, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No HTTP response was received (connection refused, timeout, bad URL, ...)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

/// Sends one request to the backend and returns whatever came back.
///
/// Non-success statuses are returned as responses, not failures; mapping them
/// is the caller's job.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// [`HttpTransport`] over a shared `reqwest::Client`
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(format!("contracts-search/{}", crate::VERSION))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let url = self
            .config
            .endpoint(&request.path)
            .map_err(|e| TransportFailure(e.to_string()))?;

        let builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(request.body.unwrap_or_default()),
        };

        let response = builder
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportFailure(format!("Failed to reach backend: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportFailure(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

/// Send `request` and decode a JSON success body into `T`.
///
/// Every failure becomes a [`ClientError::Transport`], except cancellation
/// through `cancel`, which drops the in-flight request and yields
/// [`ClientError::Cancelled`].
pub async fn send_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    request: HttpRequest,
    cancel: Option<&CancellationToken>,
) -> Result<T, ClientError> {
    let path = request.path.clone();

    let outcome = match cancel {
        Some(token) => {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    debug!(path = %path, "Request cancelled");
                    return Err(ClientError::Cancelled);
                }
                outcome = transport.send(request) => outcome,
            }
        }
        None => transport.send(request).await,
    };

    let response = outcome.map_err(|e| {
        warn!(path = %path, error = %e, "Backend unreachable");
        ClientError::Transport {
            message: e.to_string(),
            status: None,
        }
    })?;

    if !response.is_success() {
        let error = ClientError::from_response(response.status, &response.body);
        warn!(path = %path, status = response.status, error = %error, "Backend returned an error");
        return Err(error);
    }

    serde_json::from_str(&response.body).map_err(|e| {
        warn!(path = %path, error = %e, "Failed to decode backend response");
        ClientError::Transport {
            message: INVALID_RESPONSE_MESSAGE.to_string(),
            status: Some(response.status),
        }
    })
}
