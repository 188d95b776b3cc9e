// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::contract::Contract;
use crate::models::search::{SearchRequest, SearchResponse};
use crate::services::error::ClientError;
use crate::services::logging::truncate_for_log;
use crate::services::transport::{send_json, HttpRequest, HttpTransport};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

pub const SEARCH_PATH: &str = "/search";

/// Client for the backend search and contract lookup endpoints.
///
/// Makes exactly one request per call: no caching and no retries.
#[derive(Clone)]
pub struct SearchClient {
    transport: Arc<dyn HttpTransport>,
}

impl SearchClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Run a search. Cancelling `cancel` aborts the request and returns
    /// [`ClientError::Cancelled`].
    pub async fn search(
        &self,
        request: &SearchRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<SearchResponse, ClientError> {
        let body = serde_json::to_string(request).map_err(|e| ClientError::Transport {
            message: format!("Failed to encode search request: {}", e),
            status: None,
        })?;

        let response: SearchResponse = send_json(
            self.transport.as_ref(),
            HttpRequest::post_json(SEARCH_PATH, body),
            cancel,
        )
        .await?;

        if !response.is_consistent() {
            warn!(
                page = response.page,
                total_pages = response.total_pages,
                hits = response.contracts.len(),
                hits_per_page = response.hits_per_page,
                "Search response paging is inconsistent"
            );
        }

        debug!(
            query = %truncate_for_log(&request.query),
            page = response.page,
            total = response.total,
            elapsed_millis = response.elapsed_millis,
            "Search completed"
        );

        Ok(response)
    }

    /// Fetch a single contract by id
    pub async fn get_contract(&self, id: u64) -> Result<Contract, ClientError> {
        send_json(
            self.transport.as_ref(),
            HttpRequest::get(format!("/contract/{}", id)),
            None,
        )
        .await
    }
}
