// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Page loaders: everything a page needs, fetched concurrently, with failures
//! turned into renderable fallbacks instead of errors.

use crate::models::page::{ContractPage, SearchPage};
use crate::models::search::SearchResponse;
use crate::services::error::ClientError;
use crate::services::logging::truncate_for_log;
use crate::services::params::{resolve_search_request, ParamSource};
use crate::services::search::SearchClient;
use crate::services::statistics::{StatisticsCache, StatisticsClient};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Load the search results page for raw `params`.
///
/// Search and statistics are fetched concurrently and neither affects the
/// other. A failed search yields an empty result set plus an error message;
/// a cancelled one yields an empty result set and no message.
pub async fn load_search_page<P: ParamSource + ?Sized>(
    params: &P,
    search: &SearchClient,
    statistics: &StatisticsClient,
    cache: &StatisticsCache,
    cancel: Option<&CancellationToken>,
) -> SearchPage {
    let search_request = resolve_search_request(params);

    let (search_result, statistics) = tokio::join!(
        search.search(&search_request, cancel),
        statistics.fetch_cached(cache)
    );

    let (search_response, error) = match search_result {
        Ok(response) => (response, None),
        Err(ClientError::Cancelled) => {
            debug!(query = %truncate_for_log(&search_request.query), "Search page load cancelled");
            (SearchResponse::empty(), None)
        }
        Err(e) => {
            warn!(query = %truncate_for_log(&search_request.query), error = %e, "Search failed");
            (SearchResponse::empty(), Some(e.to_string()))
        }
    };

    SearchPage {
        search_response,
        search_request,
        statistics,
        error,
    }
}

/// Load the contract page for the raw `{id}` path segment.
///
/// A non-numeric id renders as "no contract" without calling the backend.
pub async fn load_contract_page(raw_id: &str, search: &SearchClient) -> ContractPage {
    let Ok(id) = raw_id.trim().parse::<u64>() else {
        debug!(raw_id = %truncate_for_log(raw_id), "Ignoring non-numeric contract id");
        return ContractPage {
            contract: None,
            error: None,
        };
    };

    match search.get_contract(id).await {
        Ok(contract) => ContractPage {
            contract: Some(contract),
            error: None,
        },
        Err(e) => {
            warn!(id, error = %e, "Failed to load contract");
            ContractPage {
                contract: None,
                error: Some(e.to_string()),
            }
        }
    }
}
