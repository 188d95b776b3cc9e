// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::contract::Contract;
use crate::models::search::{SearchRequest, SearchResponse};
use crate::models::statistics::Statistics;
use serde::{Deserialize, Serialize};

/// Everything the search results page needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub search_response: SearchResponse,
    /// The resolved request, used to prefill the search form
    pub search_request: SearchRequest,
    pub statistics: Statistics,
    /// Message to show inline when the search itself failed
    pub error: Option<String>,
}

/// View-model of the single contract page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPage {
    pub contract: Option<Contract>,
    pub error: Option<String>,
}
