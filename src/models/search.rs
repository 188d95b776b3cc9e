// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::contract::Contract;
use crate::models::filter::Filters;
use crate::models::sort::SortBy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request body for `POST /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query. Empty matches every contract.
    pub query: String,
    #[serde(default)]
    pub sort: SortBy,
    /// Omitted from the body when no filter is set
    #[serde(default, skip_serializing_if = "Filters::is_empty")]
    pub filters: Filters,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl SearchRequest {
    /// A request for the first page of `query` with default sort and no filters
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            sort: SortBy::default(),
            filters: Filters::default(),
            page: default_page(),
        }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new("")
    }
}

/// Where a query matched inside one field, as offsets into the original
/// field value. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingRange {
    pub start: usize,
    pub end: usize,
    /// For list-valued fields, the positions of the matching list elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indices: Option<Vec<usize>>,
}

impl MatchingRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            indices: None,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A contract hit together with the highlight ranges for each matched field.
///
/// A field missing from `matching_ranges` had no match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedContract {
    #[serde(flatten)]
    pub contract: Contract,
    #[serde(default)]
    pub matching_ranges: BTreeMap<String, Vec<MatchingRange>>,
}

impl SearchedContract {
    /// Highlight ranges for `field`, empty when it did not match
    pub fn ranges_for(&self, field: &str) -> &[MatchingRange] {
        self.matching_ranges
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Response body of `POST /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub contracts: Vec<SearchedContract>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
    pub elapsed_millis: u64,
    pub hits_per_page: u32,
}

impl SearchResponse {
    /// The placeholder shown when a search could not be completed
    pub fn empty() -> Self {
        Self {
            contracts: Vec::new(),
            total: 0,
            page: 0,
            total_pages: 0,
            elapsed_millis: 0,
            hits_per_page: 0,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// Whether the paging counters agree with each other and with the hits
    pub fn is_consistent(&self) -> bool {
        let page_in_range = self.total == 0 || self.page <= self.total_pages;
        let hits_fit = self.contracts.len() <= self.hits_per_page as usize;
        page_in_range && hits_fit
    }
}
