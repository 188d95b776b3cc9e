// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Turning loose string parameters (URL query strings, form state, CLI flags)
//! into a validated [`SearchRequest`], and back.
//!
//! Everything here is pure and synchronous. Invalid input never fails: it is
//! replaced by the default for that field or dropped.

use crate::models::filter::Filters;
use crate::models::search::SearchRequest;
use crate::models::sort::{SortBy, SortDirection, SortField};
use crate::services::validation::{validate_enum_or_default, WireEnum};
use std::collections::{BTreeMap, HashMap};

pub const QUERY_KEY: &str = "query";
pub const SORT_FIELD_KEY: &str = "sortField";
pub const SORT_DIRECTION_KEY: &str = "sortDirection";
pub const PAGE_KEY: &str = "page";

/// Read-only access to raw string parameters by key
pub trait ParamSource {
    fn param(&self, key: &str) -> Option<&str>;
}

impl ParamSource for HashMap<String, String> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ParamSource for [(&str, &str)] {
    fn param(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

impl<const N: usize> ParamSource for [(&str, &str); N] {
    fn param(&self, key: &str) -> Option<&str> {
        self.as_slice().param(key)
    }
}

/// Parameters decoded from a URL query string.
///
/// When a key repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode `a=1&b=2` (a leading `?` is ignored)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    pub fn from_url(url: &url::Url) -> Self {
        Self {
            pairs: url.query_pairs().into_owned().collect(),
        }
    }
}

impl ParamSource for QueryParams {
    fn param(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

type FilterSetter = fn(&mut Filters, &str);

/// The closed set of filter keys and how each raw value is coerced.
/// Numeric keys drop values that are not base-10 integers.
const FILTER_TABLE: [(&str, FilterSetter); 10] = [
    ("minId", |f, v| f.min_id = parse_integer(v)),
    ("maxId", |f, v| f.max_id = parse_integer(v)),
    ("startPublicationDate", |f, v| {
        f.start_publication_date = Some(v.to_string())
    }),
    ("endPublicationDate", |f, v| {
        f.end_publication_date = Some(v.to_string())
    }),
    ("startSigningDate", |f, v| {
        f.start_signing_date = Some(v.to_string())
    }),
    ("endSigningDate", |f, v| f.end_signing_date = Some(v.to_string())),
    ("contracted", |f, v| f.contracted = Some(v.to_string())),
    ("contracting", |f, v| f.contracting = Some(v.to_string())),
    ("minPrice", |f, v| f.min_price = parse_integer(v)),
    ("maxPrice", |f, v| f.max_price = parse_integer(v)),
];

/// Keys recognised as filters, in table order
pub fn filter_keys() -> impl Iterator<Item = &'static str> {
    FILTER_TABLE.iter().map(|(key, _)| *key)
}

fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

// Leading integer prefix after optional whitespace and sign: "3abc" -> 3,
// "2.9" -> 2. Too many digits saturate.
fn parse_leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digit_count = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_count == 0 {
        return None;
    }

    let magnitude = unsigned[..digit_count].parse::<i64>().unwrap_or(i64::MAX);
    if trimmed.starts_with('-') {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

fn non_empty<'a, P: ParamSource + ?Sized>(params: &'a P, key: &str) -> Option<&'a str> {
    params.param(key).filter(|v| !v.is_empty())
}

/// Build the filter set from every filter key that is present and non-empty
pub fn normalize_filters<P: ParamSource + ?Sized>(params: &P) -> Filters {
    let mut filters = Filters::default();
    for (key, apply) in FILTER_TABLE {
        if let Some(value) = non_empty(params, key) {
            apply(&mut filters, value);
        }
    }
    filters
}

/// Resolve raw parameters into a complete search request. Never fails.
///
/// Unknown sort values fall back to `publicationDate`/`descending`. The page
/// is read from its leading integer and is at least 1.
pub fn resolve_search_request<P: ParamSource + ?Sized>(params: &P) -> SearchRequest {
    let query = non_empty(params, QUERY_KEY).unwrap_or_default().to_string();

    let sort = SortBy {
        field: validate_enum_or_default(
            params.param(SORT_FIELD_KEY),
            &SortField::ALL,
            SortField::default(),
        ),
        direction: validate_enum_or_default(
            params.param(SORT_DIRECTION_KEY),
            &SortDirection::ALL,
            SortDirection::default(),
        ),
    };

    let page = non_empty(params, PAGE_KEY)
        .and_then(parse_leading_integer)
        .unwrap_or(1)
        .clamp(1, i64::from(u32::MAX)) as u32;

    SearchRequest {
        query,
        sort,
        filters: normalize_filters(params),
        page,
    }
}

impl SearchRequest {
    /// Flat URL-parameter form of this request.
    ///
    /// Every key is always emitted except unset filters, so the result
    /// resolves back to an identical request.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (QUERY_KEY, self.query.clone()),
            (SORT_FIELD_KEY, self.sort.field.as_str().to_string()),
            (SORT_DIRECTION_KEY, self.sort.direction.as_str().to_string()),
            (PAGE_KEY, self.page.to_string()),
        ];
        pairs.extend(self.filters.to_pairs());
        pairs
    }

    /// URL-encoded query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }
}
