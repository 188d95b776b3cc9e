// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};

/// Optional bounds narrowing a contract search.
///
/// Dates are forwarded verbatim (`YYYY-MM-DD` expected by the backend) and
/// prices are in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_signing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_signing_date: Option<String>,
    /// Substring of the contracted entity's name or NIF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracted: Option<String>,
    /// Substring of the contracting entity's name or NIF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        *self == Filters::default()
    }

    /// Flat `(key, value)` pairs for every filter that is set, using the same
    /// keys as the JSON body.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let numbers = [
            ("minId", self.min_id),
            ("maxId", self.max_id),
            ("minPrice", self.min_price),
            ("maxPrice", self.max_price),
        ];
        let texts = [
            ("startPublicationDate", &self.start_publication_date),
            ("endPublicationDate", &self.end_publication_date),
            ("startSigningDate", &self.start_signing_date),
            ("endSigningDate", &self.end_signing_date),
            ("contracted", &self.contracted),
            ("contracting", &self.contracting),
        ];

        numbers
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
            .chain(
                texts
                    .into_iter()
                    .filter_map(|(key, value)| value.clone().map(|v| (key, v))),
            )
            .collect()
    }
}
