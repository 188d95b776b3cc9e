// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};

/// Rolling spend and contract-count aggregates served by `GET /statistics`.
///
/// Amounts are in cents. `Default` is the all-zero snapshot shown when the
/// backend has never been reachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_spent_last_365_days: i64,
    pub contracts_last_365_days: i64,
    pub total_spent_last_30_days: i64,
    pub contracts_last_30_days: i64,
    pub total_spent_last_7_days: i64,
    pub contracts_last_7_days: i64,
}
