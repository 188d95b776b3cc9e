// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public procurement contract as published by the backend.
///
/// Read-only on this side. Missing fields deserialize to their defaults so
/// trimmed records embedded in search hits still parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contract {
    pub id: u64,
    pub contracting_procedure_type: String,
    pub publication_date: NaiveDate,
    pub signing_date: Option<NaiveDate>,
    /// Whether the contract falls under the Public Contracts Code
    pub ccp: bool,
    pub object_brief_description: String,
    pub initial_contractual_price: Currency,
    pub description: Option<String>,
    pub contracting: Vec<Entity>,
    pub contracted: Vec<Entity>,
    pub cpv: Cpv,
    pub regime: String,
    pub contract_status: Option<String>,
    pub non_written_contract_justification_types: String,
    pub contract_types: String,
    pub execution_deadline_days: u64,
    pub execution_place: String,
    pub contract_fundamentation_type: String,
    pub contestants: Vec<Entity>,
    pub invitees: Vec<Entity>,
    pub documents: Vec<Document>,
    pub contracting_procedure_url: Option<String>,
    pub announcement_id: Option<u64>,
    pub direct_award_fundamentation_type: String,
    pub observations: Option<String>,
    pub end_of_contract_type: Option<String>,
    pub close_date: Option<NaiveDate>,
    pub total_effective_price: Option<Currency>,
    pub causes_deadline_change: Option<String>,
    pub causes_price_change: Option<String>,
}

/// Common Procurement Vocabulary classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpv {
    pub code: String,
    pub designation: String,
}

/// A public or private body taking part in a contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u64,
    pub nif: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub description: String,
}

/// An amount in euro cents. The last two digits are always the cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Currency(pub i64);

impl Currency {
    pub fn cents(self) -> i64 {
        self.0
    }
}
