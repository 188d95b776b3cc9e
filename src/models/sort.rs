// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::services::validation::WireEnum;
use serde::{Deserialize, Serialize};

/// Field the backend orders search results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    #[default]
    PublicationDate,
    SigningDate,
    Price,
}

impl SortField {
    /// Every accepted sort field, in display order
    pub const ALL: [SortField; 4] = [
        SortField::Id,
        SortField::PublicationDate,
        SortField::SigningDate,
        SortField::Price,
    ];
}

impl WireEnum for SortField {
    fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::PublicationDate => "publicationDate",
            SortField::SigningDate => "signingDate",
            SortField::Price => "price",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];
}

impl WireEnum for SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order sent with a search. Defaults to newest publications first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortBy {
    pub field: SortField,
    pub direction: SortDirection,
}
