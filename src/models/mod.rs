// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod contract;
pub mod filter;
pub mod page;
pub mod search;
pub mod sort;
pub mod statistics;
