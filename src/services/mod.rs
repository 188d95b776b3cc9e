// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod config;
pub mod error;
pub mod format;
pub mod highlight;
pub mod logging;
pub mod page;
pub mod params;
pub mod search;
pub mod statistics;
pub mod transport;
pub mod validation;
