// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Client side of the public procurement contract search: request resolution
//! from loose parameters, the backend wire contract, and resilient page loading.

pub mod models;
pub mod services;

/// Crate version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `CONTRACTS_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("CONTRACTS_VERSION");
