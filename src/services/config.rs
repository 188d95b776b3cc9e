// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STATISTICS_TTL_SECS: u64 = 5 * 60;

/// Configuration for talking to the search backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, e.g. `http://localhost:3000`
    pub backend_url: Url,
    /// Path prefix in front of every endpoint
    pub api_prefix: String,
    /// Upper bound for a single HTTP round trip
    pub request_timeout: Duration,
    /// How long a statistics snapshot is served without refreshing
    pub statistics_ttl: Duration,
}

impl ClientConfig {
    /// Defaults for everything except the backend location
    pub fn new(backend_url: Url) -> Self {
        Self {
            backend_url,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            statistics_ttl: Duration::from_secs(DEFAULT_STATISTICS_TTL_SECS),
        }
    }

    /// Load configuration from environment variables, with defaults for
    /// everything. Only an unparseable `BACKEND_URL` is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let backend_url = Url::parse(&raw_url)
            .map_err(|e| anyhow!("BACKEND_URL is not a valid URL ({}): {}", raw_url, e))?;

        let api_prefix = lookup("BACKEND_API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());

        let request_timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        let statistics_ttl_secs = lookup("STATISTICS_TTL_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_STATISTICS_TTL_SECS);

        Ok(Self {
            backend_url,
            api_prefix: normalize_prefix(&api_prefix),
            request_timeout: Duration::from_secs(request_timeout_secs),
            statistics_ttl: Duration::from_secs(statistics_ttl_secs),
        })
    }

    /// Absolute URL of `path` (e.g. `/search`) under the API prefix
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let full_path = format!("{}/{}", self.api_prefix, path.trim_start_matches('/'));
        self.backend_url
            .join(&full_path)
            .map_err(|e| anyhow!("Invalid endpoint path {}: {}", full_path, e))
    }
}

// "/api/" and "api" both become "/api"; an empty prefix stays empty
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
