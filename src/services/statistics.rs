// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Spend statistics client and its time-to-live cache.
//!
//! The cache is `Empty` until the first successful fetch, `Fresh` while the
//! snapshot is younger than the TTL and `Stale` afterwards. A stale snapshot
//! is refreshed on the next request; if that refresh fails the stale value is
//! served unchanged. With no snapshot at all, failures yield
//! `Statistics::default()`.

use crate::models::statistics::Statistics;
use crate::services::error::ClientError;
use crate::services::transport::{send_json, HttpRequest, HttpTransport};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const STATISTICS_PATH: &str = "/statistics";

/// Source of the current time for TTL checks
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Fresh,
    Stale,
}

// Value and timestamp are always replaced together
#[derive(Debug, Clone, Copy)]
struct CachedStatistics {
    value: Statistics,
    fetched_at: Instant,
}

/// Process-wide statistics snapshot. Create one at startup and hand it to
/// every caller that needs statistics.
pub struct StatisticsCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    // Held across a refresh so only one fetch is in flight; waiters then
    // observe its result.
    entry: Mutex<Option<CachedStatistics>>,
    // Completed refresh attempts, successful or not
    attempts: AtomicU64,
}

impl StatisticsCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entry: Mutex::new(None),
            attempts: AtomicU64::new(0),
        }
    }

    pub async fn state(&self) -> CacheState {
        match *self.entry.lock().await {
            None => CacheState::Empty,
            Some(cached) if self.is_fresh(&cached) => CacheState::Fresh,
            Some(_) => CacheState::Stale,
        }
    }

    fn is_fresh(&self, cached: &CachedStatistics) -> bool {
        self.clock.now().saturating_duration_since(cached.fetched_at) < self.ttl
    }

    /// Serve the cached snapshot while fresh, otherwise refresh it with
    /// `fetch`. Never fails.
    pub async fn get_or_refresh<F, Fut>(&self, fetch: F) -> Statistics
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Statistics, ClientError>>,
    {
        let seen_attempts = self.attempts.load(Ordering::Acquire);
        let mut entry = self.entry.lock().await;

        if let Some(cached) = *entry {
            if self.is_fresh(&cached) {
                return cached.value;
            }
        }

        // A refresh finished while we waited for the lock: share its outcome
        if self.attempts.load(Ordering::Acquire) != seen_attempts {
            return match *entry {
                Some(cached) => cached.value,
                None => Statistics::default(),
            };
        }

        // Stamp with the request start so the snapshot never looks newer than it is
        let started_at = self.clock.now();

        let outcome = fetch().await;
        self.attempts.fetch_add(1, Ordering::Release);

        match outcome {
            Ok(value) => {
                *entry = Some(CachedStatistics {
                    value,
                    fetched_at: started_at,
                });
                debug!("Statistics refreshed");
                value
            }
            Err(e) => match *entry {
                Some(stale) => {
                    warn!(error = %e, "Statistics refresh failed, serving stale snapshot");
                    stale.value
                }
                None => {
                    warn!(error = %e, "Statistics unavailable, serving empty snapshot");
                    Statistics::default()
                }
            },
        }
    }
}

/// Client for `GET /statistics`
#[derive(Clone)]
pub struct StatisticsClient {
    transport: Arc<dyn HttpTransport>,
}

impl StatisticsClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// One uncached fetch
    pub async fn fetch(&self) -> Result<Statistics, ClientError> {
        send_json(
            self.transport.as_ref(),
            HttpRequest::get(STATISTICS_PATH),
            None,
        )
        .await
    }

    /// Statistics through `cache`, degrading to the last good or an all-zero
    /// snapshot instead of failing
    pub async fn fetch_cached(&self, cache: &StatisticsCache) -> Statistics {
        cache.get_or_refresh(|| self.fetch()).await
    }
}
