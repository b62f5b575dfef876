//! Login attempt tracking
//!
//! Brute-force protection for the login path: a per-username counter of
//! recent failed logins with time-bounded retention.
//!
//! # Concurrency
//!
//! The tracker is the only shared mutable state in the authentication core.
//! Records live in a sharded [`DashMap`]; every operation locks a single
//! shard for the duration of one entry update, so concurrent logins for
//! different usernames rarely contend and updates for the same username are
//! never lost. Callers need no external locking.
//!
//! The tracker only counts. Whether an account is locked is owned by the
//! user directory; the login service consults
//! [`LoginAttemptTracker::has_exceeded_max_attempts`] and flips the
//! directory's flag.

use crate::config::LoginAttemptConfig;
use crate::utils::SystemClock;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use warden_domain::error::Result;
use warden_domain::ports::Clock;

/// Failure record for one username
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptRecord {
    /// Failed logins within the retention window
    pub failures: u32,
    /// Instant of the latest failure (seconds since epoch)
    pub last_failure: u64,
}

/// Concurrent failed-login counter
pub struct LoginAttemptTracker {
    config: LoginAttemptConfig,
    records: DashMap<String, AttemptRecord>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for LoginAttemptTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginAttemptTracker")
            .field("config", &self.config)
            .field("tracked", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl LoginAttemptTracker {
    /// Create a tracker with an explicit clock
    ///
    /// Fails with a configuration error when a threshold is zero: a zero
    /// retention window never locks anyone out and a zero maximum locks
    /// out everyone.
    pub fn new(config: LoginAttemptConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            records: DashMap::new(),
            clock,
        })
    }

    /// Create a tracker reading the wall clock
    pub fn with_system_clock(config: LoginAttemptConfig) -> Result<Self> {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Failures at which an account counts as exceeding its attempts
    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// Record a failed login
    ///
    /// Creates the record on first failure. A record whose last failure is
    /// older than the retention window restarts at one.
    pub fn record_failure(&self, username: &str) -> u32 {
        let now = self.clock.now_unix_secs();
        let retention = self.config.retention_secs;

        let failures = {
            let mut entry = self
                .records
                .entry(username.to_string())
                .or_insert(AttemptRecord {
                    failures: 0,
                    last_failure: now,
                });
            let record = entry.value_mut();
            if is_stale(record, now, retention) {
                record.failures = 0;
            }
            record.failures = record.failures.saturating_add(1);
            record.last_failure = now;
            record.failures
        };

        if failures == self.config.max_attempts {
            warn!(
                username,
                failures, "Login attempts exceeded, account should be locked"
            );
        } else {
            debug!(username, failures, "Recorded failed login attempt");
        }
        failures
    }

    /// Current failure count; absent and stale records count as zero
    pub fn failure_count(&self, username: &str) -> u32 {
        let now = self.clock.now_unix_secs();
        self.records
            .get(username)
            .filter(|record| !is_stale(record.value(), now, self.config.retention_secs))
            .map_or(0, |record| record.failures)
    }

    /// True iff the failure count has reached the configured threshold
    pub fn has_exceeded_max_attempts(&self, username: &str) -> bool {
        self.failure_count(username) >= self.config.max_attempts
    }

    /// Drop the record, resetting the counter
    pub fn evict(&self, username: &str) {
        if self.records.remove(username).is_some() {
            debug!(username, "Evicted login attempt record");
        }
    }

    /// Snapshot of a username's record, including stale ones
    pub fn record(&self, username: &str) -> Option<AttemptRecord> {
        self.records.get(username).map(|record| *record.value())
    }

    /// Number of usernames currently tracked
    pub fn tracked(&self) -> usize {
        self.records.len()
    }

    /// Evict every record older than the retention window
    ///
    /// Returns the number of evicted records.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now_unix_secs();
        let retention = self.config.retention_secs;
        let before = self.records.len();

        self.records
            .retain(|_, record| !is_stale(record, now, retention));

        let evicted = before.saturating_sub(self.records.len());
        if evicted > 0 {
            debug!(evicted, "Swept stale login attempt records");
        }
        evicted
    }
}

fn is_stale(record: &AttemptRecord, now: u64, retention_secs: u64) -> bool {
    now.saturating_sub(record.last_failure) >= retention_secs
}

/// Run [`LoginAttemptTracker::sweep`] every `interval` until `shutdown` fires
///
/// Keeps memory bounded for usernames that fail once and never return.
pub fn spawn_sweeper(
    tracker: Arc<LoginAttemptTracker>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                () = shutdown.cancelled() => {
                    debug!("Login attempt sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    tracker.sweep();
                }
            }
        }
    })
}
