//! Unit tests for the login attempt tracker

use std::sync::Arc;
use warden_domain::error::Error;
use warden_infrastructure::auth::LoginAttemptTracker;
use warden_infrastructure::config::LoginAttemptConfig;
use warden_infrastructure::utils::ManualClock;

const MAX_ATTEMPTS: u32 = 5;
const RETENTION_SECS: u64 = 900;

fn tracker() -> (LoginAttemptTracker, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(10_000));
    let tracker = LoginAttemptTracker::new(
        LoginAttemptConfig {
            max_attempts: MAX_ATTEMPTS,
            retention_secs: RETENTION_SECS,
            sweep_interval_secs: 60,
        },
        clock.clone(),
    )
    .unwrap();
    (tracker, clock)
}

#[test]
fn test_zero_thresholds_are_configuration_errors() {
    let clock = Arc::new(ManualClock::new(10_000));

    let no_retention = LoginAttemptConfig {
        retention_secs: 0,
        ..LoginAttemptConfig::default()
    };
    let result = LoginAttemptTracker::new(no_retention, clock.clone());
    assert!(matches!(result, Err(Error::Configuration { .. })));

    let no_attempts = LoginAttemptConfig {
        max_attempts: 0,
        ..LoginAttemptConfig::default()
    };
    let result = LoginAttemptTracker::new(no_attempts, clock);
    assert!(matches!(result, Err(Error::Configuration { .. })));

    let result = LoginAttemptTracker::with_system_clock(LoginAttemptConfig {
        sweep_interval_secs: 0,
        ..LoginAttemptConfig::default()
    });
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_unknown_identity_has_zero_failures() {
    let (tracker, _) = tracker();
    assert_eq!(tracker.failure_count("nobody"), 0);
    assert!(!tracker.has_exceeded_max_attempts("nobody"));
    assert!(tracker.record("nobody").is_none());
}

#[test]
fn test_threshold_reached_after_max_failures() {
    let (tracker, _) = tracker();

    for _ in 0..MAX_ATTEMPTS - 1 {
        tracker.record_failure("dave");
    }
    assert!(!tracker.has_exceeded_max_attempts("dave"));

    tracker.record_failure("dave");
    assert!(tracker.has_exceeded_max_attempts("dave"));
}

#[test]
fn test_evict_resets_counter() {
    let (tracker, _) = tracker();
    for _ in 0..MAX_ATTEMPTS {
        tracker.record_failure("dave");
    }

    tracker.evict("dave");

    assert!(!tracker.has_exceeded_max_attempts("dave"));
    assert_eq!(tracker.failure_count("dave"), 0);
    assert_eq!(tracker.tracked(), 0);
}

#[test]
fn test_evict_unknown_identity_is_noop() {
    let (tracker, _) = tracker();
    tracker.record_failure("erin");
    tracker.evict("frank");
    assert_eq!(tracker.failure_count("erin"), 1);
}

#[test]
fn test_identities_are_counted_independently() {
    let (tracker, _) = tracker();
    for _ in 0..MAX_ATTEMPTS {
        tracker.record_failure("dave");
    }
    tracker.record_failure("erin");

    assert!(tracker.has_exceeded_max_attempts("dave"));
    assert!(!tracker.has_exceeded_max_attempts("erin"));
}

#[test]
fn test_failures_expire_after_retention_window() {
    let (tracker, clock) = tracker();
    for _ in 0..MAX_ATTEMPTS {
        tracker.record_failure("dave");
    }

    clock.advance(RETENTION_SECS - 1);
    assert!(tracker.has_exceeded_max_attempts("dave"));

    clock.advance(1);
    assert!(!tracker.has_exceeded_max_attempts("dave"));
    assert_eq!(tracker.record_failure("dave"), 1);
}

#[test]
fn test_each_failure_extends_the_window() {
    let (tracker, clock) = tracker();
    tracker.record_failure("dave");
    clock.advance(RETENTION_SECS - 10);
    tracker.record_failure("dave");
    clock.advance(RETENTION_SECS - 10);

    assert_eq!(tracker.failure_count("dave"), 2);
}

#[test]
fn test_sweep_evicts_only_stale_records() {
    let (tracker, clock) = tracker();
    tracker.record_failure("stale-1");
    tracker.record_failure("stale-2");
    clock.advance(RETENTION_SECS);
    tracker.record_failure("fresh");

    assert_eq!(tracker.sweep(), 2);
    assert_eq!(tracker.tracked(), 1);
    assert_eq!(tracker.failure_count("fresh"), 1);
    assert_eq!(tracker.sweep(), 0);
}

#[test]
fn test_concurrent_failures_for_one_identity_are_not_lost() {
    const CALLERS: u32 = 128;
    let (tracker, _) = tracker();

    std::thread::scope(|scope| {
        for _ in 0..CALLERS {
            scope.spawn(|| {
                tracker.record_failure("mallory");
            });
        }
    });

    assert_eq!(tracker.failure_count("mallory"), CALLERS);
    assert!(tracker.has_exceeded_max_attempts("mallory"));
}

#[test]
fn test_concurrent_failures_across_identities() {
    const USERS: usize = 16;
    const FAILURES_PER_USER: u32 = 10;
    let (tracker, _) = tracker();
    let usernames: Vec<String> = (0..USERS).map(|i| format!("user-{i}")).collect();

    std::thread::scope(|scope| {
        for username in &usernames {
            for _ in 0..FAILURES_PER_USER {
                let tracker = &tracker;
                scope.spawn(move || {
                    tracker.record_failure(username);
                    tracker.has_exceeded_max_attempts(username);
                });
            }
        }
    });

    assert_eq!(tracker.tracked(), USERS);
    for username in &usernames {
        assert_eq!(tracker.failure_count(username), FAILURES_PER_USER);
    }
}
