//! Retry loop tests

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use shirasu_domain::Error;
use shirasu_infrastructure::config::ConnectionConfig;
use shirasu_infrastructure::{RetryPolicy, retry_with_policy};
use tokio_util::sync::CancellationToken;

#[tokio::test(start_paused = true)]
async fn test_retries_whitelisted_errors_until_success() {
    let attempts = Arc::new(AtomicU32::new(0));
    let policy = RetryPolicy::fixed(Duration::from_secs(5));
    let shutdown = CancellationToken::new();

    let counter = Arc::clone(&attempts);
    let result = retry_with_policy(&policy, &shutdown, || {
        let counter = Arc::clone(&counter);
        async move {
            match counter.fetch_add(1, Ordering::SeqCst) {
                0 => Err(Error::ConnectionRefused),
                1 => Err(Error::ConnectionClosed),
                _ => Ok(()),
            }
        }
    })
    .await;

    assert!(result.is_ok());
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_fatal_error_propagates() {
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);

    let result = retry_with_policy(
        &RetryPolicy::fixed(Duration::from_secs(1)),
        &CancellationToken::new(),
        || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::internal("boom")) }
        },
    )
    .await;

    assert!(matches!(result, Err(Error::Internal { .. })));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_attempt_limit() {
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);
    let policy = RetryPolicy::fixed(Duration::from_millis(100)).with_max_attempts(3);

    let result = retry_with_policy(&policy, &CancellationToken::new(), || {
        counter.fetch_add(1, Ordering::SeqCst);
        async { Err(Error::ConnectionRefused) }
    })
    .await;

    assert!(matches!(result, Err(Error::ConnectionRefused)));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_waiting() {
    let shutdown = CancellationToken::new();
    let policy = RetryPolicy::fixed(Duration::from_secs(3600));

    let trigger = shutdown.clone();
    let result = retry_with_policy(&policy, &shutdown, || {
        trigger.cancel();
        async { Err(Error::ConnectionClosed) }
    })
    .await;

    assert!(result.is_ok());
}

#[test]
fn test_policy_from_connection_config() {
    let config = ConnectionConfig {
        reconnect_delay_ms: 250,
        max_reconnect_attempts: Some(2),
        ..ConnectionConfig::default()
    };
    let policy = RetryPolicy::from(&config);
    assert_eq!(policy.delay, Duration::from_millis(250));
    assert_eq!(policy.max_attempts, Some(2));
}
