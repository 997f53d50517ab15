//! Test assertion helpers.
//!
//! Provides polling-based assertions for multi-threaded test scenarios.

use std::{
    thread,
    time::{Duration, Instant},
};

/// Default polling interval for [`assert_eventually`].
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Polls a condition until it returns true or the timeout expires.
///
/// Useful when another thread is expected to reach some state but the exact
/// timing is non-deterministic. Avoids flaky tests built on fixed sleeps.
///
/// # Returns
///
/// `true` if the condition became true before timeout, `false` otherwise.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
/// use std::{thread, time::Duration};
/// use inferadb_ledger_test_utils::assert_eventually;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let setter = Arc::clone(&flag);
/// thread::spawn(move || setter.store(true, Ordering::SeqCst));
///
/// assert!(assert_eventually(Duration::from_secs(1), || flag.load(Ordering::SeqCst)));
/// ```
pub fn assert_eventually<F>(timeout: Duration, condition: F) -> bool
where
    F: Fn() -> bool,
{
    let start = Instant::now();

    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        thread::sleep(DEFAULT_POLL_INTERVAL);
    }

    // Final check after timeout
    condition()
}
