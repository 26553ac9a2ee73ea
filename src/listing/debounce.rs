//! Quiet-period debouncing for free-text filter input.
//!
//! A search box produces a value per keystroke; firing a backend request for
//! each one is wasteful. The debouncer forwards only the latest value, and
//! only once no new value has arrived for the configured delay.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// Quiet period applied to search boxes before a fetch is issued.
pub const SEARCH_DEBOUNCE_MS: u64 = 1000;

/// Input side of a debouncer. Dropping it tears the debouncer down and
/// cancels any emission still pending.
#[derive(Debug, Clone)]
pub struct DebounceInput<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> DebounceInput<T> {
    /// Feeds the next raw value. A pending emission is cancelled and the
    /// quiet window restarts.
    pub fn send(&self, value: T) {
        // The receiver outlives the handle in every wiring we have; a closed
        // channel just means teardown already happened.
        let _ = self.tx.send(value);
    }
}

/// Output side of a debouncer.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    rx: mpsc::UnboundedReceiver<T>,
}

/// Creates a debouncer with the given quiet period.
pub fn debounce<T>(delay: Duration) -> (DebounceInput<T>, Debouncer<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DebounceInput { tx }, Debouncer { delay, rx })
}

impl<T> Debouncer<T> {
    /// Waits for the input to settle and returns the latest value.
    ///
    /// Resolves once `delay` has elapsed with no new input. Returns `None`
    /// when every [`DebounceInput`] handle is gone — including when a value
    /// was still pending, which is the teardown contract: nothing fires
    /// after the input side goes away.
    pub async fn settled(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;
        loop {
            match timeout(self.delay, self.rx.recv()).await {
                // New input before the window elapsed: restart with it.
                Ok(Some(value)) => latest = value,
                // Input side dropped: cancel the pending emission.
                Ok(None) => return None,
                // Window elapsed untouched: the value has settled.
                Err(_) => return Some(latest),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{self, Duration};

    #[tokio::test(start_paused = true)]
    async fn emits_last_value_after_quiet_period() {
        let (input, mut debouncer) = debounce(Duration::from_millis(1000));

        let typing = async {
            for value in ["a", "ab", "abc"] {
                input.send(value.to_string());
                time::sleep(Duration::from_millis(100)).await;
            }
        };
        let (_, settled) = tokio::join!(typing, debouncer.settled());

        assert_eq!(settled.as_deref(), Some("abc"));
    }

    #[tokio::test(start_paused = true)]
    async fn new_input_restarts_the_window() {
        let (input, mut debouncer) = debounce(Duration::from_millis(1000));

        let typing = async {
            input.send("a".to_string());
            // Just inside the window, repeatedly.
            for value in ["ab", "abc", "abcd"] {
                time::sleep(Duration::from_millis(900)).await;
                input.send(value.to_string());
            }
        };
        let start = time::Instant::now();
        let (_, settled) = tokio::join!(typing, debouncer.settled());

        assert_eq!(settled.as_deref(), Some("abcd"));
        // Three restarts plus the final full window.
        assert!(start.elapsed() >= Duration::from_millis(3 * 900 + 1000));
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_pending_emission() {
        let (input, mut debouncer) = debounce::<String>(Duration::from_millis(1000));

        input.send("abc".to_string());
        drop(input);

        assert_eq!(debouncer.settled().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn no_input_means_no_emission() {
        let (input, mut debouncer) = debounce::<String>(Duration::from_millis(1000));
        drop(input);
        assert_eq!(debouncer.settled().await, None);
    }
}
