//! Polling waits over the bound operations client

use std::time::Duration;

use chrono::Utc;
use log::debug;
use serde_json::Value;
use tokio::time::{Instant, sleep};

use super::operation::{Operation, OperationStatus};
use crate::error::{Error, Result};

/// Knobs for [`Operation::wait_with`].
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Total budget across all polls.
    pub timeout: Duration,
    /// Sleep between consecutive polls.
    pub poll_interval: Duration,
    /// One-time sleep before the first poll of a freshly started operation.
    /// Polling immediately after submission is a guaranteed-useless round
    /// trip.
    pub initial_delay: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(600),
            poll_interval: Duration::from_secs(1),
            initial_delay: Duration::from_millis(500),
        }
    }
}

impl Operation {
    /// Wait with [`WaitOptions::default`].
    pub async fn wait_to_complete(self) -> Result<Operation> {
        self.wait_with(WaitOptions::default()).await
    }

    /// Poll through the bound operations client until the operation reaches
    /// a terminal state, or fail with [`Error::OperationTimeout`] once the
    /// total budget is spent.
    ///
    /// Pseudo and already-terminal operations return immediately without a
    /// single poll. Dropping the returned future cancels the wait.
    pub async fn wait_with(self, options: WaitOptions) -> Result<Operation> {
        if self.is_pseudo() || self.is_completed() {
            return Ok(self);
        }

        let waiting_since = Instant::now();
        if !options.initial_delay.is_zero() && self.freshly_started(options.initial_delay) {
            debug!(
                "operation {}: sleeping {:?} before first poll",
                self.id, options.initial_delay
            );
            sleep(options.initial_delay).await;
        }

        let mut op = self;
        loop {
            op = op.refresh().await?;
            if op.is_completed() {
                return Ok(op);
            }
            let waited = waiting_since.elapsed();
            if waited >= options.timeout {
                return Err(Error::OperationTimeout { id: op.id, waited });
            }
            debug!(
                "operation {}: status {}, next poll in {:?}",
                op.id, op.status, options.poll_interval
            );
            sleep(options.poll_interval).await;
        }
    }

    /// Wait with default options, then fail with [`Error::OperationFailed`]
    /// unless the terminal status is SUCCESS.
    pub async fn wait_and_get_successful(self) -> Result<Operation> {
        let op = self.wait_to_complete().await?;
        Self::ensure_successful(op)
    }

    /// [`wait_and_get_successful`](Operation::wait_and_get_successful) with
    /// explicit options.
    pub async fn wait_with_and_get_successful(self, options: WaitOptions) -> Result<Operation> {
        let op = self.wait_with(options).await?;
        Self::ensure_successful(op)
    }

    fn ensure_successful(op: Operation) -> Result<Operation> {
        if op.status == OperationStatus::Success {
            Ok(op)
        } else {
            // The server-supplied details travel verbatim, no reinterpretation.
            Err(Error::OperationFailed {
                id: op.id.clone(),
                details: op.details.clone().unwrap_or(Value::Null),
            })
        }
    }

    /// An operation that started less than `delay` ago counts as fresh; one
    /// with no recorded start (or a start in the future) does too.
    fn freshly_started(&self, delay: Duration) -> bool {
        match self.started.or(self.submitted) {
            Some(anchor) => Utc::now()
                .signed_duration_since(anchor)
                .to_std()
                .map(|elapsed| elapsed < delay)
                .unwrap_or(true),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::operation::OperationPoller;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn running_operation(id: &str) -> Operation {
        serde_json::from_str(&format!(r#"{{"id": "{id}", "status": "RUNNING"}}"#)).unwrap()
    }

    /// Poller replaying a fixed status script, then RUNNING forever.
    struct ScriptedPoller {
        script: Mutex<VecDeque<&'static str>>,
        polls: AtomicUsize,
        details: Option<Value>,
    }

    impl ScriptedPoller {
        fn new(script: &[&'static str]) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.iter().copied().collect()),
                polls: AtomicUsize::new(0),
                details: None,
            })
        }

        fn polls(&self) -> usize {
            self.polls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OperationPoller for ScriptedPoller {
        async fn get_operation(&self, id: &str) -> Result<Operation> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            let status = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or("RUNNING");
            let mut op: Operation = serde_json::from_str(&format!(
                r#"{{"id": "{id}", "status": "{status}"}}"#
            ))
            .unwrap();
            op.details = self.details.clone();
            Ok(op)
        }
    }

    fn fast_options() -> WaitOptions {
        let _ = env_logger::builder().is_test(true).try_init();
        WaitOptions {
            timeout: Duration::from_millis(200),
            poll_interval: Duration::from_millis(50),
            initial_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_wait_returns_after_three_polls() {
        let poller = ScriptedPoller::new(&["RUNNING", "RUNNING", "SUCCESS"]);
        let op = running_operation("op-1").bind(poller.clone());

        let finished = op.wait_with(fast_options()).await.unwrap();
        assert_eq!(finished.status, OperationStatus::Success);
        assert_eq!(poller.polls(), 3);
    }

    #[tokio::test]
    async fn test_wait_times_out_against_stuck_operation() {
        let poller = ScriptedPoller::new(&[]);
        let op = running_operation("op-2").bind(poller.clone());

        let begun = std::time::Instant::now();
        let err = op.wait_with(fast_options()).await.unwrap_err();
        let elapsed = begun.elapsed();

        match err {
            Error::OperationTimeout { id, waited } => {
                assert_eq!(id, "op-2");
                assert!(waited >= Duration::from_millis(200));
            }
            other => panic!("expected OperationTimeout, got {other}"),
        }
        // One extra poll interval of slack, no more.
        assert!(elapsed < Duration::from_millis(450), "took {elapsed:?}");
        assert!(poller.polls() >= 4);
    }

    #[tokio::test]
    async fn test_pseudo_operation_short_circuits_every_path() {
        let poller = ScriptedPoller::new(&[]);

        let refreshed = Operation::pseudo_success()
            .bind(poller.clone())
            .refresh()
            .await
            .unwrap();
        assert!(refreshed.is_pseudo());

        let waited = Operation::pseudo_success()
            .bind(poller.clone())
            .wait_to_complete()
            .await
            .unwrap();
        assert!(waited.is_completed());

        let successful = Operation::pseudo_success()
            .bind(poller.clone())
            .wait_and_get_successful()
            .await
            .unwrap();
        assert_eq!(successful.status, OperationStatus::Success);

        assert_eq!(poller.polls(), 0);
    }

    #[tokio::test]
    async fn test_already_terminal_operation_is_not_polled() {
        let poller = ScriptedPoller::new(&[]);
        let mut op = running_operation("op-3");
        op.status = OperationStatus::Fail;
        let op = op.bind(poller.clone());

        let finished = op.wait_with(fast_options()).await.unwrap();
        assert_eq!(finished.status, OperationStatus::Fail);
        assert_eq!(poller.polls(), 0);
    }

    #[tokio::test]
    async fn test_failed_operation_carries_details_verbatim() {
        let poller = Arc::new(ScriptedPoller {
            script: Mutex::new(["FAIL"].into_iter().collect()),
            polls: AtomicUsize::new(0),
            details: Some(serde_json::json!({"reason": "quota exceeded", "hard": true})),
        });
        let op = running_operation("op-4").bind(poller.clone());

        let err = op.wait_with_and_get_successful(fast_options()).await.unwrap_err();
        match err {
            Error::OperationFailed { id, details } => {
                assert_eq!(id, "op-4");
                assert_eq!(details["reason"], "quota exceeded");
                assert_eq!(details["hard"], true);
            }
            other => panic!("expected OperationFailed, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_initial_delay_applies_to_fresh_operations() {
        let poller = ScriptedPoller::new(&["SUCCESS"]);
        // No started/submitted timestamps: counts as freshly started.
        let op = running_operation("op-5").bind(poller.clone());

        let options = WaitOptions {
            timeout: Duration::from_secs(1),
            poll_interval: Duration::from_millis(10),
            initial_delay: Duration::from_millis(80),
        };
        let begun = std::time::Instant::now();
        op.wait_with(options).await.unwrap();
        assert!(begun.elapsed() >= Duration::from_millis(80));
        assert_eq!(poller.polls(), 1);
    }
}
