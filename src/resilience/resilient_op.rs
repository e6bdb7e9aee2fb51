use super::RetryPolicy;
use anyhow::{anyhow, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Runs a fallible async operation under a per-attempt timeout and a retry policy
#[derive(Debug, Clone)]
pub struct ResilientOp {
    name: String,
    policy: RetryPolicy,
    attempt_timeout: Duration,
}

impl ResilientOp {
    pub fn new(name: impl Into<String>, policy: RetryPolicy, attempt_timeout: Duration) -> Self {
        Self {
            name: name.into(),
            policy,
            attempt_timeout,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first success, or the last failure once attempts run out
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.policy.max_attempts();
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match self.policy.delay_before(attempt) {
                Some(delay) if !delay.is_zero() => sleep(delay).await,
                Some(_) => {}
                None => break,
            }

            match timeout(self.attempt_timeout, op()).await {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(e)) => {
                    log::warn!(
                        "{} failed (attempt {}/{}): {:#}",
                        self.name,
                        attempt,
                        max_attempts,
                        e
                    );
                    last_error = Some(e);
                }
                Err(_) => {
                    log::warn!(
                        "{} timed out after {:?} (attempt {}/{})",
                        self.name,
                        self.attempt_timeout,
                        attempt,
                        max_attempts
                    );
                    last_error = Some(anyhow!(
                        "{} timed out after {:?}",
                        self.name,
                        self.attempt_timeout
                    ));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("{} was never attempted", self.name)))
    }
}
