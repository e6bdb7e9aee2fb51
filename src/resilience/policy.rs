use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How often a failed I/O operation is attempted again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Single attempt
    Never,

    /// Retry right away
    Immediate { max_attempts: usize },

    /// Exponential backoff between attempts, capped at `max_ms`
    Exponential {
        base_ms: u64,
        max_ms: u64,
        max_attempts: usize,
    },
}

impl RetryPolicy {
    /// Total attempts including the first one. Always at least 1.
    pub fn max_attempts(&self) -> usize {
        match self {
            Self::Never => 1,
            Self::Immediate { max_attempts } | Self::Exponential { max_attempts, .. } => {
                (*max_attempts).max(1)
            }
        }
    }

    /// Delay before attempt number `attempt` (1-based), or `None` once attempts are exhausted.
    /// The first attempt never waits.
    pub fn delay_before(&self, attempt: usize) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts() {
            return None;
        }
        if attempt == 1 {
            return Some(Duration::ZERO);
        }

        match self {
            Self::Never => None,
            Self::Immediate { .. } => Some(Duration::ZERO),
            Self::Exponential { base_ms, max_ms, .. } => {
                let exponent = (attempt - 2).min(32) as u32;
                let delay = base_ms.saturating_mul(1u64 << exponent);
                Some(Duration::from_millis(delay.min(*max_ms)))
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::Exponential {
            base_ms: 50,
            max_ms: 1000,
            max_attempts: 3,
        }
    }
}
