//! 查询防抖
//!
//! 输入停止 `quiet` 之后才放出最新的查询；和上一次放出的值相同则丢弃。
//! 时间由调用方传入，事件循环在每个 tick 里 `poll`。

use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    quiet: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
    last_emitted: Option<String>,
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl QueryDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            deadline: None,
            last_emitted: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    pub fn push(&mut self, raw: impl Into<String>, now: Instant) {
        self.pending = Some(raw.into());
        self.deadline = Some(now + self.quiet);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        self.deadline = None;
        let query = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(query.as_str()) {
            tracing::trace!("debounced query unchanged");
            return None;
        }

        self.last_emitted = Some(query.clone());
        Some(query)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/debounce.rs"]
mod tests;
