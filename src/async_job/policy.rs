use std::time::Duration;

/// Caller-supplied pacing for [`super::AsyncJob::wait`].
///
/// Has no `Default`. The server documents no polling interval, so the
/// integration layer picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    min_delay: Duration,
    max_delay: Duration,
    exponential: bool,
    max_attempts: Option<u32>,
}

impl PollPolicy {
    /// Wait the same interval between every poll.
    pub fn fixed(delay: Duration) -> Self {
        Self {
            min_delay: delay,
            max_delay: delay,
            exponential: false,
            max_attempts: None,
        }
    }

    /// `min_delay * 2^attempt`, capped at `max_delay`.
    pub fn exponential(min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            min_delay,
            max_delay: max_delay.max(min_delay),
            exponential: true,
            max_attempts: None,
        }
    }

    /// Give up after this many poll calls.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Delay before the poll following `attempt` (0-based) in-progress answers.
    pub fn delay(&self, attempt: u32) -> Duration {
        if !self.exponential {
            return self.min_delay;
        }
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.min_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// Whether another poll is allowed after `polls` calls.
    pub fn allows(&self, polls: u32) -> bool {
        self.max_attempts.map(|max| polls < max).unwrap_or(true)
    }
}
