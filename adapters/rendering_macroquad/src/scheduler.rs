use std::time::Duration;

/// Cooperative pacing for the render loop.
///
/// The window redraws every display frame, but the controller only processes
/// a tick once the advisory delay returned by the previous tick has elapsed.
/// Frame time is accumulated, so slow frames never delay a tick further.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickScheduler {
    wait: Duration,
    elapsed: Duration,
}

impl TickScheduler {
    /// Creates a scheduler whose first tick is due immediately.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wait: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Accounts for a rendered frame and reports whether a tick is due.
    pub fn advance(&mut self, frame_time: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(frame_time);
        self.elapsed >= self.wait
    }

    /// Restarts the countdown after a tick with the delay it recommended.
    pub fn reschedule(&mut self, delay: Duration) {
        self.wait = delay;
        self.elapsed = Duration::ZERO;
    }

    /// Time left until the next tick is due.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.wait.saturating_sub(self.elapsed)
    }
}
