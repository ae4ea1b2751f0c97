//! Countdown-then-capture photo flow
//!
//! The console shows a 3-2-1 countdown before snapping the evidence photo. The
//! source realized this with nested timer callbacks; here it is an explicit
//! finite-state machine (`Idle -> CountingDown(n) -> Captured`) with a
//! cancelable async driver. Cancellation is either an explicit `cancel` or
//! dropping the driver future mid-count.

use std::time::Duration;
use tracing::{debug, info};

/// State of the capture countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    /// Seconds remaining before the shutter fires
    CountingDown(u8),
    Captured,
}

/// What a single tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; value is the new remaining count
    Counting(u8),
    /// Countdown reached zero, the shutter should fire now
    Fire,
}

/// Explicit countdown state machine driven by timer ticks
#[derive(Debug)]
pub struct CountdownCapture {
    state: CaptureState,
}

impl CountdownCapture {
    pub fn new() -> Self {
        Self { state: CaptureState::Idle }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Begin a countdown of `seconds`. Returns false if one is already
    /// running or a capture is pending acknowledgement.
    pub fn start(&mut self, seconds: u8) -> bool {
        if self.state != CaptureState::Idle || seconds == 0 {
            return false;
        }
        self.state = CaptureState::CountingDown(seconds);
        debug!(seconds = %seconds, "capture_countdown_started");
        true
    }

    /// Advance the countdown by one tick. No-op outside `CountingDown`.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        match self.state {
            CaptureState::CountingDown(1) => {
                self.state = CaptureState::Captured;
                info!("capture_fired");
                Some(TickOutcome::Fire)
            }
            CaptureState::CountingDown(n) => {
                self.state = CaptureState::CountingDown(n - 1);
                Some(TickOutcome::Counting(n - 1))
            }
            _ => None,
        }
    }

    /// Abort a running countdown, returning to `Idle`. Returns false when
    /// there was nothing to cancel.
    pub fn cancel(&mut self) -> bool {
        if let CaptureState::CountingDown(remaining) = self.state {
            self.state = CaptureState::Idle;
            debug!(remaining = %remaining, "capture_countdown_cancelled");
            true
        } else {
            false
        }
    }

    /// Acknowledge a completed capture so a new countdown can start
    pub fn reset(&mut self) {
        self.state = CaptureState::Idle;
    }

    /// Drive the countdown with a real timer, invoking `on_tick` with the
    /// remaining count after each second. Returns true when the shutter fired;
    /// dropping the future mid-count leaves the machine in `CountingDown`,
    /// recoverable via `cancel`.
    pub async fn run(&mut self, interval: Duration, mut on_tick: impl FnMut(u8)) -> bool {
        loop {
            match self.state {
                CaptureState::CountingDown(_) => {
                    tokio::time::sleep(interval).await;
                    match self.tick() {
                        Some(TickOutcome::Counting(n)) => on_tick(n),
                        Some(TickOutcome::Fire) => return true,
                        None => return false,
                    }
                }
                _ => return false,
            }
        }
    }
}

impl Default for CountdownCapture {
    fn default() -> Self {
        Self::new()
    }
}
