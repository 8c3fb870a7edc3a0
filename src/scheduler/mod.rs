//! Repeating tick source for the timer engine.
//!
//! A pausable wrapper around `tokio::time::Interval`. While paused,
//! [`TickScheduler::next_tick`] never completes, so a `select!` loop simply
//! stops seeing ticks.

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::trace;

/// Period of one timer tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Pausable repeating tick source.
#[derive(Debug)]
pub struct TickScheduler {
    interval: Interval,
    paused: bool,
}

impl TickScheduler {
    /// Creates a scheduler that starts paused.
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            interval,
            paused: true,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stops delivering ticks.
    pub fn pause(&mut self) {
        if !self.paused {
            trace!("tick scheduler paused");
            self.paused = true;
        }
    }

    /// Resumes delivery; the first tick arrives one full period from now.
    pub fn resume(&mut self) {
        if self.paused {
            trace!("tick scheduler resumed");
            self.interval.reset();
            self.paused = false;
        }
    }

    /// Pauses or resumes to match `running`.
    pub fn sync(&mut self, running: bool) {
        if running {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Waits for the next tick. Pending forever while paused.
    pub async fn next_tick(&mut self) {
        if self.paused {
            std::future::pending::<()>().await;
        }
        self.interval.tick().await;
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
