use std::{
    thread,
    time::{Duration, Instant},
};

/// Keeps a loop at a fixed number of ticks per second by sleeping out
/// whatever is left of each tick's time budget.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    budget: Duration,
    last_tick: Option<Instant>,
}

impl RateLimiter {
    pub(crate) fn from_rate(ticks_per_second: u32) -> RateLimiter {
        RateLimiter {
            budget: Duration::from_secs_f64(1. / ticks_per_second.max(1) as f64),
            last_tick: None,
        }
    }

    pub(crate) fn budget(&self) -> Duration {
        self.budget
    }

    /// Blocks until one budget has passed since the previous call and returns
    /// how long it slept. A loop that fell behind is not made to catch up.
    pub(crate) fn wait(&mut self) -> Duration {
        let slept = match self.last_tick {
            Some(last_tick) => {
                let elapsed = last_tick.elapsed();
                if elapsed < self.budget {
                    let remainder = self.budget - elapsed;
                    thread::sleep(remainder);
                    remainder
                } else {
                    Duration::ZERO
                }
            }
            None => Duration::ZERO,
        };
        self.last_tick = Some(Instant::now());
        slept
    }
}
