//! Scheduler module
//!
//! Runs a cycle immediately, then once per interval, forever.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::Result;

/// Fixed-rate ticker anchored at creation time
///
/// Ticks missed while a cycle overran are dropped rather than replayed.
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Block until the next tick
    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next.checked_duration_since(now) {
            thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }

    /// Move the next deadline past `now`
    fn advance(&mut self, now: Instant) {
        self.next += self.period;
        while self.next <= now && !self.period.is_zero() {
            self.next += self.period;
        }
    }
}

/// Counts and runs cycles
pub struct Scheduler {
    interval: Duration,
    count: u64,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, count: 0 }
    }

    /// Run one cycle
    pub fn tick<F>(&mut self, cycle: &mut F) -> Result<u64>
    where
        F: FnMut() -> Result<()>,
    {
        self.count += 1;
        log::info!("Logging status #{}", self.count);
        cycle()?;
        Ok(self.count)
    }

    /// Run `cycle` now and then on every tick; returns only on error
    pub fn run<F>(&mut self, mut cycle: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let mut ticker = Ticker::new(self.interval);
        self.tick(&mut cycle)?;

        loop {
            ticker.wait();
            self.tick(&mut cycle)?;
        }
    }
}
